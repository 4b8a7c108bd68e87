use thiserror::Error;

/// The canvas could not grow far enough to hold a request.
///
/// This only happens with auto-resize enabled, once doubling the canvas would
/// no longer fit in a `u32`. It is distinct from an ordinary "no room" result,
/// which is reported as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GrowError {
    #[error(
        "Canvas of size {width}x{height} cannot grow to fit a \
         {request_width}x{request_height} bin without overflowing"
    )]
    CanvasOverflow {
        width: u32,
        height: u32,
        request_width: u32,
        request_height: u32,
    },
}
