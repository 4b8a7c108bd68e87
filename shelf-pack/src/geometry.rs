/// An axis-aligned rectangle on the canvas. `pos` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rect {
    pub pos: (u32, u32),
    pub size: (u32, u32),
}

impl Rect {
    pub fn max(&self) -> (u32, u32) {
        (self.pos.0 + self.size.0, self.pos.1 + self.size.1)
    }

    /// Half-open overlap test; rectangles that share an edge do not
    /// intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());

        self.pos.0 < b_max.0
            && other.pos.0 < a_max.0
            && self.pos.1 < b_max.1
            && other.pos.1 < a_max.1
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn rect(x: u32, y: u32, w: u32, h: u32) -> Rect {
        Rect {
            pos: (x, y),
            size: (w, h),
        }
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        assert!(!rect(0, 0, 10, 10).intersects(&rect(10, 0, 10, 10)));
        assert!(!rect(0, 0, 10, 10).intersects(&rect(0, 10, 10, 10)));
    }

    #[test]
    fn overlap() {
        assert!(rect(0, 0, 10, 10).intersects(&rect(5, 5, 10, 10)));
        assert!(rect(5, 5, 1, 1).intersects(&rect(0, 0, 10, 10)));
    }
}
