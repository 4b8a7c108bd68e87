use shelf_pack::{ShelfPack, ShelfPackOptions};

fn main() {
    env_logger::init();

    let mut sprite = ShelfPack::with_options(16, 16, ShelfPackOptions { auto_resize: true });

    for _ in 0..5 {
        let packed = sprite
            .pack_one(16, 16)
            .expect("canvas overflowed")
            .expect("auto-resize always makes room");

        println!(
            "Packed {:?} into {}x{} canvas",
            packed,
            sprite.width(),
            sprite.height()
        );
    }
}
