pub mod lazy_images;
pub mod observer;
pub mod parallax;
pub mod reveal;

pub use parallax::use_parallax;
pub use reveal::use_reveal_on_scroll;
