mod palette;

pub use palette::{Palette, parse_color};
