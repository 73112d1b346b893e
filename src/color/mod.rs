mod utils;

use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use smart_leds::hsv::hsv2rgb;
pub use utils::{hsv2rgb_f32, map_to_byte, percent_to_byte, rgb2hsv_f32};

pub type Rgb = RGB8;
pub type Hsv = HSV;
