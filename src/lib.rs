#![no_std]

pub mod characteristic;
pub mod color;
pub mod driver;
pub mod range;
pub mod unit;

pub use characteristic::{Characteristic, ColorCharacteristics};
pub use color::{Hsv, Rgb};
pub use driver::{DigitalOutput, DriverError, PwmOutput, SharedStrip, StripDriver};
pub use range::{BrightnessRange, LevelRange, RangeError};
pub use unit::{DimmableUnit, LightUnit, OnOffUnit, RgbChannels, RgbUnit, StripUnit};
