//! Addressable strip fixture.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::characteristic::ColorCharacteristics;
use crate::color::{Hsv, Rgb, hsv2rgb, map_to_byte, percent_to_byte};
use crate::driver::{DriverError, SharedStrip, StripDriver};
use crate::range::BrightnessRange;
use crate::unit::LightUnit;

/// A fixture filling a whole pixel strip with one color.
///
/// The strip driver is borrowed through [`SharedStrip`], so several units
/// writing to the same strip serialize on its critical section. Color and
/// global brightness are committed in one flush; partial application is
/// never visible downstream.
pub struct StripUnit<'a, D: StripDriver> {
    chars: ColorCharacteristics<'a>,
    strip: &'a SharedStrip<D>,
    brightness_range: BrightnessRange,
}

impl<'a, D: StripDriver> StripUnit<'a, D> {
    /// Create the unit and prime the strip: uniform white fill at global
    /// brightness 0, pushed in a single commit. The hardware starts dark
    /// but ready.
    pub fn new(
        chars: ColorCharacteristics<'a>,
        strip: &'a SharedStrip<D>,
        brightness_range: BrightnessRange,
    ) -> Result<Self, DriverError> {
        strip.with(|driver| {
            driver.fill(Rgb {
                r: 255,
                g: 255,
                b: 255,
            });
            driver.set_brightness(0);
            driver.commit()
        })?;

        Ok(Self {
            chars,
            strip,
            brightness_range,
        })
    }

    /// Log old→new for every attribute that changed this cycle.
    #[cfg(feature = "esp32-log")]
    fn log_changes(&self) {
        if let Some(next) = self.chars.power.pending() {
            println!(
                "[StripUnit.update] power {} -> {}",
                self.chars.power.value(),
                next
            );
        }
        if let Some(next) = self.chars.hue.pending() {
            println!(
                "[StripUnit.update] hue {} -> {}",
                self.chars.hue.value(),
                next
            );
        }
        if let Some(next) = self.chars.saturation.pending() {
            println!(
                "[StripUnit.update] saturation {} -> {}",
                self.chars.saturation.value(),
                next
            );
        }
        if let Some(next) = self.chars.brightness.pending() {
            println!(
                "[StripUnit.update] brightness {} -> {}",
                self.chars.brightness.value(),
                next
            );
        }
    }
}

impl<D: StripDriver> LightUnit for StripUnit<'_, D> {
    fn update(&mut self) -> Result<(), DriverError> {
        #[cfg(feature = "esp32-log")]
        self.log_changes();

        let power = self.chars.power.effective();
        let hue = map_to_byte(self.chars.hue.effective(), 360.0);
        let sat = map_to_byte(self.chars.saturation.effective(), 100.0);
        let level = percent_to_byte(self.chars.brightness.effective());

        // Convert at full value; brightness goes through the driver's
        // global scalar instead of the color sample. Folding it into the
        // conversion distorts low-value colors.
        let color = hsv2rgb(Hsv {
            hue,
            sat,
            val: 255,
        });

        let brightness = if power {
            self.brightness_range.clamp(level)
        } else {
            0
        };

        self.strip.with(|driver| {
            driver.fill(color);
            driver.set_brightness(brightness);
            driver.commit()
        })?;

        self.chars.commit();
        Ok(())
    }
}
