//! Discrete-RGB fixture on three PWM channels.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::characteristic::ColorCharacteristics;
use crate::color::hsv2rgb_f32;
use crate::driver::{DriverError, PwmOutput};
use crate::range::LevelRange;
use crate::unit::LightUnit;

/// The three PWM channels of an RGB fixture, one driver per channel.
pub struct RgbChannels<D> {
    pub red: D,
    pub green: D,
    pub blue: D,
}

/// An RGB fixture driven through three discrete PWM pins.
///
/// Each update resolves power/hue/saturation/brightness independently
/// (attributes arrive asynchronously and not necessarily together),
/// converts HSV to RGB and writes one duty percentage per channel.
pub struct RgbUnit<'a, D: PwmOutput> {
    chars: ColorCharacteristics<'a>,
    channels: RgbChannels<D>,
    range: LevelRange,
}

impl<'a, D: PwmOutput> RgbUnit<'a, D> {
    pub const fn new(
        chars: ColorCharacteristics<'a>,
        channels: RgbChannels<D>,
        range: LevelRange,
    ) -> Self {
        Self {
            chars,
            channels,
            range,
        }
    }

    /// Log old→new for every attribute that changed this cycle.
    #[cfg(feature = "esp32-log")]
    fn log_changes(&self) {
        if let Some(next) = self.chars.power.pending() {
            println!(
                "[RgbUnit.update] power {} -> {}",
                self.chars.power.value(),
                next
            );
        }
        if let Some(next) = self.chars.hue.pending() {
            println!(
                "[RgbUnit.update] hue {} -> {}",
                self.chars.hue.value(),
                next
            );
        }
        if let Some(next) = self.chars.saturation.pending() {
            println!(
                "[RgbUnit.update] saturation {} -> {}",
                self.chars.saturation.value(),
                next
            );
        }
        if let Some(next) = self.chars.brightness.pending() {
            println!(
                "[RgbUnit.update] brightness {} -> {}",
                self.chars.brightness.value(),
                next
            );
        }
    }
}

/// Scale a [0, 1] channel onto a duty percentage, truncating.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_percent(channel: f32) -> u8 {
    (channel * 100.0) as u8
}

impl<D: PwmOutput> LightUnit for RgbUnit<'_, D> {
    fn update(&mut self) -> Result<(), DriverError> {
        #[cfg(feature = "esp32-log")]
        self.log_changes();

        let power = self.chars.power.effective();
        let hue = self.chars.hue.effective();
        let saturation = self.chars.saturation.effective();
        let brightness = self.chars.brightness.effective();

        // Hue stays in degrees; saturation and brightness arrive in percent
        let (r, g, b) = hsv2rgb_f32(hue, saturation / 100.0, f32::from(brightness) / 100.0);

        let range = self.range;
        let duty = move |channel: f32| {
            if power {
                range.clamp(to_percent(channel))
            } else {
                0
            }
        };

        self.channels.red.set_percent(duty(r))?;
        self.channels.green.set_percent(duty(g))?;
        self.channels.blue.set_percent(duty(b))?;

        self.chars.commit();
        Ok(())
    }
}
