use crate::characteristic::Characteristic;
use crate::driver::{DriverError, PwmOutput};
use crate::range::LevelRange;
use crate::unit::LightUnit;

/// A dimmable fixture on a single PWM pin.
///
/// Power and brightness are independent, persistent attributes: turning
/// the fixture off keeps the brightness level, so turning it back on
/// restores the prior level without it being resent.
pub struct DimmableUnit<'a, D: PwmOutput> {
    power: &'a Characteristic<bool>,
    brightness: &'a Characteristic<u8>,
    range: LevelRange,
    pin: D,
}

impl<'a, D: PwmOutput> DimmableUnit<'a, D> {
    pub const fn new(
        power: &'a Characteristic<bool>,
        brightness: &'a Characteristic<u8>,
        range: LevelRange,
        pin: D,
    ) -> Self {
        Self {
            power,
            brightness,
            range,
            pin,
        }
    }
}

impl<D: PwmOutput> LightUnit for DimmableUnit<'_, D> {
    fn update(&mut self) -> Result<(), DriverError> {
        // Power off always drives 0, bypassing the range minimum
        let level = if self.power.effective() {
            self.range.clamp(self.brightness.effective())
        } else {
            0
        };
        self.pin.set_percent(level)?;

        self.power.commit();
        self.brightness.commit();
        Ok(())
    }
}
