use crate::characteristic::Characteristic;
use crate::driver::{DigitalOutput, DriverError};
use crate::unit::LightUnit;

/// A plain on/off fixture on a single digital pin.
pub struct OnOffUnit<'a, D: DigitalOutput> {
    power: &'a Characteristic<bool>,
    pin: D,
}

impl<'a, D: DigitalOutput> OnOffUnit<'a, D> {
    pub const fn new(power: &'a Characteristic<bool>, pin: D) -> Self {
        Self { power, pin }
    }
}

impl<D: DigitalOutput> LightUnit for OnOffUnit<'_, D> {
    fn update(&mut self) -> Result<(), DriverError> {
        self.pin.write(self.power.effective())?;
        self.power.commit();
        Ok(())
    }
}
