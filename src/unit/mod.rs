//! Light units — one per physical fixture.
//!
//! A closed set of variants sharing one shape: a bundle of borrowed
//! characteristic references plus an update operation that drives the
//! output hardware to match. Units never depend on each other; they are
//! composed only by the enclosing accessory framework.

mod dimmable;
mod on_off;
mod rgb;
mod strip;

pub use dimmable::DimmableUnit;
pub use on_off::OnOffUnit;
pub use rgb::{RgbChannels, RgbUnit};
pub use strip::StripUnit;

use crate::driver::DriverError;

/// The update contract shared by all units.
pub trait LightUnit {
    /// Drive the physical output to match current characteristic state.
    ///
    /// Invoked synchronously by the enclosing framework whenever one or
    /// more characteristics of this unit change. Resolves each attribute
    /// (pending if changed this cycle, committed otherwise), derives the
    /// physical signal, writes it through the driver, then commits the
    /// characteristics. The returned status is the framework's protocol
    /// acknowledgment.
    fn update(&mut self) -> Result<(), DriverError>;
}
