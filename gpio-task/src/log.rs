//! Logging utilities
//!
//! The same macro names are available on both sides: `defmt` when running
//! on the microcontroller, `log` when the crate is built for the host (unit
//! tests).

#[cfg(not(target_arch = "x86_64"))]
pub use defmt::*;

#[cfg(target_arch = "x86_64")]
pub use log::*;

#[cfg(target_arch = "x86_64")]
use core::fmt;

#[cfg(target_arch = "x86_64")]
/// Wrapper to implement Display for Debug, mirroring `defmt::Debug2Format`
pub struct Debug2Format<'a, T: fmt::Debug + ?Sized>(pub &'a T);

#[cfg(target_arch = "x86_64")]
/// impl Display for Debug2Format
impl<T: fmt::Debug + ?Sized> fmt::Display for Debug2Format<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
