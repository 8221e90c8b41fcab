#![cfg_attr(not(test), no_std)]

#[cfg(all(not(target_arch = "x86_64"), not(feature = "defmt")))]
compile_error!("Feature \"defmt\" must be enabled when building for an embedded target.");

/// Logging facade: defmt on target, log on the host
pub mod log;

/// Pin identifiers, directions, pulls and levels
pub mod pin;

/// Configuration errors
pub mod error;

/// Board pin-mapping tables
pub mod board;

/// Periodic task driving an output pin
pub mod task;

pub use error::ConfigurationError;
pub use pin::{Direction, InputConfig, Level, PinRole, Polarity, PullMode};
pub use task::{Hardware, LoopMode, PeriodicGpioTask, TaskState, MAX_DEBOUNCE};
