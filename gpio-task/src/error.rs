//! Configuration errors

use crate::pin::{Direction, PinRole, PullMode};
use core::fmt;

/// The only error kind of a task: something about how it was set up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigurationError {
    /// The pin is not in the board pin-mapping table
    UnsupportedPin(PinRole),
    /// The pin cannot be used in this direction
    UnsupportedDirection { pin: PinRole, direction: Direction },
    /// The pull resistor is not available, or not applicable, on this pin
    UnsupportedPull { pin: PinRole, pull: PullMode },
    /// `initialize` called on a running task
    AlreadyRunning,
    /// The task was never initialized
    NotRunning,
    /// Mirroring requested but no input pin was given
    MissingInput,
    /// A loop period of 0 ms would never yield
    ZeroPeriod,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedPin(pin) => write!(f, "pin {} is not supported", pin),
            Self::UnsupportedDirection { pin, direction } => {
                write!(f, "pin {} cannot be used as {:?}", pin, direction)
            }
            Self::UnsupportedPull { pin, pull } => {
                write!(f, "pull {:?} is not supported on pin {}", pull, pin)
            }
            Self::AlreadyRunning => write!(f, "task is already running"),
            Self::NotRunning => write!(f, "task is not initialized"),
            Self::MissingInput => write!(f, "no input pin configured"),
            Self::ZeroPeriod => write!(f, "loop period must be at least 1 ms"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ConfigurationError::UnsupportedPin(PinRole::new(7)).to_string(),
            "pin P7 is not supported"
        );
        assert_eq!(
            ConfigurationError::UnsupportedPull {
                pin: PinRole::new(3),
                pull: PullMode::PullHigh,
            }
            .to_string(),
            "pull PullHigh is not supported on pin P3"
        );
        assert_eq!(
            ConfigurationError::ZeroPeriod.to_string(),
            "loop period must be at least 1 ms"
        );
    }
}
