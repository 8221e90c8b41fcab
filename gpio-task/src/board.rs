//! Pin-mapping tables
//!
//! Vendor pin tables are known to advertise pins that the silicon variant
//! does not actually support, so every table entry states what the pin can
//! do and [`PinMap::validate`] is the single place where a requested
//! configuration is accepted or rejected.

use crate::error::ConfigurationError;
use crate::pin::{Direction, Level, PinRole, PullMode};

/// Capabilities of one pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinSpec {
    /// Pin
    pub role: PinRole,
    /// Can drive a level
    pub output: bool,
    /// Can be read
    pub input: bool,
    /// Has an internal pull-up
    pub pull_high: bool,
    /// Has an internal pull-down
    pub pull_low: bool,
    /// Wired active-low: the load is on when the pin is driven Low
    pub inverted: bool,
}

impl PinSpec {
    /// General purpose pin, usable both ways with both pulls
    pub const fn gpio(role: PinRole) -> Self {
        Self {
            role,
            output: true,
            input: true,
            pull_high: true,
            pull_low: true,
            inverted: false,
        }
    }

    /// Pin that can only be driven
    pub const fn output_only(role: PinRole) -> Self {
        Self {
            role,
            output: true,
            input: false,
            pull_high: false,
            pull_low: false,
            inverted: false,
        }
    }

    /// Pin that can only be read, without internal pulls
    pub const fn input_only(role: PinRole) -> Self {
        Self {
            role,
            output: false,
            input: true,
            pull_high: false,
            pull_low: false,
            inverted: false,
        }
    }

    /// Same pin, wired active-low
    pub const fn inverted(self) -> Self {
        Self {
            inverted: true,
            ..self
        }
    }

    /// Electrical level that puts the pin's load in the `level` state
    pub fn drive_level(&self, level: Level) -> Level {
        if self.inverted {
            !level
        } else {
            level
        }
    }
}

/// Board pin-mapping table
#[derive(Debug, Clone, Copy)]
pub struct PinMap<'a> {
    pins: &'a [PinSpec],
}

impl<'a> PinMap<'a> {
    /// Create a new pin map
    pub const fn new(pins: &'a [PinSpec]) -> Self {
        Self { pins }
    }

    /// Look a pin up
    pub fn get(&self, role: PinRole) -> Option<&'a PinSpec> {
        self.pins.iter().find(|spec| spec.role == role)
    }

    /// Check that `role` can be configured with `direction` and `pull`
    pub fn validate(
        &self,
        role: PinRole,
        direction: Direction,
        pull: PullMode,
    ) -> Result<&'a PinSpec, ConfigurationError> {
        let spec = self
            .get(role)
            .ok_or(ConfigurationError::UnsupportedPin(role))?;
        let direction_ok = match direction {
            Direction::Output => spec.output,
            Direction::Input => spec.input,
        };
        if !direction_ok {
            return Err(ConfigurationError::UnsupportedDirection {
                pin: role,
                direction,
            });
        }
        let pull_ok = match (direction, pull) {
            (_, PullMode::Floating) => true,
            (Direction::Output, _) => false,
            (Direction::Input, PullMode::PullHigh) => spec.pull_high,
            (Direction::Input, PullMode::PullLow) => spec.pull_low,
        };
        if !pull_ok {
            return Err(ConfigurationError::UnsupportedPull { pin: role, pull });
        }
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LED: PinRole = PinRole::new(0);
    const BUTTON: PinRole = PinRole::new(14);
    const SENSE: PinRole = PinRole::new(20);
    const STROBE: PinRole = PinRole::new(21);
    const STATUS: PinRole = PinRole::new(24);

    const PINS: PinMap<'static> = PinMap::new(&[
        PinSpec::gpio(LED),
        PinSpec::gpio(STATUS).inverted(),
        PinSpec::gpio(BUTTON),
        PinSpec::input_only(SENSE),
        PinSpec::output_only(STROBE),
    ]);

    #[test]
    fn test_unknown_pin() {
        assert_eq!(
            PINS.validate(PinRole::new(7), Direction::Output, PullMode::Floating),
            Err(ConfigurationError::UnsupportedPin(PinRole::new(7)))
        );
    }

    #[test]
    fn test_gpio() {
        assert!(PINS
            .validate(LED, Direction::Output, PullMode::Floating)
            .is_ok());
        assert!(PINS
            .validate(BUTTON, Direction::Input, PullMode::PullHigh)
            .is_ok());
        assert!(PINS
            .validate(BUTTON, Direction::Input, PullMode::PullLow)
            .is_ok());
    }

    #[test]
    fn test_output_with_pull() {
        assert_eq!(
            PINS.validate(LED, Direction::Output, PullMode::PullHigh),
            Err(ConfigurationError::UnsupportedPull {
                pin: LED,
                pull: PullMode::PullHigh
            })
        );
    }

    #[test]
    fn test_restricted_pins() {
        assert_eq!(
            PINS.validate(SENSE, Direction::Output, PullMode::Floating),
            Err(ConfigurationError::UnsupportedDirection {
                pin: SENSE,
                direction: Direction::Output
            })
        );
        assert_eq!(
            PINS.validate(SENSE, Direction::Input, PullMode::PullLow),
            Err(ConfigurationError::UnsupportedPull {
                pin: SENSE,
                pull: PullMode::PullLow
            })
        );
        assert!(PINS
            .validate(SENSE, Direction::Input, PullMode::Floating)
            .is_ok());
        assert_eq!(
            PINS.validate(STROBE, Direction::Input, PullMode::Floating),
            Err(ConfigurationError::UnsupportedDirection {
                pin: STROBE,
                direction: Direction::Input
            })
        );
    }

    #[test]
    fn test_drive_level() {
        let led = PINS.get(LED).unwrap();
        assert_eq!(led.drive_level(Level::High), Level::High);
        assert_eq!(led.drive_level(Level::Low), Level::Low);

        let status = PINS
            .validate(STATUS, Direction::Output, PullMode::Floating)
            .unwrap();
        assert!(status.inverted);
        assert!(status.output && status.input);
        assert_eq!(status.drive_level(Level::High), Level::Low);
        assert_eq!(status.drive_level(Level::Low), Level::High);
    }
}
