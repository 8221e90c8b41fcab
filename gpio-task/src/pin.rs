//! Pin identifiers and electrical settings
//!
//! Nothing here knows about a particular microcontroller: a [`PinRole`] is
//! only a small id, and it is the [`Hardware`](crate::task::Hardware)
//! implementation that decides whether a given id, direction and pull are
//! usable on the board it drives.

use core::fmt;
use core::ops::Not;

/// Logical GPIO pin, as assigned by a board pin-mapping table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinRole(u8);

impl PinRole {
    /// Create a new pin role
    pub const fn new(id: u8) -> Self {
        Self(id)
    }
}

impl fmt::Display for PinRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Output,
    Input,
}

/// Pull resistor, only meaningful for inputs
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PullMode {
    #[default]
    Floating,
    PullHigh,
    PullLow,
}

/// Logic level of a pin
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    #[default]
    Low,
    High,
}

impl Level {
    /// Whether the level is high
    pub fn is_high(self) -> bool {
        self == Level::High
    }
}

impl Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Low => "low",
            Level::High => "high",
        })
    }
}

/// How a raw input level maps to the asserted state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Reading High means asserted
    ActiveHigh,
    /// Reading Low means asserted, e.g. a button to ground with a pull-up
    ActiveLow,
}

impl Polarity {
    /// Polarity implied by the idle state of a pull resistor
    pub fn from_pull(pull: PullMode) -> Self {
        match pull {
            PullMode::PullHigh => Polarity::ActiveLow,
            PullMode::PullLow | PullMode::Floating => Polarity::ActiveHigh,
        }
    }

    /// Map a raw reading to its logical level
    pub fn apply(self, raw: Level) -> Level {
        match self {
            Polarity::ActiveHigh => raw,
            Polarity::ActiveLow => !raw,
        }
    }
}

/// Input pin of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputConfig {
    /// Pin to read
    pub pin: PinRole,
    /// Pull resistor to enable
    pub pull: PullMode,
    /// Sense of the reading
    pub polarity: Polarity,
}

impl InputConfig {
    /// Create an input whose polarity follows its pull resistor
    pub fn new(pin: PinRole, pull: PullMode) -> Self {
        Self {
            pin,
            pull,
            polarity: Polarity::from_pull(pull),
        }
    }

    /// Override the polarity
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }
}
