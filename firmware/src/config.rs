//! Build-time settings
//!
//! `build.rs` forwards the environment variables below (or their defaults)
//! to the compiler. A value that does not parse falls back to the default.

use core::str::FromStr;
use gpio_task::MAX_DEBOUNCE;
#[cfg(feature = "button")]
use gpio_task::{InputConfig, PinRole, Polarity, PullMode};

/// Blink period, in ms
const DEFAULT_BLINK_PERIOD_MS: u32 = 1000;
/// Button polling period, in ms
const DEFAULT_BUTTON_PERIOD_MS: u32 = 100;

/// Settings of the running application
#[derive(Debug, Clone, Copy, defmt::Format)]
pub struct Settings {
    /// Period of the blink loop
    pub blink_period_ms: u32,
    /// Period of the button loop
    pub button_period_ms: u32,
    /// The button drives the line high when pressed
    pub button_active_high: bool,
    /// Debouncing samples of the button
    pub button_debounce: u16,
}

impl Settings {
    /// Read the settings baked in at build time
    pub fn from_env() -> Self {
        Self {
            blink_period_ms: parse(
                "BLINK_PERIOD_MS",
                env!("BLINK_PERIOD_MS"),
                DEFAULT_BLINK_PERIOD_MS,
            ),
            button_period_ms: parse(
                "BUTTON_PERIOD_MS",
                env!("BUTTON_PERIOD_MS"),
                DEFAULT_BUTTON_PERIOD_MS,
            ),
            button_active_high: parse("BUTTON_ACTIVE_HIGH", env!("BUTTON_ACTIVE_HIGH"), false),
            button_debounce: debounce(parse("BUTTON_DEBOUNCE", env!("BUTTON_DEBOUNCE"), 0)),
        }
    }

    /// Input configuration of the button
    ///
    /// The pull resistor holds the line at its released level.
    #[cfg(feature = "button")]
    pub fn button(&self, pin: PinRole) -> InputConfig {
        if self.button_active_high {
            InputConfig::new(pin, PullMode::PullLow).with_polarity(Polarity::ActiveHigh)
        } else {
            InputConfig::new(pin, PullMode::PullHigh)
        }
    }
}

fn parse<T: FromStr + defmt::Format>(name: &str, raw: &str, default: T) -> T {
    raw.trim().parse().unwrap_or_else(|_| {
        defmt::warn!("Invalid {} value \"{}\", using {}", name, raw, default);
        default
    })
}

fn debounce(nb_bounce: u16) -> u16 {
    if nb_bounce > MAX_DEBOUNCE {
        defmt::warn!("BUTTON_DEBOUNCE {} is too large, using {}", nb_bounce, MAX_DEBOUNCE);
        MAX_DEBOUNCE
    } else {
        nb_bounce
    }
}
