use core::future;
use embassy_rp::gpio::{self, Flex, Pull};
use embassy_time::Timer;
use gpio_task::board::PinMap;
use gpio_task::{ConfigurationError, Direction, Hardware, Level, PinRole, PullMode};
use heapless::LinearMap;

/// Maximum number of pins a board can hand to the task
const MAX_PINS: usize = 4;

/// GPIO and timer of the RP2040, as seen by the task
pub struct RpGpio {
    /// What each pin of the board can do
    map: PinMap<'static>,
    /// Pins claimed from the HAL
    pins: LinearMap<PinRole, Flex<'static>, MAX_PINS>,
}

impl RpGpio {
    /// Create a new binding with no pin claimed
    pub fn new(map: PinMap<'static>) -> Self {
        Self {
            map,
            pins: LinearMap::new(),
        }
    }

    /// Hand a HAL pin over under the given role
    pub fn add(&mut self, role: PinRole, pin: Flex<'static>) {
        if self.pins.insert(role, pin).is_err() {
            defmt::error!("Pin table is full, {} is not available", role);
        }
    }
}

fn to_rp_pull(pull: PullMode) -> Pull {
    match pull {
        PullMode::Floating => Pull::None,
        PullMode::PullHigh => Pull::Up,
        PullMode::PullLow => Pull::Down,
    }
}

fn to_rp_level(level: Level) -> gpio::Level {
    match level {
        Level::Low => gpio::Level::Low,
        Level::High => gpio::Level::High,
    }
}

impl Hardware for RpGpio {
    fn configure_pin(
        &mut self,
        pin: PinRole,
        direction: Direction,
        pull: PullMode,
    ) -> Result<(), ConfigurationError> {
        let spec = self.map.validate(pin, direction, pull)?;
        // Listed on the board but never claimed in `board::gpio`
        let flex = self
            .pins
            .get_mut(&pin)
            .ok_or(ConfigurationError::UnsupportedPin(pin))?;
        flex.set_pull(to_rp_pull(pull));
        match direction {
            Direction::Output => {
                flex.set_level(to_rp_level(spec.drive_level(Level::Low)));
                flex.set_as_output();
            }
            Direction::Input => flex.set_as_input(),
        }
        defmt::debug!("{} configured as {} ({})", pin, direction, pull);
        Ok(())
    }

    fn write_pin(&mut self, pin: PinRole, level: Level) {
        let level = match self.map.get(pin) {
            Some(spec) => spec.drive_level(level),
            None => level,
        };
        match self.pins.get_mut(&pin) {
            Some(flex) => flex.set_level(to_rp_level(level)),
            None => defmt::warn!("Write to unclaimed pin {}", pin),
        }
    }

    fn read_pin(&mut self, pin: PinRole) -> Level {
        match self.pins.get(&pin) {
            Some(flex) => Level::from(flex.is_high()),
            None => {
                defmt::warn!("Read from unclaimed pin {}", pin);
                Level::Low
            }
        }
    }

    fn sleep_ms(&mut self, duration: u32) -> impl future::Future<Output = ()> + Send {
        Timer::after_millis(duration.into())
    }
}
