//! Periodic GPIO task.

// The task owns one output pin and, optionally, one input pin. Once
// initialized it runs a fixed-period loop until the device is reset:
//
// 1. compute the next output level, either by flipping the previous one
//    (blink) or from the input reading (mirror),
// 2. write it,
// 3. sleep for the period.
//
// The only point where the loop yields is the sleep. The input reading goes
// through a debouncer, then through the input polarity: a button wired to
// ground with a pull-up reads Low while pressed, so it is ActiveLow and its
// reading is inverted before being written to the output.

use crate::error::ConfigurationError;
#[cfg(feature = "log-iterations")]
use crate::log::debug;
use crate::log::{error, info, warn, Debug2Format};
use crate::pin::{Direction, InputConfig, Level, PinRole, PullMode};
use core::convert::Infallible;
use core::future;
use keyberon::debounce::Debouncer;

/// Largest debouncing setting: the debouncer counts up to `nb_bounce + 1`
pub const MAX_DEBOUNCE: u16 = u16::MAX - 1;

/// Hardware trait
///
/// GPIO and timing primitives provided by the board support code.
pub trait Hardware {
    /// Configure a pin, failing if the board cannot do it
    fn configure_pin(
        &mut self,
        pin: PinRole,
        direction: Direction,
        pull: PullMode,
    ) -> Result<(), ConfigurationError>;
    /// Drive an output pin
    fn write_pin(&mut self, pin: PinRole, level: Level);
    /// Sample an input pin
    fn read_pin(&mut self, pin: PinRole) -> Level;
    /// Suspend the task
    fn sleep_ms(&mut self, duration: u32) -> impl future::Future<Output = ()> + Send;
}

/// What each iteration writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoopMode {
    /// Flip the output
    Blink,
    /// Copy the (debounced, polarity adjusted) input to the output
    MirrorInput,
}

/// Lifecycle of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TaskState {
    /// Pins not configured yet
    Idle,
    /// Pins configured, the loop may run
    Running,
}

/// Task driving an output pin on a fixed period
pub struct PeriodicGpioTask<H: Sized + Hardware> {
    /// Output pin, set once initialized
    output: Option<PinRole>,
    /// Input pin
    input: Option<InputConfig>,

    /// Last level computed for the output
    level: Level,

    /// Debouncer for the input, created on the first sample
    debouncer: Option<Debouncer<Level>>,
    /// Samples an input change must last
    nb_bounce: u16,

    /// Hardware
    pub hw: H,
}

impl<H: Sized + Hardware> PeriodicGpioTask<H> {
    /// Create a new idle task
    pub fn new(hw: H) -> Self {
        Self {
            output: None,
            input: None,
            level: Level::Low,
            debouncer: None,
            nb_bounce: 0,
            hw,
        }
    }

    /// Require an input change to be sampled more than `nb_bounce` times
    /// before it reaches the output
    ///
    /// Settings above [`MAX_DEBOUNCE`] are clamped.
    pub fn with_debounce(mut self, nb_bounce: u16) -> Self {
        if nb_bounce > MAX_DEBOUNCE {
            warn!("Debounce {} too large, using {}", nb_bounce, MAX_DEBOUNCE);
        }
        self.nb_bounce = nb_bounce.min(MAX_DEBOUNCE);
        self.debouncer = None;
        self
    }

    /// Current lifecycle state
    pub fn state(&self) -> TaskState {
        if self.output.is_some() {
            TaskState::Running
        } else {
            TaskState::Idle
        }
    }

    /// Last level written, Low before the first iteration
    pub fn level(&self) -> Level {
        self.level
    }

    /// Output pin, once initialized
    pub fn output(&self) -> Option<PinRole> {
        self.output
    }

    /// Input pin, if any
    pub fn input(&self) -> Option<InputConfig> {
        self.input
    }

    /// Configure the pins and move to [`TaskState::Running`]
    ///
    /// On error the task stays idle and can be initialized again.
    pub fn initialize(
        &mut self,
        output: PinRole,
        input: Option<InputConfig>,
    ) -> Result<(), ConfigurationError> {
        if self.state() == TaskState::Running {
            return Err(ConfigurationError::AlreadyRunning);
        }
        self.configure(output, input).inspect_err(|e| {
            error!("Cannot initialize task: {}", e);
        })?;
        self.output = Some(output);
        self.input = input;
        info!("Task initialized, output {}", output);
        Ok(())
    }

    fn configure(
        &mut self,
        output: PinRole,
        input: Option<InputConfig>,
    ) -> Result<(), ConfigurationError> {
        self.hw
            .configure_pin(output, Direction::Output, PullMode::Floating)?;
        if let Some(input) = input {
            self.hw
                .configure_pin(input.pin, Direction::Input, input.pull)?;
        }
        Ok(())
    }

    /// Run one iteration, without the sleep, and return the level written
    pub fn run_once(&mut self, mode: LoopMode) -> Result<Level, ConfigurationError> {
        let output = self.output.ok_or(ConfigurationError::NotRunning)?;
        let level = match mode {
            LoopMode::Blink => !self.level,
            LoopMode::MirrorInput => {
                let input = self.input.ok_or(ConfigurationError::MissingInput)?;
                let raw = self.hw.read_pin(input.pin);
                let nb_bounce = self.nb_bounce;
                let debouncer = self
                    .debouncer
                    .get_or_insert_with(|| Debouncer::new(raw, raw, nb_bounce));
                debouncer.update(raw);
                input.polarity.apply(*debouncer.get())
            }
        };
        self.level = level;
        self.hw.write_pin(output, level);
        #[cfg(feature = "log-iterations")]
        debug!("{} -> {}", output, level);
        Ok(level)
    }

    /// Run the loop until the device is reset
    ///
    /// Only returns on a configuration error detected before the first
    /// iteration.
    pub async fn run_forever(
        &mut self,
        period_ms: u32,
        mode: LoopMode,
    ) -> Result<Infallible, ConfigurationError> {
        if self.output.is_none() {
            return Err(ConfigurationError::NotRunning);
        }
        if period_ms == 0 {
            return Err(ConfigurationError::ZeroPeriod);
        }
        if mode == LoopMode::MirrorInput && self.input.is_none() {
            return Err(ConfigurationError::MissingInput);
        }
        info!("Running {} every {} ms", Debug2Format(&mode), period_ms);
        loop {
            self.run_once(mode)?;
            self.hw.sleep_ms(period_ms).await;
        }
    }
}
