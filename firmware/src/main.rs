//! GPIO demos: blink the on board LED, or mirror a push button on it.

#![no_std]
#![no_main]

use crate::config::Settings;
use crate::gpio::RpGpio;
use core::convert::Infallible;
use embassy_executor::Spawner;
use gpio_task::{ConfigurationError, InputConfig, LoopMode, PeriodicGpioTask};
use {defmt_rtt as _, panic_probe as _};

/// Board pin-mapping tables
mod board;
/// Build-time settings
mod config;
/// GPIO and timer binding
mod gpio;

#[cfg(not(any(feature = "blink", feature = "button")))]
compile_error!("Either feature \"blink\" or \"button\" must be enabled.");
#[cfg(all(feature = "blink", feature = "button"))]
compile_error!("Only one of \"blink\" or \"button\" can be enabled at a time.");

#[cfg(not(any(feature = "pico", feature = "liatris")))]
compile_error!("Either feature \"pico\" or \"liatris\" must be enabled.");
#[cfg(all(feature = "pico", feature = "liatris"))]
compile_error!("Only one of \"pico\" or \"liatris\" can be enabled at a time.");

/// Initialize the task and run it until reset
async fn run(
    task: &mut PeriodicGpioTask<RpGpio>,
    settings: &Settings,
) -> Result<Infallible, ConfigurationError> {
    #[cfg(feature = "blink")]
    let (input, period_ms, mode): (Option<InputConfig>, _, _) =
        (None, settings.blink_period_ms, LoopMode::Blink);
    #[cfg(feature = "button")]
    let (input, period_ms, mode): (Option<InputConfig>, _, _) = (
        Some(settings.button(board::BUTTON)),
        settings.button_period_ms,
        LoopMode::MirrorInput,
    );

    task.initialize(board::LED, input)?;
    task.run_forever(period_ms, mode).await
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    defmt::info!("Hello World!");

    let settings = Settings::from_env();
    defmt::info!("Settings: {}", settings);

    let hw = board::gpio(p);
    let mut task = PeriodicGpioTask::new(hw).with_debounce(settings.button_debounce);

    match run(&mut task, &settings).await {
        Ok(never) => match never {},
        Err(e) => defmt::error!("GPIO task not started: {}", e),
    }
}
