use crate::gpio::RpGpio;
use embassy_rp::gpio::Flex;
use embassy_rp::Peripherals;
use gpio_task::board::{PinMap, PinSpec};
use gpio_task::PinRole;

/// On board LED
#[cfg(feature = "pico")]
pub const LED: PinRole = PinRole::new(25);
/// Push button to ground
#[cfg(feature = "pico")]
pub const BUTTON: PinRole = PinRole::new(15);

/// On board LED, lit when driven low
#[cfg(feature = "liatris")]
pub const LED: PinRole = PinRole::new(24);
/// Push button to ground
#[cfg(feature = "liatris")]
pub const BUTTON: PinRole = PinRole::new(26);

/// What the pins above can do
#[cfg(feature = "pico")]
pub const PINS: PinMap<'static> = PinMap::new(&[PinSpec::gpio(LED), PinSpec::gpio(BUTTON)]);
/// What the pins above can do
#[cfg(feature = "liatris")]
pub const PINS: PinMap<'static> =
    PinMap::new(&[PinSpec::gpio(LED).inverted(), PinSpec::gpio(BUTTON)]);

/// Claim the board pins and bind them to their roles
pub fn gpio(p: Peripherals) -> RpGpio {
    let mut hw = RpGpio::new(PINS);
    #[cfg(feature = "pico")]
    {
        hw.add(LED, Flex::new(p.PIN_25));
        hw.add(BUTTON, Flex::new(p.PIN_15));
    }
    #[cfg(feature = "liatris")]
    {
        hw.add(LED, Flex::new(p.PIN_24));
        hw.add(BUTTON, Flex::new(p.PIN_26));
    }
    hw
}
