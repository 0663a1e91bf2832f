//! Display driver for a 1.8" ST7735S TFT breakout (128x160, portrait).
//!
//! Pin mapping:
//! - CS: GPIO17
//! - DC: GPIO16
//! - CLK: GPIO18 (SPI0 CLK)
//! - MOSI: GPIO19 (SPI0 TX)
//! - Reset: GPIO20
//! - Backlight: GPIO21

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Config as SpiConfig, Spi};
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::Builder;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7735s;
use mipidsi::options::{ColorInversion, ColorOrder};
use weather_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Size of the SPI staging buffer used by `mipidsi` for pixel batches.
pub const SPI_BUFFER_SIZE: usize = 512;

/// Display type alias for the ST7735S on SPI0.
pub type TftDisplay<'d, 'b> = mipidsi::Display<
    SpiInterface<'b, ExclusiveDevice<Spi<'d, SPI0, Blocking>, Output<'d>, NoDelay>, Output<'d>>,
    ST7735s,
    Output<'d>,
>;

/// Initialize the ST7735S.
///
/// Panics if the controller does not accept the init sequence; there is
/// nothing useful to show without a panel.
pub fn init_display<'d, 'b>(
    spi: Spi<'d, SPI0, Blocking>,
    cs: Output<'d>,
    dc: Output<'d>,
    rst: Output<'d>,
    buffer: &'b mut [u8],
) -> TftDisplay<'d, 'b> {
    // GPIO errors are Infallible on the RP2040
    let Ok(spi_device) = ExclusiveDevice::new_no_delay(spi, cs);

    let di = SpiInterface::new(spi_device, dc, buffer);

    // Common red-tab modules wire the panel BGR
    let display = Builder::new(ST7735s, di)
        .display_size(SCREEN_WIDTH as u16, SCREEN_HEIGHT as u16)
        .color_order(ColorOrder::Bgr)
        .invert_colors(ColorInversion::Normal)
        .reset_pin(rst)
        .init(&mut embassy_time::Delay);

    match display {
        Ok(display) => display,
        Err(_) => defmt::panic!("ST7735S init failed"),
    }
}

/// SPI configuration for the ST7735S.
///
/// The controller's write cycle is specified down to 66 ns, so 15 MHz leaves
/// margin for breadboard wiring.
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 15_000_000;
    config
}
