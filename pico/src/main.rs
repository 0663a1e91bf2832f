//! Weather Display Firmware for Raspberry Pi Pico (RP2040)
//!
//! Cycles Sunny / Cloudy / Rainy scenes on a 1.8" ST7735S TFT. A push button
//! on GPIO15 (to ground) advances the scene.

#![no_std]
#![no_main]

mod display;
mod io;

use defmt::{debug, info};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::Spi;
use weather_common::driver::run_iteration;
use weather_common::{GraphicsSurface, SceneEngine};
use {defmt_rtt as _, panic_probe as _};

use crate::display::{SPI_BUFFER_SIZE, display_spi_config, init_display};
use crate::io::{BlockingTiming, Button};

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"pico-weather"),
    embassy_rp::binary_info::rp_program_description!(c"Weather scene display on ST7735S"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Weather display starting...");

    let p = embassy_rp::init(Default::default());

    // Display pins: CS=17, DC=16, CLK=18, MOSI=19, RST=20, Backlight=21
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let rst = Output::new(p.PIN_20, Level::High);
    let _backlight = Output::new(p.PIN_21, Level::High);

    // TX-only, the panel has no MISO
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, display_spi_config());

    let mut spi_buffer = [0u8; SPI_BUFFER_SIZE];
    let display = init_display(spi, cs, dc, rst, &mut spi_buffer);
    let mut surface = GraphicsSurface::new(display);

    info!("Display initialized!");

    let mut button = Button::new(Input::new(p.PIN_15, Pull::Up));
    let mut timing = BlockingTiming;
    let mut engine = SceneEngine::new();

    info!("Starting main loop on {}", engine.scene());

    loop {
        let report = run_iteration(&mut engine, &mut surface, &mut button, &mut timing);
        if report.redrew_static {
            info!("Scene: {}", engine.scene());
        }
        if let Some(phase) = report.icon_phase {
            debug!("Icon phase: {}", phase);
        }
    }
}
