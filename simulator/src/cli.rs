//! Command-line options for the simulator.

use clap::Parser;

/// Weather scene display simulator.
///
/// Press SPACE (or T / Enter) to switch scenes, Q or ESC to quit.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Window pixels per display pixel
    #[arg(long, default_value_t = 3)]
    pub window_scale: u32,

    /// Target frame time in milliseconds (the firmware paces at 20 ms)
    #[arg(long, default_value_t = 20)]
    pub frame_ms: u64,

    /// Enable debug logging (per-tick icon draws)
    #[arg(short, long)]
    pub debug: bool,
}
