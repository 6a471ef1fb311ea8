use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "lastbutton",
    version,
    about = "Three buttons, a label and some toasts"
)]
pub struct Args {
    /// Config file to use instead of the default location
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Theme name (e.g., "Catppuccin Latte")
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Ticks per second
    #[arg(long)]
    pub tick_rate: Option<f64>,

    /// Frames per second
    #[arg(long)]
    pub frame_rate: Option<f64>,
}
