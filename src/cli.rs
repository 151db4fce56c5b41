use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "raycanvas")]
#[command(about = "A recursive ray tracer for small static scenes")]
pub struct Args {
    /// Scene file (TOML); the built-in showcase scene is used when omitted
    #[arg(short, long, help = "Scene file (TOML); the built-in showcase scene is used when omitted")]
    pub config: Option<PathBuf>,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Canvas width in pixels, overriding the scene file
    #[arg(long, help = "Canvas width in pixels, overriding the scene file")]
    pub width: Option<u32>,

    /// Canvas height in pixels, overriding the scene file
    #[arg(long, help = "Canvas height in pixels, overriding the scene file")]
    pub height: Option<u32>,

    /// Maximum reflection depth, overriding the scene file
    #[arg(long, short = 'd', help = "Maximum reflection depth, overriding the scene file")]
    pub depth: Option<u32>,

    /// Send image to TEV for real-time visualization
    #[arg(long, help = "Send image to TEV for real-time visualization")]
    pub tev: bool,

    /// TEV client IP address and port (automatically enables --tev)
    #[arg(long, help = "TEV client IP address and port (automatically enables --tev)")]
    pub tev_address: Option<String>,

    /// Output PNG file path
    #[arg(short, long, default_value = "output.png", help = "Output PNG file path")]
    pub output: PathBuf,

    /// Hide the progress bar
    #[arg(long, help = "Hide the progress bar")]
    pub no_progress: bool,
}
