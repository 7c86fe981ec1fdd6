use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log verbosity selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

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

#[derive(Parser, Debug)]
#[command(name = "glint")]
#[command(about = "Render spheres and OBJ meshes with Blinn-Phong shading")]
pub struct Args {
    /// Scene description (JSON); the built-in showcase scene is used if omitted
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Output image (.png for PNG, anything else writes plain PPM)
    #[arg(short, long, default_value = "output.ppm")]
    pub output: PathBuf,

    /// Image width in pixels, overriding the scene
    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long, value_enum, default_value = "info", help = "Set the logging level")]
    pub log_level: LogLevel,

    /// Write the showcase scene as JSON to this path and exit
    #[arg(long, value_name = "PATH")]
    pub write_default_scene: Option<PathBuf>,
}
