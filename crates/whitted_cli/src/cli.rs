use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable from the command line
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

/// What to produce for each scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Effect {
    /// One primary ray per pixel
    Plain,
    /// 5x5 stratified sub-rays per pixel
    Supersampling,
    /// Pulsing spheres written as a looping GIF
    Animation,
    /// Spheres averaged over several vertical offsets
    MotionBlur,
}

impl Effect {
    /// Output path for a scene rendered with this effect.
    ///
    /// Single images use the file name from the scene document; the
    /// multi-frame effects derive theirs from it.
    pub fn output_path(self, output_dir: &Path, output_file: &str) -> PathBuf {
        let stem = Path::new(output_file)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "render".to_string());

        match self {
            Effect::Plain | Effect::Supersampling => output_dir.join(output_file),
            Effect::Animation => output_dir.join(format!("{stem}_animation.gif")),
            Effect::MotionBlur => output_dir.join(format!("{stem}_motionblur.png")),
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "whitted")]
#[command(about = "Whitted-style ray tracer for XML scene files")]
pub struct Args {
    /// Scene files to render
    pub scenes: Vec<PathBuf>,

    /// Render every *.xml scene in a directory
    #[arg(long, value_name = "DIR")]
    pub all: Option<PathBuf>,

    /// Rendering effect
    #[arg(short, long, value_enum, default_value = "plain")]
    pub effect: Effect,

    /// Directory the images are written to
    #[arg(short, long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
