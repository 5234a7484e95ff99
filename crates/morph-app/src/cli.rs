use std::path::PathBuf;

use clap::Parser;

/// morph: a procedurally displaced sphere lit by two lights.
#[derive(Parser, Debug)]
#[command(name = "morph", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// filter directive such as `morph_renderer=debug`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print every tunable with its current value as JSON and exit.
    #[arg(long)]
    pub dump_params: bool,

    /// Frames (at 60 Hz) to step before `--dump-params` prints.
    #[arg(long, default_value_t = 0, requires = "dump_params")]
    pub frames: u32,
}

impl Args {
    /// The filter directive from `--log-level`, if given.
    pub fn log_directive(&self) -> Option<String> {
        self.log_level.as_deref().map(|level| {
            if level.contains('=') {
                level.to_string()
            } else {
                format!("morph={level}")
            }
        })
    }
}

pub fn parse() -> Args {
    Args::parse()
}
