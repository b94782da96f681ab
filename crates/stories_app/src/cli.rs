use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;
use stories_core::DEFAULT_OVERFETCH_FACTOR;
use stories_engine::{ClientSettings, ServiceSettings, DEFAULT_BASE_URL};

use crate::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(name = "quiet-stories")]
#[command(about = "List the top linked stories from Hacker News, in rank order")]
pub struct Cli {
    /// Number of top stories to display
    #[arg(long, default_value_t = 30)]
    pub num_stories: usize,
    /// Multiplier applied to --num-stories to decide how many ranked items to fetch
    #[arg(long, default_value_t = DEFAULT_OVERFETCH_FACTOR)]
    pub overfetch_factor: f64,
    /// Base URL of the item store API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// With --log-file, log only to the file
    #[arg(short, long, requires = "log_file")]
    pub quiet: bool,
    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn settings(&self) -> (ClientSettings, ServiceSettings) {
        let client = ClientSettings {
            base_url: self.base_url.clone(),
            request_timeout: Duration::from_secs(self.timeout_secs),
            ..ClientSettings::default()
        };
        let service = ServiceSettings {
            target_count: self.num_stories,
            overfetch_factor: self.overfetch_factor,
        };
        (client, service)
    }

    pub fn log_destination(&self) -> LogDestination {
        match (&self.log_file, self.quiet) {
            (Some(path), true) => LogDestination::File(path.clone()),
            (Some(path), false) => LogDestination::Both(path.clone()),
            (None, _) => LogDestination::Terminal,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}
