//! Runtime configuration and command-line arguments

use crate::error::{PanelError, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Fewest panes a panel may hold
pub const MIN_REGIONS: usize = 1;

/// Most panes a panel may hold
pub const MAX_REGIONS: usize = 6;

/// Panes created when nothing else is asked for
pub const INITIAL_REGIONS: usize = 2;

/// Rows reserved below the panes for the help bar
pub const HELP_HEIGHT: u16 = 5;

/// Half-period of the cursor blink
pub const BLINK_INTERVAL: Duration = Duration::from_millis(530);

pub const DEFAULT_PLACEHOLDER: &str = "Type something";

/// Command-line arguments for the `panedit` binary
#[derive(Parser, Debug)]
#[command(name = "panedit")]
#[command(about = "Edit several short text blocks side by side", long_about = None)]
#[command(version)]
pub struct Args {
    /// Number of panes to open (1-6)
    #[arg(short, long, default_value_t = INITIAL_REGIONS)]
    pub panes: usize,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Text shown in empty panes
    #[arg(long, default_value = DEFAULT_PLACEHOLDER)]
    pub placeholder: String,
}

/// Validated settings used to build the panel and the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub panes: usize,
    pub help_height: u16,
    pub blink_interval: Duration,
    pub placeholder: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            panes: INITIAL_REGIONS,
            help_height: HELP_HEIGHT,
            blink_interval: BLINK_INTERVAL,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Check the pane count against [`MIN_REGIONS`] and [`MAX_REGIONS`]
    pub fn validate(&self) -> Result<()> {
        check_region_count(self.panes)
    }
}

impl TryFrom<Args> for Config {
    type Error = PanelError;

    fn try_from(args: Args) -> Result<Self> {
        let config = Config {
            panes: args.panes,
            placeholder: args.placeholder,
            log_file: args.log_file,
            ..Config::default()
        };
        config.validate()?;
        Ok(config)
    }
}

pub(crate) fn check_region_count(count: usize) -> Result<()> {
    if (MIN_REGIONS..=MAX_REGIONS).contains(&count) {
        Ok(())
    } else {
        Err(PanelError::RegionCount {
            count,
            min: MIN_REGIONS,
            max: MAX_REGIONS,
        })
    }
}
