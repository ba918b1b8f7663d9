pub mod apply;
pub mod batch;
pub mod completions;
pub mod init;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::discovery::EffectsConfig;
use crate::error::Result;
use crate::types::EffectRequest;

/// iconfx - Icon effect processor
#[derive(Parser, Debug)]
#[command(name = "iconfx")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply effects to a single icon
    Apply(apply::ApplyArgs),

    /// Apply the manifest's effects to every icon in a project
    Batch(batch::BatchArgs),

    /// Initialize an iconfx project (generates iconfx.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Effect flags shared by commands that take effects on the command line.
#[derive(Args, Debug, Clone, Default)]
pub struct EffectArgs {
    /// Flatten semi-transparent pixels into opaque grey
    #[arg(long)]
    pub remove_partial_transparency: bool,

    /// Only flatten pixels with alpha >= VALUE (0-255, default 0 = all)
    #[arg(long, value_name = "VALUE", default_value_t = 0, allow_negative_numbers = true)]
    pub opacity_threshold: i64,

    /// Add a circular outline around visible pixels, e.g. "14px #bdbabd"
    #[arg(long, value_name = "SPEC")]
    pub outline: Option<String>,

    /// Adjust brightness (-100 to 100, 0 = no change)
    #[arg(long, value_name = "VALUE", allow_negative_numbers = true)]
    pub brightness: Option<i64>,

    /// Shrink the artwork to leave PIXELS of transparent padding on each side
    #[arg(long, value_name = "PIXELS")]
    pub padding: Option<u32>,
}

impl EffectArgs {
    /// Build a pipeline request, rejecting a malformed outline up front.
    pub fn to_request(&self) -> Result<EffectRequest> {
        EffectsConfig {
            padding: self.padding,
            remove_partial_transparency: self.remove_partial_transparency,
            opacity_threshold: Some(self.opacity_threshold),
            brightness: self.brightness,
            outline: self.outline.clone(),
        }
        .to_request()
    }
}
