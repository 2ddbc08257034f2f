//! Clap derive structures for the `lifeline` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// lifeline -- admin CLI for the Lifeline content backend
#[derive(Debug, Parser)]
#[command(
    name = "lifeline",
    version,
    about = "Manage Lifeline site content from the command line",
    long_about = "Create, edit and delete the videos, gallery photos, about entries,\n\
        press releases and slider images served by a Lifeline backend.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "LIFELINE_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Backend origin (overrides profile)
    #[arg(long, short = 'u', env = "LIFELINE_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "LIFELINE_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "LIFELINE_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "LIFELINE_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage videos
    #[command(alias = "v")]
    Videos(VideosArgs),

    /// Manage gallery photos
    #[command(alias = "g")]
    Gallery(GalleryArgs),

    /// Manage about-page entries
    About(AboutArgs),

    /// Manage press releases
    #[command(alias = "pr")]
    Press(PressArgs),

    /// Manage home-page slider images
    #[command(alias = "slider")]
    Slides(SlidesArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  VIDEOS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct VideosArgs {
    #[command(subcommand)]
    pub command: VideosCommand,
}

#[derive(Debug, Subcommand)]
pub enum VideosCommand {
    /// List all videos
    #[command(alias = "ls")]
    List,

    /// Show one video
    Get {
        /// Video ID
        id: String,
    },

    /// Add a video
    Add(VideoFields),

    /// Edit a video; omitted fields keep their current value
    Edit {
        /// Video ID
        id: String,

        #[command(flatten)]
        fields: VideoFields,
    },

    /// Delete a video
    #[command(alias = "rm")]
    Delete {
        /// Video ID
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct VideoFields {
    /// Title
    #[arg(long)]
    pub title: Option<String>,

    /// Description (sent as the subtitle)
    #[arg(long)]
    pub description: Option<String>,

    /// Hosted video URL
    #[arg(long)]
    pub video_url: Option<String>,

    /// Hosted thumbnail URL
    #[arg(long)]
    pub image_url: Option<String>,

    /// Video file to upload
    #[arg(long, value_name = "PATH")]
    pub video: Option<PathBuf>,

    /// Thumbnail image to upload
    #[arg(long, value_name = "PATH")]
    pub thumbnail: Option<PathBuf>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  GALLERY
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct GalleryArgs {
    #[command(subcommand)]
    pub command: GalleryCommand,
}

#[derive(Debug, Subcommand)]
pub enum GalleryCommand {
    /// List all photos
    #[command(alias = "ls")]
    List,

    /// Show one photo
    Get {
        /// Photo ID
        id: String,
    },

    /// Upload a photo
    Add(PhotoFields),

    /// Replace a photo
    Edit {
        /// Photo ID
        id: String,

        #[command(flatten)]
        fields: PhotoFields,
    },

    /// Delete a photo
    #[command(alias = "rm")]
    Delete {
        /// Photo ID
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct PhotoFields {
    /// Image file to upload
    #[arg(long, value_name = "PATH")]
    pub photo: Option<PathBuf>,

    /// Hosted photo URL
    #[arg(long)]
    pub photo_url: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ABOUT
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AboutArgs {
    #[command(subcommand)]
    pub command: AboutCommand,
}

#[derive(Debug, Subcommand)]
pub enum AboutCommand {
    /// List all about entries
    #[command(alias = "ls")]
    List,

    /// Show one about entry
    Get {
        /// Entry ID
        id: String,
    },

    /// Add a team member
    Add(AboutFields),

    /// Edit a team member; omitted fields keep their current value
    Edit {
        /// Entry ID
        id: String,

        #[command(flatten)]
        fields: AboutFields,
    },

    /// Delete a team member
    #[command(alias = "rm")]
    Delete {
        /// Entry ID
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct AboutFields {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,

    /// Role or title
    #[arg(long)]
    pub designation: Option<String>,

    /// Phone number
    #[arg(long)]
    pub mobile: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Portrait to upload
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PRESS RELEASES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct PressArgs {
    #[command(subcommand)]
    pub command: PressCommand,
}

#[derive(Debug, Subcommand)]
pub enum PressCommand {
    /// List all press releases
    #[command(alias = "ls")]
    List,

    /// Show one press release
    Get {
        /// Press release ID
        id: String,
    },

    /// Add a press release
    Add(PressFields),

    /// Edit a press release; omitted fields keep their current value
    Edit {
        /// Press release ID
        id: String,

        #[command(flatten)]
        fields: PressFields,
    },

    /// Delete a press release
    #[command(alias = "rm")]
    Delete {
        /// Press release ID
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct PressFields {
    /// Headline
    #[arg(long)]
    pub title: Option<String>,

    /// Publish date (e.g. 2024-05-01)
    #[arg(long)]
    pub date: Option<String>,

    /// Hosted image URL
    #[arg(long)]
    pub image_url: Option<String>,

    /// Image file to upload
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SLIDES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SlidesArgs {
    #[command(subcommand)]
    pub command: SlidesCommand,
}

#[derive(Debug, Subcommand)]
pub enum SlidesCommand {
    /// List all slider images
    #[command(alias = "ls")]
    List,

    /// Show one slider image
    Get {
        /// Slide ID (list position when the backend sends none)
        id: String,
    },

    /// Upload a slider image
    Add(SlideFields),

    /// Replace a slider image
    Edit {
        /// Slide ID
        id: String,

        #[command(flatten)]
        fields: SlideFields,
    },

    /// Delete a slider image
    #[command(alias = "rm")]
    Delete {
        /// Slide ID
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct SlideFields {
    /// Image file to upload
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// Hosted image URL
    #[arg(long)]
    pub image_url: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// Set a value on the active profile
    Set {
        /// Profile key: api_url, timeout, insecure, ca_cert
        key: String,

        /// Value to set
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Print the config file location
    Path,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
