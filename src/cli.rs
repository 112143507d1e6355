use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "vermouth",
    about = "Semantic version detection from git tags",
    version = env!("GIT_DESCRIBE"),
    disable_version_flag = true,
    after_help = "Format placeholders:
  {major}       Major version number
  {minor}       Minor version number
  {patch}       Patch version number
  {version}     {major}.{minor}.{patch}
  {prerelease}  Pre-release identifier (e.g., beta1)
  {commits}     Commits since tag
  {timestamp}   Timestamp for uncommitted changes
  {metadata}    Build metadata
  {version+}    Full version: {version}-{prerelease}-{commits}-{timestamp}+{metadata}

Format examples:
  {version+}              1.2.3-beta1-5-20251205143022+build
  v{version+}             v1.2.3-beta1-5-20251205143022+build
  v{version}              v1.2.3
  {major}.{minor}         1.2
  {version}-SNAPSHOT      1.2.3-SNAPSHOT

Logs are written to: ~/.local/share/vermouth/logs/vermouth.log"
)]
pub struct Cli {
    /// Show vermouth version
    #[arg(short = 'v', long = "version", action = ArgAction::SetTrue)]
    pub version: bool,

    /// Timestamp format for uncommitted changes (default: YYYYMMddHHmmss)
    #[arg(long, value_name = "FORMAT")]
    pub timestamp: Option<String>,

    /// Sets the metadata part of the version
    #[arg(long, value_name = "VALUE")]
    pub metadata: Option<String>,

    /// Default version if none found (default: 0.0.1)
    #[arg(long = "default", value_name = "VERSION")]
    pub default_version: Option<String>,

    /// Git tag pattern to match (default: v*.*.*)
    #[arg(long, value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Output format (default: {version+})
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Path to config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Working tree to inspect (default: current directory)
    #[arg(short = 'C', long, value_name = "PATH")]
    pub directory: Option<PathBuf>,
}
