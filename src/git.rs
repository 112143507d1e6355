use log::{debug, info};
use std::path::{Path, PathBuf};
use std::process::Command;

pub const DEFAULT_PATTERN: &str = "v*.*.*";

/// Where tag descriptions and working tree state come from.
pub trait TagSource {
    /// Nearest tag matching `pattern`, or `None` when nothing can be described.
    fn describe(&self, pattern: &str) -> Option<String>;

    /// Whether the working tree has uncommitted changes.
    fn is_dirty(&self) -> bool;
}

/// Runs the `git` executable inside a working tree.
#[derive(Debug, Clone)]
pub struct Git {
    dir: PathBuf,
}

impl Git {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn run(&self, args: &[&str]) -> Option<String> {
        let output = match Command::new("git").args(args).current_dir(&self.dir).output() {
            Ok(output) => output,
            Err(e) => {
                debug!("Failed to run git {}: {}", args.join(" "), e);
                return None;
            }
        };

        if !output.status.success() {
            debug!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return None;
        }

        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl TagSource for Git {
    fn describe(&self, pattern: &str) -> Option<String> {
        self.run(&["describe", "--tags", "--match", pattern])
    }

    fn is_dirty(&self) -> bool {
        self.run(&["status", "--porcelain"])
            .map(|status| !status.is_empty())
            .unwrap_or(false)
    }
}

/// Describe the current reference, or synthesize `v<default>` when that fails.
pub fn describe_or_default(source: &dyn TagSource, pattern: &str, default: &str) -> String {
    match source.describe(pattern) {
        Some(description) => {
            info!("Resolved description: {}", description);
            description
        }
        None => {
            info!("No tag matching '{}', falling back to {}", pattern, default);
            format!("v{}", default)
        }
    }
}
