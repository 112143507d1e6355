use regex::Regex;
use std::sync::LazyLock;

// v<major>.<minor>.<patch>[-<prerelease>][-<commits>-g<hash>]
static DESCRIBE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v([0-9]+)\.([0-9]+)\.([0-9]+)(-([a-zA-Z][a-zA-Z0-9.]*))?(-([0-9]+)-g([0-9a-f]+))?$")
        .expect("describe pattern is valid")
});

static PLAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)$").expect("plain version pattern is valid"));

/// Version components resolved for a single invocation.
///
/// Every field is plain text and an empty string means the component is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionRecord {
    pub major: String,
    pub minor: String,
    pub patch: String,
    pub prerelease: String,
    pub commits: String,
    pub timestamp: String,
    pub metadata: String,
}

impl VersionRecord {
    /// Parse a tag description, falling back to `default` when it doesn't match.
    ///
    /// The fallback tries `default` as a plain `X.Y.Z` first and otherwise keeps
    /// the whole string as an opaque major component. This never fails.
    pub fn parse(description: &str, default: &str) -> Self {
        if let Some(caps) = DESCRIBE_RE.captures(description) {
            let group = |i: usize| caps.get(i).map(|m| m.as_str().to_string()).unwrap_or_default();
            return Self {
                major: group(1),
                minor: group(2),
                patch: group(3),
                prerelease: group(5),
                commits: group(7),
                ..Self::default()
            };
        }

        log::debug!("'{}' is not a version tag, using default '{}'", description, default);

        match PLAIN_RE.captures(default) {
            Some(caps) => Self {
                major: caps[1].to_string(),
                minor: caps[2].to_string(),
                patch: caps[3].to_string(),
                ..Self::default()
            },
            None => Self {
                major: default.to_string(),
                ..Self::default()
            },
        }
    }

    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = metadata.into();
        self
    }

    /// The `{version}` text: non-empty numeric components joined by dots.
    pub fn version(&self) -> String {
        [&self.major, &self.minor, &self.patch]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(".")
    }

    pub fn is_exact_tag(&self) -> bool {
        self.commits.is_empty()
    }
}
