//! Semantic version detection from git tags.
//!
//! The pipeline describes the nearest matching tag, parses it into a
//! [`VersionRecord`], stamps dirty working trees and renders the record
//! through a format string.

pub mod cli;
pub mod config;
pub mod format;
pub mod git;
pub mod timestamp;
pub mod version;

use chrono::{DateTime, TimeZone};
use eyre::{Context, Result};
use std::fmt::Display;

use config::Config;
use git::TagSource;
pub use version::VersionRecord;

/// Build the version record for the current state of `source`.
pub fn resolve_record<Tz>(source: &dyn TagSource, config: &Config, now: &DateTime<Tz>) -> Result<VersionRecord>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let description = git::describe_or_default(source, &config.pattern, &config.default_version);
    let mut record = VersionRecord::parse(&description, &config.default_version).with_metadata(&config.metadata);
    if record.is_exact_tag() {
        log::info!("Version {} is exactly on a tag", record.version());
    } else {
        log::info!("Version {} is {} commits past its tag", record.version(), record.commits);
    }

    if source.is_dirty() {
        log::info!("Working tree has uncommitted changes");
        record.timestamp = timestamp::stamp(&config.timestamp, now).context("Failed to create timestamp")?;
    }

    Ok(record)
}

/// Resolve and render the version string.
pub fn resolve_version<Tz>(source: &dyn TagSource, config: &Config, now: &DateTime<Tz>) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let record = resolve_record(source, config, now)?;
    let version = format::render(&record, &config.format);
    log::info!("Rendered '{}' as {}", config.format, version);
    Ok(version)
}
