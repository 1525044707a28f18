//! Synthetic commit metadata: author identities, timestamps, and messages.

use chrono::{DateTime, TimeZone, Utc};
use rand::Rng;
use rand::seq::SliceRandom;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace", "Henry", "Ivy", "Jack", "Kevin",
    "Laura", "Mike", "Nancy", "Oliver", "Patricia", "Quinn", "Robert", "Sarah", "Tom", "Uma",
    "Victor", "Wendy", "Xavier", "Yvonne", "Zack",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
];

const EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "protonmail.com",
    "company.com",
    "example.org",
    "dev.local",
    "github.com",
];

/// Commit message templates. `{file}` is the written file's base name.
pub const COMMIT_MESSAGES: &[&str] = &[
    "Add {file}",
    "Update {file}",
    "Refactor {file}",
    "Fix typo in {file}",
    "Improve {file}",
    "Initial commit for {file}",
    "Add new feature: {file}",
    "Remove debug code from {file}",
    "Optimize {file}",
    "Document {file}",
    "Fix bug in {file}",
    "Rename {file}",
    "Move {file} to new location",
    "Add tests for {file}",
    "Update dependencies",
    "Bump version",
    "Add configuration",
    "Clean up code",
    "Merge branch 'develop' into main",
    "Hotfix: fix issue in {file}",
];

/// A commit author. Also used as the committer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Alice");
        let last = LAST_NAMES.choose(rng).copied().unwrap_or("Smith");
        let name = format!("{first} {last}");
        let email = email_for(&name, rng);
        Self { name, email }
    }
}

/// `first.last@domain` from the first two words of `name`, lowercased.
/// A single-word name yields `name@domain`.
pub fn email_for<R: Rng + ?Sized>(name: &str, rng: &mut R) -> String {
    let domain = EMAIL_DOMAINS.choose(rng).copied().unwrap_or("example.org");
    let lower = name.to_lowercase();
    let parts: Vec<&str> = lower.split_whitespace().collect();
    match parts.as_slice() {
        [first, second, ..] => format!("{first}.{second}@{domain}"),
        [only] => format!("{only}@{domain}"),
        [] => format!("dev@{domain}"),
    }
}

/// Inclusive window commit timestamps are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Default for CommitWindow {
    /// 2023-01-01T00:00:00Z through 2025-12-31T00:00:00Z.
    fn default() -> Self {
        Self {
            start: Utc.timestamp_opt(1_672_531_200, 0).single().unwrap_or_default(),
            end: Utc.timestamp_opt(1_767_139_200, 0).single().unwrap_or_default(),
        }
    }
}

impl CommitWindow {
    /// Uniform by second. Successive calls are independent, so files are
    /// not created in chronological order.
    pub fn random_timestamp<R: Rng + ?Sized>(&self, rng: &mut R) -> DateTime<Utc> {
        let start = self.start.timestamp();
        let end = self.end.timestamp().max(start);
        let secs = rng.gen_range(start..=end);
        Utc.timestamp_opt(secs, 0).single().unwrap_or(self.start)
    }
}

/// Pick a commit message and interpolate `file_name`.
pub fn commit_message<R: Rng + ?Sized>(rng: &mut R, file_name: &str) -> String {
    COMMIT_MESSAGES
        .choose(rng)
        .copied()
        .unwrap_or("Add {file}")
        .replace("{file}", file_name)
}

/// Everything a single file write needs besides the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMeta {
    pub message: String,
    pub author: Identity,
    pub timestamp: DateTime<Utc>,
}

impl CommitMeta {
    /// Fresh author, message, and timestamp for a write to `path`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, path: &str, window: &CommitWindow) -> Self {
        let file_name = path.rsplit('/').next().unwrap_or(path);
        let author = Identity::random(rng);
        let message = commit_message(rng, file_name);
        let timestamp = window.random_timestamp(rng);
        Self {
            message,
            author,
            timestamp,
        }
    }
}
