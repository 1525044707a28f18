//! The outer loop: plan each repository, write its files one at a time,
//! and keep going past per-file and per-repository failures.

use std::future::Future;
use std::ops::AddAssign;
use std::time::{Duration, Instant};

use gitseed_core::{CommitMeta, CommitWindow, FileDescriptor, RepoPlan};
use gitseed_sync::{ContentWriter, WriteOutcome};
use rand::Rng;
use tracing::{error, info, warn};

/// Random sleep ranges between requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub between_files: (Duration, Duration),
    pub between_repos: (Duration, Duration),
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            between_files: (Duration::from_millis(500), Duration::from_millis(1200)),
            between_repos: (Duration::from_secs(3), Duration::from_secs(6)),
        }
    }
}

impl Pacing {
    pub fn none() -> Self {
        Self {
            between_files: (Duration::ZERO, Duration::ZERO),
            between_repos: (Duration::ZERO, Duration::ZERO),
        }
    }

    async fn after_file<R: Rng + ?Sized>(&self, rng: &mut R) {
        pause(draw(rng, self.between_files)).await;
    }

    async fn after_repo<R: Rng + ?Sized>(&self, rng: &mut R) {
        pause(draw(rng, self.between_repos)).await;
    }
}

fn draw<R: Rng + ?Sized>(rng: &mut R, (min, max): (Duration, Duration)) -> Duration {
    if max <= min {
        min
    } else {
        rng.gen_range(min..=max)
    }
}

async fn pause(d: Duration) {
    if !d.is_zero() {
        tokio::time::sleep(d).await;
    }
}

/// Per-repository write counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepoStats {
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RepoStats {
    pub fn attempted(&self) -> usize {
        self.created + self.updated + self.skipped + self.failed
    }

    fn record(&mut self, outcome: WriteOutcome) {
        match outcome {
            WriteOutcome::Created => self.created += 1,
            WriteOutcome::Updated => self.updated += 1,
            WriteOutcome::AlreadyExists => self.skipped += 1,
        }
    }
}

impl AddAssign for RepoStats {
    fn add_assign(&mut self, rhs: Self) {
        self.created += rhs.created;
        self.updated += rhs.updated;
        self.skipped += rhs.skipped;
        self.failed += rhs.failed;
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub repos_done: usize,
    /// Repositories where not a single write went through.
    pub repos_failed: usize,
    pub totals: RepoStats,
    pub interrupted: bool,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub window: CommitWindow,
    pub pacing: Pacing,
}

/// Write one file. Failures of any kind, authorisation included, are
/// logged and counted; they never stop the caller.
async fn write_one<W, R>(
    writer: &W,
    org: &str,
    repo: &str,
    file: &FileDescriptor,
    window: &CommitWindow,
    rng: &mut R,
    stats: &mut RepoStats,
) -> Option<WriteOutcome>
where
    W: ContentWriter + ?Sized,
    R: Rng + ?Sized,
{
    let meta = CommitMeta::random(rng, &file.path, window);
    match writer.create_file(org, repo, file, &meta).await {
        Ok(outcome) => {
            match outcome {
                WriteOutcome::Created | WriteOutcome::Updated => info!(
                    repo,
                    path = %file.path,
                    date = %meta.timestamp.date_naive(),
                    "created"
                ),
                WriteOutcome::AlreadyExists => {
                    warn!(repo, path = %file.path, "file exists, skipping")
                }
            }
            stats.record(outcome);
            Some(outcome)
        }
        Err(e) => {
            error!(repo, path = %file.path, error = %e, "write failed");
            stats.failed += 1;
            None
        }
    }
}

/// Write every file in `plan`: essentials first with a pause after each,
/// then extras with a pause only after a successful write.
pub async fn populate_repo<W, R>(
    writer: &W,
    org: &str,
    plan: &RepoPlan,
    options: &RunOptions,
    rng: &mut R,
) -> RepoStats
where
    W: ContentWriter + ?Sized,
    R: Rng + ?Sized,
{
    info!(
        repo = %plan.repo,
        category = %plan.category,
        files = plan.len(),
        "populating repository"
    );
    let mut stats = RepoStats::default();

    for file in &plan.essentials {
        write_one(writer, org, &plan.repo, file, &options.window, rng, &mut stats).await;
        options.pacing.after_file(rng).await;
    }

    for file in &plan.extras {
        let outcome =
            write_one(writer, org, &plan.repo, file, &options.window, rng, &mut stats).await;
        if matches!(outcome, Some(WriteOutcome::Created | WriteOutcome::Updated)) {
            options.pacing.after_file(rng).await;
        }
    }

    info!(
        repo = %plan.repo,
        created = stats.created,
        skipped = stats.skipped,
        failed = stats.failed,
        "repository done"
    );
    stats
}

/// Populate each repository in turn until done or interrupted. A repository
/// whose writes all fail is logged and counted, and the loop moves on.
/// `interrupt` resolving stops the loop at once; whatever was in flight is
/// dropped.
pub async fn run<W, R, I>(
    writer: &W,
    org: &str,
    repos: &[String],
    options: &RunOptions,
    rng: &mut R,
    interrupt: I,
) -> RunSummary
where
    W: ContentWriter + ?Sized,
    R: Rng + ?Sized,
    I: Future<Output = ()>,
{
    let started = Instant::now();
    let mut summary = RunSummary::default();
    tokio::pin!(interrupt);

    for (idx, repo) in repos.iter().enumerate() {
        info!(repo = %repo, "[{}/{}] processing", idx + 1, repos.len());
        let plan = RepoPlan::generate(repo, rng);

        let stats = tokio::select! {
            biased;
            _ = &mut interrupt => {
                summary.interrupted = true;
                break;
            }
            stats = populate_repo(writer, org, &plan, options, rng) => stats,
        };

        if stats.attempted() > 0 && stats.failed == stats.attempted() {
            error!(repo = %repo, failed = stats.failed, "every write failed");
            summary.repos_failed += 1;
        } else {
            summary.repos_done += 1;
        }
        summary.totals += stats;

        if idx + 1 < repos.len() {
            tokio::select! {
                biased;
                _ = &mut interrupt => {
                    summary.interrupted = true;
                    break;
                }
                _ = options.pacing.after_repo(rng) => {}
            }
        }
    }

    if summary.interrupted {
        warn!("interrupted by user");
    }
    summary.elapsed = started.elapsed();
    summary
}
