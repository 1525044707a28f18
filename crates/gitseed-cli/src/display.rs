//! Console output for the banner, dry-run plans, and the end-of-run summary.

use std::fmt::Write;

use gitseed_core::{FILE_COUNT_RANGE, RepoPlan};

use crate::populate::RunSummary;

const RULE_WIDTH: usize = 80;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Mean of the per-repository file count range.
fn mean_files_per_repo() -> usize {
    (FILE_COUNT_RANGE.start() + FILE_COUNT_RANGE.end()) / 2
}

pub fn banner(org: &str, repo_count: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "gitseed v{}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "Organisation:        {org}");
    let _ = writeln!(out, "Repositories:        {repo_count}");
    let _ = writeln!(
        out,
        "Files per repo:      {}-{}",
        FILE_COUNT_RANGE.start(),
        FILE_COUNT_RANGE.end()
    );
    let _ = writeln!(
        out,
        "Estimated requests:  ~{}",
        repo_count * mean_files_per_repo()
    );
    let _ = writeln!(out, "The token needs write access to every listed repository.");
    let _ = write!(out, "{}", rule());
    out
}

/// One block per repository: category, then each planned path.
pub fn plan(plan: &RepoPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} [{}] {} files",
        plan.repo,
        plan.category,
        plan.len()
    );
    let width = plan.files().map(|f| f.path.len()).max().unwrap_or(0);
    for f in plan.files() {
        let kind = if f.is_binary() { "binary" } else { "text" };
        let _ = writeln!(
            out,
            "  {:<width$}  {:>6} B  {kind}",
            f.path,
            f.content.len()
        );
    }
    out
}

pub fn summary(s: &RunSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule());
    let status = if s.interrupted {
        "Stopped by user."
    } else {
        "Done."
    };
    let _ = writeln!(out, "{status}");
    let _ = writeln!(
        out,
        "Repositories: {} done, {} failed",
        s.repos_done, s.repos_failed
    );
    let _ = writeln!(
        out,
        "Files:        {} created, {} updated, {} skipped, {} failed",
        s.totals.created, s.totals.updated, s.totals.skipped, s.totals.failed
    );
    let _ = writeln!(
        out,
        "Elapsed:      {:.1} min",
        s.elapsed.as_secs_f64() / 60.0
    );
    let _ = write!(out, "{}", rule());
    out
}
