//! Per-repository file planning.
//!
//! A [`RepoPlan`] is the full, ordered list of files to write into one
//! repository: the six essentials first, then randomly drawn extras until the
//! total reaches a count in [`FILE_COUNT_RANGE`].

use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::category::{Category, categorize};
use crate::render::{Placeholder, Substitutions, random_string, render};
use crate::templates;

/// Total files per repository, essentials included.
pub const FILE_COUNT_RANGE: RangeInclusive<usize> = 30..=45;

const PNG_CHANCE: f64 = 0.10;
const SVG_CHANCE: f64 = 0.15;
const ICO_CHANCE: f64 = 0.18;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Binary(Vec<u8>),
}

impl FileContent {
    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Binary(_))
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(s) => s.as_bytes(),
            Self::Binary(b) => b,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Binary(_) => None,
        }
    }
}

/// One file to write: repository-relative path plus content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub path: String,
    pub content: FileContent,
}

impl FileDescriptor {
    pub fn text(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: FileContent::Text(content.into()),
        }
    }

    pub fn binary(path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: FileContent::Binary(content.into()),
        }
    }

    /// Last path segment.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    pub fn is_binary(&self) -> bool {
        self.content.is_binary()
    }
}

/// The files every repository receives before anything random.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EssentialFile {
    Readme,
    License,
    Gitignore,
    EditorConfig,
    Contributing,
    Changelog,
}

impl EssentialFile {
    /// Write order.
    pub const ALL: [EssentialFile; 6] = [
        EssentialFile::Readme,
        EssentialFile::License,
        EssentialFile::Gitignore,
        EssentialFile::EditorConfig,
        EssentialFile::Contributing,
        EssentialFile::Changelog,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Readme => "README.md",
            Self::License => "LICENSE",
            Self::Gitignore => ".gitignore",
            Self::EditorConfig => ".editorconfig",
            Self::Contributing => "CONTRIBUTING.md",
            Self::Changelog => "CHANGELOG.md",
        }
    }

    /// Build this file's content for `repo_name`.
    pub fn build<R: Rng + ?Sized>(
        &self,
        category: Category,
        repo_name: &str,
        rng: &mut R,
    ) -> FileDescriptor {
        let repo_subs = |rng: &mut R| {
            Substitutions::random(rng, self.path())
                .with(Placeholder::RepoName, repo_name)
                .with(Placeholder::Tech, repo_name)
        };
        let content = match self {
            Self::Readme => repo_subs(rng).apply(templates::readme_template(category)),
            Self::License => {
                let (_, text) = templates::LICENSES
                    .choose(rng)
                    .copied()
                    .unwrap_or(templates::LICENSES[0]);
                repo_subs(rng).apply(text)
            }
            Self::Gitignore => templates::gitignore_template(category, repo_name).to_string(),
            Self::EditorConfig => templates::EDITORCONFIG.to_string(),
            Self::Contributing => repo_subs(rng).apply(templates::CONTRIBUTING),
            Self::Changelog => repo_subs(rng).apply(templates::CHANGELOG),
        };
        FileDescriptor::text(self.path(), content)
    }
}

/// The six essentials in write order.
pub fn essential_files<R: Rng + ?Sized>(
    category: Category,
    repo_name: &str,
    rng: &mut R,
) -> Vec<FileDescriptor> {
    EssentialFile::ALL
        .iter()
        .map(|e| e.build(category, repo_name, rng))
        .collect()
}

/// Draw one non-essential file for `category`.
///
/// Roughly 10% are PNG placeholders, 5% SVG, 3% `favicon.ico`, and the rest
/// rendered code templates with an extension from the category pool.
pub fn random_file<R: Rng + ?Sized>(category: Category, rng: &mut R) -> FileDescriptor {
    let folder = templates::folders(category)
        .choose(rng)
        .copied()
        .unwrap_or("src");
    let roll: f64 = rng.gen_range(0.0..1.0);

    if roll < PNG_CHANCE {
        let path = format!("{folder}/{}.png", random_string(rng, 6));
        FileDescriptor::binary(path, templates::PLACEHOLDER_PNG)
    } else if roll < SVG_CHANCE {
        let path = format!("{folder}/{}.svg", random_string(rng, 6));
        FileDescriptor::text(path, templates::PLACEHOLDER_SVG)
    } else if roll < ICO_CHANCE {
        FileDescriptor::binary(format!("{folder}/favicon.ico"), templates::PLACEHOLDER_ICO)
    } else {
        let template = templates::code_templates(category)
            .choose(rng)
            .copied()
            .unwrap_or_default();
        let ext = templates::extensions(category)
            .choose(rng)
            .copied()
            .unwrap_or("txt");
        let filename = format!("{}.{ext}", random_string(rng, 6));
        let content = render(template, &filename, rng);
        FileDescriptor::text(format!("{folder}/{filename}"), content)
    }
}

/// Everything that will be written to one repository, in order.
#[derive(Debug, Clone)]
pub struct RepoPlan {
    pub repo: String,
    pub category: Category,
    pub essentials: Vec<FileDescriptor>,
    pub extras: Vec<FileDescriptor>,
}

impl RepoPlan {
    pub fn generate<R: Rng + ?Sized>(repo: &str, rng: &mut R) -> Self {
        let category = categorize(repo);
        let total = rng.gen_range(FILE_COUNT_RANGE);
        Self::with_total(repo, category, total, rng)
    }

    /// Plan exactly `total` files (never fewer than the essentials).
    pub fn with_total<R: Rng + ?Sized>(
        repo: &str,
        category: Category,
        total: usize,
        rng: &mut R,
    ) -> Self {
        let essentials = essential_files(category, repo, rng);
        let extra_count = total.saturating_sub(essentials.len());
        let extras = (0..extra_count).map(|_| random_file(category, rng)).collect();
        tracing::debug!(repo, %category, total, "planned repository files");
        Self {
            repo: repo.to_string(),
            category,
            essentials,
            extras,
        }
    }

    pub fn len(&self) -> usize {
        self.essentials.len() + self.extras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Essentials then extras.
    pub fn files(&self) -> impl Iterator<Item = &FileDescriptor> {
        self.essentials.iter().chain(self.extras.iter())
    }
}
