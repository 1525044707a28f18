pub mod category;
pub mod identity;
pub mod plan;
pub mod render;
pub mod templates;

pub use category::{Category, categorize};
pub use identity::{CommitMeta, CommitWindow, Identity};
pub use plan::{EssentialFile, FILE_COUNT_RANGE, FileContent, FileDescriptor, RepoPlan};
pub use render::{Placeholder, Substitutions, render};
