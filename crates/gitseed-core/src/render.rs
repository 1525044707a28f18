//! Placeholder substitution for file templates.
//!
//! A placeholder is a `{key}` token where `key` is a lowercase identifier.
//! Recognised keys are the [`Placeholder`] variants; everything else between
//! braces is copied through verbatim.

use std::collections::HashMap;

use rand::Rng;

use crate::identity::CommitWindow;

const ALNUM: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const HEX: &[u8] = b"0123456789abcdef";

/// A recognised template key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    RandomStr,
    RandomHex,
    Version,
    Timeout,
    Title,
    Replicas,
    Image,
    RandomName,
    Filename,
    Project,
    Year,
    /// Calendar date inside the commit window.
    Date,
    /// Repository name. Only set by callers with a repository in hand.
    RepoName,
    /// Technology label shown in READMEs. Same as the repository name.
    Tech,
}

impl Placeholder {
    pub const ALL: [Placeholder; 14] = [
        Placeholder::RandomStr,
        Placeholder::RandomHex,
        Placeholder::Version,
        Placeholder::Timeout,
        Placeholder::Title,
        Placeholder::Replicas,
        Placeholder::Image,
        Placeholder::RandomName,
        Placeholder::Filename,
        Placeholder::Project,
        Placeholder::Year,
        Placeholder::Date,
        Placeholder::RepoName,
        Placeholder::Tech,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::RandomStr => "random_str",
            Self::RandomHex => "random_hex",
            Self::Version => "version",
            Self::Timeout => "timeout",
            Self::Title => "title",
            Self::Replicas => "replicas",
            Self::Image => "image",
            Self::RandomName => "random_name",
            Self::Filename => "filename",
            Self::Project => "project",
            Self::Year => "year",
            Self::Date => "date",
            Self::RepoName => "repo_name",
            Self::Tech => "tech",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

/// Values for one rendering pass.
///
/// Each key holds a single value, so a template that mentions `{random_str}`
/// twice gets the same string in both places.
#[derive(Debug, Clone, Default)]
pub struct Substitutions {
    values: HashMap<Placeholder, String>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a fresh value for every random key.
    ///
    /// `filename` fills `{filename}` with everything before its first dot.
    /// `{repo_name}` and `{tech}` are left unset.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, filename: &str) -> Self {
        let stem = filename.split('.').next().unwrap_or(filename);
        let window = CommitWindow::default();
        Self::new()
            .with(Placeholder::RandomStr, random_string(rng, 12))
            .with(Placeholder::RandomHex, random_hex(rng, 8))
            .with(Placeholder::Version, random_version(rng))
            .with(Placeholder::Timeout, rng.gen_range(1000..=10000).to_string())
            .with(Placeholder::Title, capitalize(&random_string(rng, 10)))
            .with(Placeholder::Replicas, rng.gen_range(1..=5).to_string())
            .with(Placeholder::Image, random_string(rng, 6))
            .with(Placeholder::RandomName, capitalize(&random_string(rng, 8)))
            .with(Placeholder::Filename, stem.to_string())
            .with(Placeholder::Project, random_string(rng, 8))
            .with(Placeholder::Year, random_year(rng).to_string())
            .with(
                Placeholder::Date,
                window.random_timestamp(rng).format("%Y-%m-%d").to_string(),
            )
    }

    pub fn with(mut self, key: Placeholder, value: impl Into<String>) -> Self {
        self.values.insert(key, value.into());
        self
    }

    pub fn get(&self, key: Placeholder) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    /// Replace every known `{key}` token that has a value.
    pub fn apply(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let value = token_end(after).and_then(|close| {
                Placeholder::from_key(&after[..close])
                    .and_then(|p| self.get(p))
                    .map(|v| (v, close))
            });
            match value {
                Some((v, close)) => {
                    out.push_str(v);
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// Render `template` with freshly drawn random values.
pub fn render<R: Rng + ?Sized>(template: &str, filename: &str, rng: &mut R) -> String {
    Substitutions::random(rng, filename).apply(template)
}

/// `{identifier}` tokens present in `text`, in order of appearance.
pub fn find_placeholders(text: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match token_end(after) {
            Some(close) => {
                found.push(&rest[open..open + close + 2]);
                rest = &after[close + 1..];
            }
            None => rest = after,
        }
    }
    found
}

/// Byte offset of the closing brace when `s` starts with `identifier}`.
fn token_end(s: &str) -> Option<usize> {
    let close = s.find('}')?;
    let key = &s[..close];
    let mut chars = key.chars();
    let first = chars.next()?;
    let valid = (first.is_ascii_lowercase() || first == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    valid.then_some(close)
}

pub fn random_string<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    sample_chars(rng, ALNUM, len)
}

pub fn random_hex<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    sample_chars(rng, HEX, len)
}

/// `major.minor.patch` with major in 1..=5.
pub fn random_version<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}.{}.{}",
        rng.gen_range(1..=5),
        rng.gen_range(0..=9),
        rng.gen_range(0..=9)
    )
}

pub fn random_year<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.gen_range(2023..=2025)
}

fn sample_chars<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], len: usize) -> String {
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn all_random_placeholders_resolved() {
        let template = Placeholder::ALL
            .iter()
            .filter(|p| !matches!(p, Placeholder::RepoName | Placeholder::Tech))
            .map(|p| format!("{}={{{}}}\n", p.key(), p.key()))
            .collect::<String>();
        let out = render(&template, "main.rs", &mut rng());
        assert!(find_placeholders(&out).is_empty(), "leftover in:\n{out}");
    }

    #[test]
    fn context_keys_resolve_when_set() {
        let subs = Substitutions::new()
            .with(Placeholder::RepoName, "django-admin-tool")
            .with(Placeholder::Tech, "django-admin-tool");
        assert_eq!(
            subs.apply("# {repo_name}\n\nBackend service for {tech}."),
            "# django-admin-tool\n\nBackend service for django-admin-tool."
        );
    }

    #[test]
    fn unknown_and_unset_placeholders_untouched() {
        let out = render("{nope} {repo_name} {filename}", "index.js", &mut rng());
        assert_eq!(out, "{nope} {repo_name} index");
    }

    #[test]
    fn code_braces_pass_through() {
        let src = "fn main() {\n    let x = {};\n    f({ a: 1 });\n}\n{Upper} {a-b} {";
        assert_eq!(render(src, "x", &mut rng()), src);
    }

    #[test]
    fn repeated_key_uses_one_value() {
        let out = render("{random_str}|{random_str}", "f", &mut rng());
        let (a, b) = out.split_once('|').unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
        assert!(a.bytes().all(|c| ALNUM.contains(&c)));
    }

    #[test]
    fn filename_is_stem_before_first_dot() {
        let out = render("{filename}", "archive.tar.gz", &mut rng());
        assert_eq!(out, "archive");
        assert_eq!(render("{filename}", "Dockerfile", &mut rng()), "Dockerfile");
    }

    #[test]
    fn two_renders_differ() {
        let mut r = rng();
        let a = render("{random_str}", "f", &mut r);
        let b = render("{random_str}", "f", &mut r);
        assert_ne!(a, b);

        let mut live = rand::thread_rng();
        let c = render("{random_str}{random_hex}", "f", &mut live);
        let d = render("{random_str}{random_hex}", "f", &mut live);
        assert_ne!(c, d);
    }

    #[test]
    fn value_ranges() {
        let mut r = rng();
        for _ in 0..200 {
            let subs = Substitutions::random(&mut r, "f");
            let timeout: u32 = subs.get(Placeholder::Timeout).unwrap().parse().unwrap();
            assert!((1000..=10000).contains(&timeout));
            let replicas: u32 = subs.get(Placeholder::Replicas).unwrap().parse().unwrap();
            assert!((1..=5).contains(&replicas));
            let year: i32 = subs.get(Placeholder::Year).unwrap().parse().unwrap();
            assert!((2023..=2025).contains(&year));

            let version = subs.get(Placeholder::Version).unwrap();
            let parts: Vec<u32> = version.split('.').map(|p| p.parse().unwrap()).collect();
            assert_eq!(parts.len(), 3);
            assert!((1..=5).contains(&parts[0]));

            let hex = subs.get(Placeholder::RandomHex).unwrap();
            assert_eq!(hex.len(), 8);
            assert!(hex.bytes().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

            let title = subs.get(Placeholder::Title).unwrap();
            assert_eq!(title.len(), 10);
            assert!(!title.starts_with(|c: char| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn seeded_rendering_is_reproducible() {
        let a = render("{random_str}-{version}", "f", &mut StdRng::seed_from_u64(99));
        let b = render("{random_str}-{version}", "f", &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn find_placeholders_lists_tokens() {
        assert_eq!(
            find_placeholders("a {x} b {y_1} {Z} { c } {"),
            vec!["{x}", "{y_1}"]
        );
    }

    #[test]
    fn key_roundtrip() {
        for p in Placeholder::ALL {
            assert_eq!(Placeholder::from_key(p.key()), Some(p));
        }
        assert_eq!(Placeholder::from_key("file"), None);
    }
}
