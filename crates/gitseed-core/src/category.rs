//! Repository categorisation by name keyword.
//!
//! A repository name is lowercased and checked against an ordered keyword
//! table. The first category with a keyword that appears anywhere in the
//! name wins, so table order is the tie-breaker: "docker-django" is `devops`,
//! not `backend`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Coarse content bucket driving folder, template, and extension choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Devops,
    Monitoring,
    Database,
    Backend,
    Web,
    Ml,
    Language,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Devops,
        Category::Monitoring,
        Category::Database,
        Category::Backend,
        Category::Web,
        Category::Ml,
        Category::Language,
    ];

    /// Returned when no keyword matches.
    pub const DEFAULT: Category = Category::Web;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Devops => "devops",
            Self::Monitoring => "monitoring",
            Self::Database => "database",
            Self::Backend => "backend",
            Self::Web => "web",
            Self::Ml => "ml",
            Self::Language => "language",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or(UnknownCategory(s.to_string()))
    }
}

/// Ordered category → keyword table. Iteration order decides ties.
pub const KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Devops,
        &[
            "cloudflare", "linode", "digitalocean", "heroku", "netlify", "vercel", "traefik",
            "caddy", "envoy", "istio", "hashicorp", "travis", "circleci", "jenkins", "terraform",
            "ansible", "kubernetes", "docker",
        ],
    ),
    (
        Category::Monitoring,
        &[
            "opentelemetry", "jaeger", "loki", "sentry", "datadog", "nagios", "zabbix", "grafana",
            "prometheus",
        ],
    ),
    (
        Category::Database,
        &[
            "chromadb", "pinecone", "milvus", "arangodb", "timescaledb", "couchdb", "realm",
            "mybatis", "hibernate", "drizzle", "typeorm", "sequelize", "prisma", "elasticsearch",
            "neo4j", "cassandra", "redis", "mongodb", "sqlite", "mysql", "postgresql",
        ],
    ),
    (
        Category::Backend,
        &[
            "appwrite", "hasura", "firebase", "supabase", "keystonejs", "strapi", "ktor", "vapor",
            "rocket", "actix", "micronaut", "quarkus", "fastapi", "django", "symfony", "nestjs",
        ],
    ),
    (
        Category::Web,
        &[
            "ember.js", "backbone.js", "alpine.js", "astro", "remix", "blazor", "webassembly",
            "three.js", "d3.js", "plotly", "seaborn", "matplotlib", "numpy", "pandas", "svelte",
            "angular", "react", "vue", "next", "javascript", "css",
        ],
    ),
    (
        Category::Ml,
        &[
            "lightgbm", "catboost", "xgboost", "keras", "pytorch", "tensorflow", "opencv", "svm",
            "randomforest", "cnn",
        ],
    ),
    (
        Category::Language,
        &[
            "powerbuilder", "smalltalk", "haxe", "crystal", "protobuf", "json", "graphql", "grpc",
            "mqtt", "websocket", "rabbitmq", "kafka", "elm", "clojure", "lisp", "prolog", "vdhl",
            "verilog", "solidity", "groovy", "shell", "cobol", "fortran", "julia", "matlab",
            "erlang", "elixir", "haskell", "lua", "perl", "scala", "objective-c", "swift",
            "kotlin", "typescript", "flutter", "git", "hash", "crypto", "encryption", "chunking",
            "android", "fuzzy", "linux", "rust", "golang", "ruby", "bash", "dart", "php", "asm",
            "python", "java",
        ],
    ),
];

/// Classify a repository name. Always returns a category.
pub fn categorize(name: &str) -> Category {
    matching_keyword(name)
        .map(|(category, _)| category)
        .unwrap_or(Category::DEFAULT)
}

/// The winning `(category, keyword)` pair, if any keyword matched.
pub fn matching_keyword(name: &str) -> Option<(Category, &'static str)> {
    let lower = name.to_lowercase();
    KEYWORDS.iter().find_map(|(category, keywords)| {
        keywords
            .iter()
            .find(|kw| lower.contains(*kw))
            .map(|kw| (*category, *kw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn django_is_backend() {
        assert_eq!(categorize("django-admin-tool"), Category::Backend);
        assert_eq!(
            matching_keyword("django-admin-tool"),
            Some((Category::Backend, "django"))
        );
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(categorize("TensorFlow"), Category::Ml);
        assert_eq!(categorize("KUBERNETES-operator"), Category::Devops);
    }

    #[test]
    fn table_order_breaks_ties() {
        // "docker" (devops) and "django" (backend) both match.
        assert_eq!(categorize("docker-django"), Category::Devops);
        // "java" would match language but "javascript" hits web first.
        assert_eq!(categorize("Javascript"), Category::Web);
    }

    #[test]
    fn unmatched_falls_back_to_default() {
        assert_eq!(categorize("Prabogo"), Category::DEFAULT);
        assert_eq!(categorize(""), Category::Web);
        assert_eq!(categorize("zzz"), Category::Web);
    }

    #[test]
    fn classifier_is_total_over_known_set() {
        let names = [
            "TensorFlow", "Micronaut", "Quarkus", "FastAPI", "Django", "Symfony", "NestJS",
            "Svelte", "Angular", "React", "Elm", "Clojure", "Objective-C", "Swift", "Docker",
            "OpenCV", "Linux", "CNN", "Rust", "Next", "Vue", "Python", "Java", "x", "Ωmega",
            "   ", "grafana-dash", "redis-cache",
        ];
        for name in names {
            let c = categorize(name);
            assert!(Category::ALL.contains(&c), "{name} -> {c:?}");
        }
    }

    #[test]
    fn every_keyword_classifies_to_some_category() {
        for (category, keywords) in KEYWORDS {
            for kw in *keywords {
                let got = categorize(kw);
                // A keyword may be shadowed by an earlier table entry, never by a later one.
                assert!(got <= *category, "{kw}: expected {category} or earlier, got {got}");
            }
        }
    }

    #[test]
    fn label_roundtrip() {
        for c in Category::ALL {
            assert_eq!(c.as_str().parse::<Category>(), Ok(c));
            assert_eq!(c.to_string(), c.as_str());
        }
        assert!("frontend".parse::<Category>().is_err());
    }
}
