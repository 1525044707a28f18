//! Request body for the content API's create-file endpoint.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use gitseed_core::{CommitMeta, FileDescriptor};
use serde::Serialize;

/// Timestamp layout the content API accepts for committer dates.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DatedPerson {
    pub name: String,
    pub email: String,
    pub date: String,
}

/// `{message, content, committer{name,email,date}, author{name,email}}`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CreateFileRequest {
    pub message: String,
    /// Base64 of the raw file bytes.
    pub content: String,
    pub committer: DatedPerson,
    pub author: Person,
}

impl CreateFileRequest {
    pub fn new(file: &FileDescriptor, meta: &CommitMeta) -> Self {
        Self {
            message: meta.message.clone(),
            content: STANDARD.encode(file.content.as_bytes()),
            committer: DatedPerson {
                name: meta.author.name.clone(),
                email: meta.author.email.clone(),
                date: format_date(&meta.timestamp),
            },
            author: Person {
                name: meta.author.name.clone(),
                email: meta.author.email.clone(),
            },
        }
    }
}

pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use gitseed_core::Identity;

    fn meta() -> CommitMeta {
        CommitMeta {
            message: "Add main.py".into(),
            author: Identity {
                name: "Grace Hopper".into(),
                email: "grace.hopper@example.org".into(),
            },
            timestamp: Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap(),
        }
    }

    #[test]
    fn body_shape() {
        let file = FileDescriptor::text("app/main.py", "print('hi')\n");
        let body = serde_json::to_value(CreateFileRequest::new(&file, &meta())).unwrap();
        assert_eq!(body["message"], "Add main.py");
        assert_eq!(body["content"], "cHJpbnQoJ2hpJykK");
        assert_eq!(body["committer"]["name"], "Grace Hopper");
        assert_eq!(body["committer"]["date"], "2024-03-09T07:05:01Z");
        assert_eq!(body["author"]["email"], "grace.hopper@example.org");
        assert!(body["author"].get("date").is_none());
    }

    #[test]
    fn binary_content_is_encoded_verbatim() {
        let file = FileDescriptor::binary("img/a.png", vec![0x89, b'P', b'N', b'G', 0x00, 0xff]);
        let req = CreateFileRequest::new(&file, &meta());
        assert_eq!(STANDARD.decode(&req.content).unwrap(), file.content.as_bytes());
    }
}
