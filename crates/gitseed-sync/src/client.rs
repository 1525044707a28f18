//! HTTP client for the content API's repository contents endpoint.

use std::time::Duration;

use async_trait::async_trait;
use gitseed_core::{CommitMeta, FileDescriptor};
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, InvalidHeaderValue};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::payload::CreateFileRequest;
use crate::retry::RetryPolicy;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Response bodies kept in errors are cut to this many characters.
const BODY_PREVIEW_CHARS: usize = 100;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("token is not a valid header value: {0}")]
    InvalidToken(#[from] InvalidHeaderValue),
    #[error("not authorised ({status}): {body}")]
    Unauthorized { status: u16, body: String },
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
}

impl SyncError {
    /// The token itself is unusable. Fatal when checking the token up front;
    /// during writes it is counted like any other per-file failure.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Unauthorized { .. } | Self::InvalidToken(_))
    }
}

/// Result of a single create-file request that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// 201: new file, new commit.
    Created,
    /// 200: the API replaced an existing file.
    Updated,
    /// 422: the path is taken. Skipped, not an error.
    AlreadyExists,
}

/// Anything that can write one file into one repository.
#[async_trait]
pub trait ContentWriter: Send + Sync {
    async fn create_file(
        &self,
        org: &str,
        repo: &str,
        file: &FileDescriptor,
        meta: &CommitMeta,
    ) -> Result<WriteOutcome, SyncError>;
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

impl ApiConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
            user_agent: format!("gitseed/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(30),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

#[derive(Deserialize)]
struct UserResponse {
    login: String,
}

/// One shared HTTP session with auth headers baked in.
pub struct ContentClient {
    client: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl ContentClient {
    pub fn new(config: ApiConfig) -> Result<Self, SyncError> {
        let mut auth = HeaderValue::from_str(&format!("token {}", config.token))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            retry: config.retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /user`: the login the token belongs to.
    pub async fn authenticated_login(&self) -> Result<String, SyncError> {
        let url = format!("{}/user", self.base_url);
        let resp = self.send(|| self.client.get(&url)).await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(error_for(status, resp).await);
        }
        let user: UserResponse = resp.json().await?;
        info!(login = %user.login, "token verified");
        Ok(user.login)
    }

    /// `GET /orgs/{org}`: true when the organisation is visible to the token.
    pub async fn org_accessible(&self, org: &str) -> Result<bool, SyncError> {
        let url = format!("{}/orgs/{}", self.base_url, urlencoding::encode(org));
        let resp = self.send(|| self.client.get(&url)).await?;
        let status = resp.status();
        debug!(org, status = status.as_u16(), "organisation check");
        Ok(status == StatusCode::OK)
    }

    pub fn contents_url(&self, org: &str, repo: &str, path: &str) -> String {
        let encoded_path = path
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.base_url,
            urlencoding::encode(org),
            urlencoding::encode(repo),
            encoded_path
        )
    }

    /// Send the request built by `build`, re-sending on retryable statuses
    /// and connection failures. The last response is returned as-is once
    /// retries run out.
    async fn send<F>(&self, build: F) -> Result<reqwest::Response, SyncError>
    where
        F: Fn() -> reqwest::RequestBuilder,
    {
        let mut attempt = 0;
        loop {
            let retries_left = attempt < self.retry.max_retries;
            match build().send().await {
                Ok(resp)
                    if retries_left && self.retry.should_retry_status(resp.status().as_u16()) =>
                {
                    warn!(status = resp.status().as_u16(), attempt, "retrying request");
                }
                Ok(resp) => return Ok(resp),
                Err(e) if retries_left && (e.is_connect() || e.is_timeout()) => {
                    warn!(error = %e, attempt, "retrying request");
                }
                Err(e) => return Err(e.into()),
            }
            tokio::time::sleep(self.retry.delay(attempt)).await;
            attempt += 1;
        }
    }
}

#[async_trait]
impl ContentWriter for ContentClient {
    async fn create_file(
        &self,
        org: &str,
        repo: &str,
        file: &FileDescriptor,
        meta: &CommitMeta,
    ) -> Result<WriteOutcome, SyncError> {
        let url = self.contents_url(org, repo, &file.path);
        let body = CreateFileRequest::new(file, meta);

        debug!(url = %url, bytes = file.content.len(), binary = file.is_binary(), "creating file");
        let resp = self.send(|| self.client.put(&url).json(&body)).await?;
        match resp.status() {
            StatusCode::CREATED => Ok(WriteOutcome::Created),
            StatusCode::OK => Ok(WriteOutcome::Updated),
            StatusCode::UNPROCESSABLE_ENTITY => Ok(WriteOutcome::AlreadyExists),
            status => Err(error_for(status, resp).await),
        }
    }
}

async fn error_for(status: StatusCode, resp: reqwest::Response) -> SyncError {
    let body = resp.text().await.unwrap_or_default();
    let body = preview(&body);
    let status = status.as_u16();
    match status {
        401 | 403 => SyncError::Unauthorized { status, body },
        _ => SyncError::Server { status, body },
    }
}

fn preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ContentClient {
        ContentClient::new(ApiConfig::new("t0ken").with_base_url(base)).unwrap()
    }

    #[test]
    fn trims_trailing_slash() {
        assert_eq!(client("http://localhost:4000/").base_url(), "http://localhost:4000");
    }

    #[test]
    fn contents_url_encodes_segments_not_separators() {
        let c = client("https://api.example.com");
        assert_eq!(
            c.contents_url("acme", "my repo", "app/services/a b.py"),
            "https://api.example.com/repos/acme/my%20repo/contents/app/services/a%20b.py"
        );
        assert_eq!(
            c.contents_url("acme", "Objective-C", ".gitignore"),
            "https://api.example.com/repos/acme/Objective-C/contents/.gitignore"
        );
    }

    #[test]
    fn rejects_token_with_newline() {
        let err = ContentClient::new(ApiConfig::new("bad\ntoken")).err().unwrap();
        assert!(matches!(err, SyncError::InvalidToken(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn preview_is_char_bounded() {
        let long = "é".repeat(300);
        assert_eq!(preview(&long).chars().count(), 100);
        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn fatality() {
        assert!(SyncError::Unauthorized { status: 401, body: String::new() }.is_fatal());
        assert!(!SyncError::Server { status: 500, body: String::new() }.is_fatal());
    }
}
