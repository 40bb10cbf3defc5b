// src/github/client.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Three requests are made per card:
// - GET /users/{username}          -> the profile (required, errors are fatal)
// - GET /users/{username}/repos    -> public repositories (best effort)
// - GET {avatar_url}               -> avatar image bytes (best effort)
//
// Only the profile request can fail the program. Repositories and the avatar
// just make the card nicer, so their failures are logged and swallowed.
//
// Rust concepts:
// - thiserror: Derive Display/Error for our own error enum
// - async functions: For network I/O
// - url::Url: Building endpoints without string concatenation bugs
// =============================================================================

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use super::models::{RepositorySummary, UserProfile};

/// Default base URL of the GitHub REST API
pub const GITHUB_API_URL: &str = "https://api.github.com/";

/// Media type for the versioned JSON representation
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Sent as User-Agent (GitHub rejects requests without one)
pub const CLIENT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Every request gives up after this long
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// GitHub's maximum page size; we only ever read the first page
const REPOS_PER_PAGE: &str = "100";

// Everything that can go wrong while fetching the user profile
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("user '{username}' not found")]
    NotFound { username: String },

    #[error("GitHub API error: HTTP {status}")]
    Api { status: u16 },

    #[error("request timed out after {} seconds", REQUEST_TIMEOUT.as_secs())]
    Timeout,

    #[error("request failed: {0}")]
    Request(reqwest::Error),

    #[error("could not decode GitHub response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for FetchError {
    // reqwest reports timeouts as a flag on a generic error, so we
    // sort them out here instead of with #[from]
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Request(error)
        }
    }
}

// A small wrapper around reqwest::Client that knows the GitHub endpoints
//
// Cloning is cheap: reqwest::Client is reference counted internally.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: Url,
}

impl GitHubClient {
    // Client for the real GitHub API
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(GITHUB_API_URL)
    }

    // Client for another API host (tests point this at a mock server)
    pub fn with_base_url(base_url: &str) -> Result<Self, FetchError> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| FetchError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;

        // "mailto:x" style URLs have no path we could append to
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidBaseUrl(base_url.to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // Fetches the profile of `username`
    //
    // Returns:
    //   Ok(UserProfile) on 2xx
    //   Err(FetchError::NotFound) on 404
    //   Err(FetchError::Api) on any other status
    //   Err(FetchError::Timeout) when the 10 second limit is hit
    pub async fn fetch_user(&self, username: &str) -> Result<UserProfile, FetchError> {
        let url = self.endpoint(&["users", username])?;

        match self.get_json(url).await {
            Err(FetchError::Api { status }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(FetchError::NotFound {
                    username: username.to_string(),
                })
            }
            other => other,
        }
    }

    // Fetches the first page (up to 100) of public repositories
    //
    // Never fails: the card is still useful without repositories, so any
    // error is logged and turned into an empty list.
    pub async fn fetch_repositories(&self, username: &str) -> Vec<RepositorySummary> {
        let result: Result<Vec<RepositorySummary>, FetchError> =
            match self.endpoint(&["users", username, "repos"]) {
                Ok(mut url) => {
                    url.query_pairs_mut()
                        .append_pair("type", "public")
                        .append_pair("per_page", REPOS_PER_PAGE);
                    self.get_json(url).await
                }
                Err(e) => Err(e),
            };

        match result {
            Ok(repos) => repos,
            Err(e) => {
                log::warn!("Could not fetch repositories for {}: {}", username, e);
                Vec::new()
            }
        }
    }

    // Downloads the raw avatar image
    //
    // Returns None for an empty URL or any failure.
    pub async fn download_avatar(&self, avatar_url: &str) -> Option<Vec<u8>> {
        if avatar_url.is_empty() {
            log::warn!("Profile has no avatar URL");
            return None;
        }

        log::debug!("GET {}", avatar_url);

        let response = match self.http.get(avatar_url).send().await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Avatar download failed: {}", FetchError::from(e));
                return None;
            }
        };

        if !response.status().is_success() {
            log::warn!("Avatar download failed: HTTP {}", response.status().as_u16());
            return None;
        }

        match response.bytes().await {
            Ok(bytes) => Some(bytes.to_vec()),
            Err(e) => {
                log::warn!("Avatar download failed: {}", FetchError::from(e));
                None
            }
        }
    }

    // Builds `{base_url}/{segment}/{segment}...`
    //
    // Each segment is percent-encoded, so a username can never escape its
    // path segment (e.g. "a/b" or "?x=").
    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // Sends a GET with the API headers and decodes the JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .header(ACCEPT, GITHUB_ACCEPT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Api {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why thiserror here but anyhow in main.rs?
//    - main.rs needs to know WHICH error happened (404 vs timeout) to pick a
//      message, so the client returns a typed enum
//    - anyhow is for the top of the program where we only report errors
//
// 2. What does the `?` operator do with reqwest::Error here?
//    - It calls From<reqwest::Error> for FetchError automatically
//    - That's where timeouts become FetchError::Timeout
//
// 3. What is DeserializeOwned?
//    - A serde trait bound meaning "can be built from JSON without borrowing"
//    - It lets get_json return UserProfile or Vec<RepositorySummary>
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn octocat_json() -> serde_json::Value {
        serde_json::json!({
            "login": "octocat",
            "name": "The Octocat",
            "bio": null,
            "location": "San Francisco",
            "public_repos": 2,
            "followers": 20,
            "following": 1,
            "created_at": "2011-01-25T18:44:36Z",
            "html_url": "https://github.com/octocat",
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4"
        })
    }

    #[test]
    fn test_invalid_base_url() {
        let result = GitHubClient::with_base_url("not a url");
        assert!(matches!(result, Err(FetchError::InvalidBaseUrl(_))));

        let result = GitHubClient::with_base_url("mailto:someone@example.com");
        assert!(matches!(result, Err(FetchError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_default_client_uses_github() {
        let client = GitHubClient::new().unwrap();
        assert_eq!(client.base_url().as_str(), GITHUB_API_URL);
    }

    #[test]
    fn test_endpoint_encodes_username() {
        let client = GitHubClient::with_base_url("https://api.example.com/v3").unwrap();

        let url = client.endpoint(&["users", "octocat", "repos"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v3/users/octocat/repos");

        let url = client.endpoint(&["users", "a/b?c"]).unwrap();
        assert_eq!(url.path(), "/v3/users/a%2Fb%3Fc");
        assert_eq!(url.query(), None);
    }

    #[tokio::test]
    async fn test_fetch_user_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat"))
            .and(header("accept", GITHUB_ACCEPT))
            .and(header("user-agent", CLIENT_USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_json(octocat_json()))
            .expect(1)
            .mount(&server)
            .await;

        let client = GitHubClient::with_base_url(&server.uri()).unwrap();
        let user = client.fetch_user("octocat").await.unwrap();

        assert_eq!(user.login(), "octocat");
        assert_eq!(user.public_repos(), 2);
        assert_eq!(user.bio(), "N/A");
    }

    #[tokio::test]
    async fn test_fetch_user_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/zzz_no_such_user_zzz"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(serde_json::json!({"message": "Not Found"})),
            )
            .mount(&server)
            .await;

        let client = GitHubClient::with_base_url(&server.uri()).unwrap();
        let err = client.fetch_user("zzz_no_such_user_zzz").await.unwrap_err();

        match err {
            FetchError::NotFound { ref username } => assert_eq!(username, "zzz_no_such_user_zzz"),
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert_eq!(err.to_string(), "user 'zzz_no_such_user_zzz' not found");
    }

    #[tokio::test]
    async fn test_fetch_user_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = GitHubClient::with_base_url(&server.uri()).unwrap();
        let err = client.fetch_user("octocat").await.unwrap_err();

        assert!(matches!(err, FetchError::Api { status: 503 }));
        assert_eq!(err.to_string(), "GitHub API error: HTTP 503");
    }

    #[tokio::test]
    async fn test_fetch_user_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(octocat_json())
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client =
            GitHubClient::with_timeout(&server.uri(), Duration::from_millis(200)).unwrap();
        let err = client.fetch_user("slow").await.unwrap_err();

        assert!(matches!(err, FetchError::Timeout), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_fetch_user_bad_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = GitHubClient::with_base_url(&server.uri()).unwrap();
        let err = client.fetch_user("octocat").await.unwrap_err();

        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_repositories_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .and(query_param("type", "public"))
            .and(query_param("per_page", "100"))
            .and(header("accept", GITHUB_ACCEPT))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"name": "Hello-World", "stargazers_count": 42, "description": "My first repo"},
                {"name": "Spoon-Knife", "stargazers_count": 12, "description": null}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = GitHubClient::with_base_url(&server.uri()).unwrap();
        let repos = client.fetch_repositories("octocat").await;

        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].name, "Hello-World");
        assert_eq!(repos[0].stars, 42);
        assert_eq!(repos[1].description, None);
    }

    #[tokio::test]
    async fn test_fetch_repositories_error_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = GitHubClient::with_base_url(&server.uri()).unwrap();
        assert!(client.fetch_repositories("octocat").await.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_repositories_bad_json_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"oops": 1})))
            .mount(&server)
            .await;

        let client = GitHubClient::with_base_url(&server.uri()).unwrap();
        assert!(client.fetch_repositories("octocat").await.is_empty());
    }

    #[tokio::test]
    async fn test_download_avatar() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/u/1"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8, 2, 3]))
            .mount(&server)
            .await;

        let client = GitHubClient::with_base_url(&server.uri()).unwrap();

        let bytes = client.download_avatar(&format!("{}/u/1", server.uri())).await;
        assert_eq!(bytes, Some(vec![1, 2, 3]));

        let missing = client.download_avatar(&format!("{}/u/2", server.uri())).await;
        assert_eq!(missing, None);

        assert_eq!(client.download_avatar("").await, None);
    }
}
