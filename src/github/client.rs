//! Thin client for the three GitHub REST endpoints the service consumes:
//! repository metadata, the recursive tree listing, and raw file contents.
//!
//! The base URL is injectable so tests can point the client at a local
//! mock server instead of api.github.com.

use reqwest::{header, Client, Response};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::{RepositoryMeta, TreeItem};

pub const GITHUB_API_URL: &str = "https://api.github.com";

const RAW_CONTENT_TYPE: &str = "application/vnd.github.v3.raw";

#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

/// Shape of GitHub's JSON error payload.
#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Deserialize)]
struct TreeResponse {
    tree: Vec<TreeItem>,
}

impl GitHubClient {
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(GITHUB_API_URL, token)
    }

    pub fn with_base_url(base_url: impl Into<String>, token: Option<String>) -> Self {
        let client = Client::builder()
            .user_agent(concat!("repo-prompter/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
            token,
        }
    }

    /// Fetch repository metadata; used to resolve the default branch.
    pub async fn repository(&self, owner: &str, repo: &str) -> Result<RepositoryMeta> {
        let url = format!("{}/repos/{}/{}", self.base_url, owner, repo);
        let response = check_status(self.get(&url).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Fetch the full recursive tree listing for a branch.
    pub async fn tree(&self, owner: &str, repo: &str, branch: &str) -> Result<Vec<TreeItem>> {
        let url = format!(
            "{}/repos/{}/{}/git/trees/{}?recursive=1",
            self.base_url, owner, repo, branch
        );
        let response = check_status(self.get(&url).send().await?).await?;
        let body: TreeResponse = response.json().await?;
        Ok(body.tree)
    }

    /// Fetch one file's content as raw text.
    pub async fn raw_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        branch: &str,
    ) -> Result<String> {
        let url = format!(
            "{}/repos/{}/{}/contents/{}?ref={}",
            self.base_url, owner, repo, path, branch
        );
        let response = check_status(
            self.get(&url)
                .header(header::ACCEPT, RAW_CONTENT_TYPE)
                .send()
                .await?,
        )
        .await?;
        Ok(response.text().await?)
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.header(header::AUTHORIZATION, format!("token {}", token));
        }
        request
    }
}

/// Map a non-2xx response to `AppError::Upstream`, preferring the
/// `message` field of GitHub's error payload over the bare status.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ApiErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => format!("GitHub API returned {}", status),
    };

    Err(AppError::Upstream {
        status: status.as_u16(),
        message,
    })
}
