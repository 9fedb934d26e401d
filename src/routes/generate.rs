use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::github::{parse_repo_url, GitHubClient};
use crate::prompt::{escape_html, generate_prompt};

/// The base URL is routed in as state so tests can point the handler
/// at a stub server.
pub fn routes(github_base_url: String) -> Router {
    Router::new()
        .route("/generate", get(generate))
        .with_state(github_base_url)
}

#[derive(Debug, Deserialize)]
struct GenerateQuery {
    url: Option<String>,
    token: Option<String>,
}

/// Turn a GitHub repository URL into an HTML-escaped text prompt.
///
/// The optional token is forwarded to every GitHub API call; without
/// one, unauthenticated rate limits apply.
async fn generate(
    State(github_base_url): State<String>,
    Query(query): Query<GenerateQuery>,
) -> Result<Html<String>> {
    let url = query
        .url
        .filter(|u| !u.is_empty())
        .ok_or(AppError::MissingUrl)?;
    let token = query.token.filter(|t| !t.is_empty());

    let target = parse_repo_url(&url)?;
    tracing::info!(owner = %target.owner, repo = %target.repo, "generating prompt");

    let client = GitHubClient::with_base_url(github_base_url, token);
    let prompt = generate_prompt(&client, &target).await?;

    Ok(Html(format!("<pre>{}</pre>", escape_html(&prompt))))
}
