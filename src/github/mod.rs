pub mod client;
pub mod url;

pub use client::{GitHubClient, GITHUB_API_URL};
pub use url::parse_repo_url;
