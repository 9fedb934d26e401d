use crate::error::{AppError, Result};
use crate::models::RepoTarget;

/// Parse owner, repository and optional branch out of a GitHub URL.
///
/// Accepts anything containing a `github.com` path segment followed by
/// owner and repo, e.g. `https://github.com/rust-lang/cargo` or
/// `github.com/rust-lang/cargo/tree/stable`. A `tree/<branch>` suffix
/// selects a branch; everything else after the repo is ignored.
pub fn parse_repo_url(url: &str) -> Result<RepoTarget> {
    let parts: Vec<&str> = url.split('/').filter(|s| !s.is_empty()).collect();

    let github_index = parts
        .iter()
        .position(|&p| p == "github.com")
        .ok_or(AppError::InvalidUrl)?;

    let owner = parts.get(github_index + 1).ok_or(AppError::InvalidUrl)?;
    let repo = parts.get(github_index + 2).ok_or(AppError::InvalidUrl)?;

    let branch = match (parts.get(github_index + 3), parts.get(github_index + 4)) {
        (Some(&"tree"), Some(branch)) => Some(branch.to_string()),
        _ => None,
    };

    Ok(RepoTarget {
        owner: owner.to_string(),
        repo: repo.to_string(),
        branch,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_https_url() {
        let target = parse_repo_url("https://github.com/rust-lang/cargo").unwrap();
        assert_eq!(target.owner, "rust-lang");
        assert_eq!(target.repo, "cargo");
        assert_eq!(target.branch, None);
    }

    #[test]
    fn parses_branch_from_tree_segment() {
        let target =
            parse_repo_url("https://github.com/rust-lang/cargo/tree/stable").unwrap();
        assert_eq!(target.branch.as_deref(), Some("stable"));
    }

    #[test]
    fn ignores_non_tree_suffix() {
        let target =
            parse_repo_url("https://github.com/rust-lang/cargo/pulls").unwrap();
        assert_eq!(target.repo, "cargo");
        assert_eq!(target.branch, None);
    }

    #[test]
    fn handles_missing_scheme_and_trailing_slash() {
        let target = parse_repo_url("github.com/rust-lang/cargo/").unwrap();
        assert_eq!(target.owner, "rust-lang");
        assert_eq!(target.repo, "cargo");
    }

    #[test]
    fn rejects_url_without_github_host() {
        assert!(matches!(
            parse_repo_url("https://gitlab.com/rust-lang/cargo"),
            Err(AppError::InvalidUrl)
        ));
    }

    #[test]
    fn rejects_url_ending_at_host() {
        assert!(matches!(
            parse_repo_url("https://github.com/"),
            Err(AppError::InvalidUrl)
        ));
    }

    #[test]
    fn rejects_url_without_repo() {
        assert!(matches!(
            parse_repo_url("https://github.com/rust-lang"),
            Err(AppError::InvalidUrl)
        ));
    }
}
