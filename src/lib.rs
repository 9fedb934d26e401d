//! Turn a GitHub repository into a flattened, readable text prompt.
//!
//! The pipeline: parse the repository URL, resolve the branch and fetch
//! the recursive tree via the GitHub REST API, rebuild and render the
//! directory hierarchy, fetch the code files' raw contents, concatenate
//! everything, and HTML-escape the result for a `<pre>` response.

pub mod error;
pub mod github;
pub mod models;
pub mod prompt;
pub mod routes;
