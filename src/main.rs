//! Repo Prompter - turn a GitHub repository into a readable text prompt
//!
//! # Usage
//! ```bash
//! repo-prompter                # Serve on 127.0.0.1:7777
//! repo-prompter --port 8080    # Pick another port
//! RUST_LOG=debug repo-prompter # Verbose logging
//! ```

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::routing::get;
use clap::Parser;
use rust_embed::Embed;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use repo_prompter::github::GITHUB_API_URL;
use repo_prompter::routes;

/// Embedded landing page assets
#[derive(Embed)]
#[folder = "assets"]
struct Assets;

/// Repo Prompter - flatten a GitHub repository into prompt text
#[derive(Parser)]
#[command(name = "repo-prompter")]
#[command(about = "Serve a GitHub-repository-to-prompt generator", long_about = None)]
struct Cli {
    /// Port to run the server on
    #[arg(short, long, default_value = "7777")]
    port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,
}

/// Serve the embedded landing page for any non-API path
async fn serve_static(req: Request<Body>) -> Response<Body> {
    let path = req.uri().path().trim_start_matches('/');
    let path = if path.is_empty() { "index.html" } else { path };

    match Assets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, mime.as_ref())
                .body(Body::from(content.data.into_owned()))
                .unwrap()
        }
        None => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::from("Not Found"))
            .unwrap(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "repo_prompter=info,tower_http=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::create_router(GITHUB_API_URL.to_string())
        .fallback(get(serve_static))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", cli.bind, cli.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", addr, e);
            eprintln!("Try a different port with --port <PORT>");
            std::process::exit(1);
        }
    };

    tracing::info!("server running on http://{}", addr);

    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
        tracing::info!("shutting down");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
