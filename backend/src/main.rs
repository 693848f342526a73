//! Backend entry-point: resolves configuration and starts the HTTP server.

use std::env;
use std::net::SocketAddr;

use rand::Rng;
use rand::distributions::Alphanumeric;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::server::{ServerConfig, run};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Resolve the token signing secret: `TOKEN_SECRET_FILE`, then
/// `TOKEN_SECRET`, then a dev-only ephemeral secret.
///
/// Rotating the secret invalidates every outstanding token, so production
/// deployments must mount a stable secret; the ephemeral fallback is only
/// tolerated in debug builds or when explicitly allowed.
fn resolve_token_secret() -> std::io::Result<Vec<u8>> {
    if let Ok(path) = env::var("TOKEN_SECRET_FILE") {
        return std::fs::read(&path).map_err(|e| {
            std::io::Error::other(format!("failed to read token secret at {path}: {e}"))
        });
    }
    if let Ok(secret) = env::var("TOKEN_SECRET")
        && !secret.is_empty()
    {
        return Ok(secret.into_bytes());
    }

    let allow_dev = env::var("TOKEN_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
    if cfg!(debug_assertions) || allow_dev {
        warn!("using ephemeral token secret (dev only); tokens will not survive restarts");
        let secret: Vec<u8> = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(64)
            .collect();
        Ok(secret)
    } else {
        Err(std::io::Error::other(
            "no token secret configured: set TOKEN_SECRET_FILE or TOKEN_SECRET",
        ))
    }
}

fn resolve_bind_addr() -> std::io::Result<SocketAddr> {
    let raw = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
    raw.parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR {raw:?}: {e}")))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::new(resolve_bind_addr()?, resolve_token_secret()?);
    run(config).await
}
