//! # Rusty-Blog Binary
//!
//! The entry point that assembles configuration, logging, the credential
//! check, and the console front end.

mod console;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use rb_auth_simple::SimpleCredentialVerifier;
use rb_config::{AdminConfig, AppConfig};
use rb_core::{BlogContext, ContentStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Optional first argument: path to a config file.
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;

    // Logs go to stderr so they never interleave with console output.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // 1. Initialize the credential check
    let verifier = build_verifier(&config.admin)?;

    // 2. Initialize the content store
    let store = if config.seed_posts {
        ContentStore::seeded()
    } else {
        ContentStore::new()
    };

    // 3. Wrap in the per-client context
    let mut ctx = BlogContext::new(Arc::new(verifier), store);

    info!(site_title = %config.site_title, posts = ctx.list_posts().len(), "Rusty-Blog ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    console::run(&mut ctx, &config.site_title, stdin.lock(), stdout.lock())?;

    info!("bye");
    Ok(())
}

fn build_verifier(admin: &AdminConfig) -> anyhow::Result<SimpleCredentialVerifier> {
    let verifier = match admin.password_hash.as_deref() {
        Some(hash) if !hash.is_empty() => SimpleCredentialVerifier::new(&admin.username, hash)?,
        _ => SimpleCredentialVerifier::from_plaintext(&admin.username, &admin.password)?,
    };
    Ok(verifier)
}
