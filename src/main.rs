// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use the_graphmill::config::{load_and_validate_config, ServerConfig};
use the_graphmill::engine::Pipeline;
use the_graphmill::server::{run_console, Server};

/// `RUST_LOG` wins over the configured filter.
fn init_tracing(config: &ServerConfig) {
    let filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(&config.log_filter)
    };
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match env::args().nth(1) {
        Some(path) => load_and_validate_config(&path)
            .with_context(|| format!("failed to load config '{}'", path))?,
        None => ServerConfig::default(),
    };
    init_tracing(&config);

    let pipeline = Pipeline::global();
    let server = Server::new(config.clone(), Arc::clone(&pipeline));
    let shutdown = server.shutdown_token();

    let listener = server
        .bind()
        .await
        .with_context(|| format!("failed to bind {}", config.listen_address()))?;

    if config.console {
        println!("Type 'help' for console commands.");
        tokio::spawn(run_console(Arc::clone(&pipeline), shutdown.clone()));
    }

    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("interrupt received");
                shutdown.cancel();
            }
        });
    }

    server.serve(listener).await?;

    // Joining the stage threads blocks, so keep it off the async workers.
    tokio::task::spawn_blocking(move || pipeline.shutdown())
        .await
        .context("pipeline shutdown task failed")?;
    Ok(())
}
