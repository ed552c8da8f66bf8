// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! TCP front end.
//!
//! One task per connection. A client writes its whole request and closes its
//! write half; the server answers with the response text and closes the
//! connection.

pub mod console;
pub mod handler;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_util::sync::CancellationToken;

use crate::config::ServerConfig;
use crate::engine::Pipeline;
use crate::errors::RequestError;
use crate::observability::messages::server::{
    ConnectionAccepted, ResponseWritten, ServerListening, ServerStopped,
};
use crate::observability::messages::StructuredLog;
use crate::protocol::RequestLimits;

pub use console::{run_console, AdminCommand};
pub use handler::handle_request;

pub struct Server {
    config: ServerConfig,
    pipeline: Arc<Pipeline>,
    shutdown: CancellationToken,
}

impl Server {
    pub fn new(config: ServerConfig, pipeline: Arc<Pipeline>) -> Self {
        Self {
            config,
            pipeline,
            shutdown: CancellationToken::new(),
        }
    }

    /// Cancelling this token stops the accept loop.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    pub async fn bind(&self) -> io::Result<TcpListener> {
        TcpListener::bind(self.config.listen_address()).await
    }

    /// Accepts connections until the shutdown token is cancelled.
    /// Connections already accepted run to completion on their own tasks.
    pub async fn serve(&self, listener: TcpListener) -> io::Result<()> {
        let address = listener.local_addr()?.to_string();
        ServerListening { address: &address }.log();

        loop {
            let accepted = tokio::select! {
                _ = self.shutdown.cancelled() => break,
                accepted = listener.accept() => accepted,
            };
            match accepted {
                Ok((stream, peer)) => {
                    ConnectionAccepted { peer }.log();
                    let pipeline = Arc::clone(&self.pipeline);
                    tokio::spawn(handle_connection(
                        stream,
                        peer,
                        pipeline,
                        self.config.job_timeout(),
                        self.config.request_limits(),
                    ));
                }
                Err(err) => tracing::warn!(error = %err, "accept failed"),
            }
        }

        ServerStopped.log();
        Ok(())
    }

    pub async fn run(&self) -> io::Result<()> {
        let listener = self.bind().await?;
        self.serve(listener).await
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    peer: SocketAddr,
    pipeline: Arc<Pipeline>,
    timeout: Option<Duration>,
    limits: RequestLimits,
) {
    let mut request = Vec::new();
    let response = match stream.read_to_end(&mut request).await {
        Ok(_) => {
            let text = String::from_utf8_lossy(&request);
            handle_request(&text, &pipeline, timeout, limits).await
        }
        Err(err) => {
            tracing::debug!(peer = %peer, error = %err, "read failed");
            format!("{}\n", RequestError::ReadFailed)
        }
    };

    match stream.write_all(response.as_bytes()).await {
        Ok(()) => ResponseWritten { bytes: response.len() }.log(),
        Err(err) => tracing::debug!(peer = %peer, error = %err, "write failed"),
    }
    let _ = stream.shutdown().await;
}
