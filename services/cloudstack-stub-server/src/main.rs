// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Standalone stub CloudStack server for testing and development
//!
//! Run with:
//! ```bash
//! cargo run -p cloudstack-stub-server
//! ```
//!
//! Then point the CLI at it:
//! ```bash
//! CLOUDSTACK_URL=http://localhost:8080/client/api \
//! CLOUDSTACK_API_KEY=stub-api-key \
//! CLOUDSTACK_SECRET_KEY=stub-secret-key \
//!     cargo run -p cloudstack-cli -- zone list
//! ```

use anyhow::Result;
use dropshot::ConfigLoggingLevel;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use cloudstack_stub_server::{StubContext, fixtures_dir, start_server};

const PORT: u16 = 8080;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let context = Arc::new(StubContext::from_fixtures(&fixtures_dir())?);
    tracing::info!("Loaded fixtures for {} commands", context.commands().len());

    let server = start_server(
        context.clone(),
        SocketAddr::from((Ipv4Addr::LOCALHOST, PORT)),
        ConfigLoggingLevel::Info,
    )?;

    tracing::info!(
        "Stub CloudStack server listening on http://localhost:{}{}",
        PORT,
        cloudstack_api::API_PATH
    );
    tracing::info!(
        "API key: {} / secret: {}; login: {} / {}",
        context.config().api_key,
        context.config().secret_key,
        context.config().username,
        context.config().password
    );

    server
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
