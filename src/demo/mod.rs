//! Demo composition root.
//!
//! [`run`] wires the fixed scenario together — remote service, caching
//! proxy, presenter — and writes the narration to any [`fmt::Write`] sink.
//! The demo binary passes a `String` and prints it; tests pass a `String`
//! and assert on it. Both passes render the same panel and page; only the
//! second one is served from the proxy's warm caches.

use std::fmt::{self, Write};

use thiserror::Error;

use crate::presenter::Presenter;
use crate::proxy::CachingProxy;
use crate::remote::{Latency, MockRemoteService};
use crate::service::ServiceError;

/// Errors the demo scenario can surface.
#[derive(Debug, Error)]
pub enum DemoError {
    /// The underlying service failed. Never happens with the bundled mock.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The output sink rejected a write.
    #[error("failed to write demo output: {0}")]
    Write(#[from] fmt::Error),
}

/// Runs the fixed proxy-pattern scenario.
///
/// Renders the listing panel and the page for `"video1"` twice: the first
/// pass fills the proxy's caches, the second pass is served from them. The
/// cache hit/miss commentary is emitted as `tracing` events, not written to
/// `out`.
pub async fn run(latency: Latency, out: &mut impl Write) -> Result<(), DemoError> {
    let remote = MockRemoteService::new(latency);
    let presenter = Presenter::new(CachingProxy::new(remote));

    out.write_str(&presenter.render_list_panel().await?)?;
    writeln!(out, "{}", presenter.render_video_page("video1").await?)?;

    writeln!(out)?;
    writeln!(out, "Replaying the same requests:")?;
    writeln!(out)?;

    out.write_str(&presenter.render_list_panel().await?)?;
    writeln!(out, "{}", presenter.render_video_page("video1").await?)?;

    Ok(())
}
