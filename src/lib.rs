//! # vidcache
//!
//! A caching proxy client for a mock video platform service.
//!
//! The crate is a working illustration of the Proxy pattern:
//! [`MockRemoteService`] simulates a slow third-party video platform,
//! [`CachingProxy`] wraps it behind the same [`VideoService`] capability set
//! and memoizes listing and metadata fetches, and [`Presenter`] consumes
//! whichever of the two it is handed.
//!
//! ## Quick Start
//!
//! ```rust
//! use vidcache::{CachingProxy, Latency, MockRemoteService, Presenter};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), vidcache::ServiceError> {
//!     let remote = MockRemoteService::new(Latency::None);
//!     let presenter = Presenter::new(CachingProxy::new(remote));
//!
//!     println!("{}", presenter.render_list_panel().await?);
//!     println!("{}", presenter.render_video_page("video1").await?);
//!     Ok(())
//! }
//! ```

pub mod demo;
pub mod presenter;
pub mod proxy;
pub mod remote;
pub mod service;
pub mod video;

// ── Convenience re-exports ────────────────────────────────────────────────────
pub use presenter::Presenter;
pub use proxy::CachingProxy;
pub use remote::{Latency, MockRemoteService};
pub use service::{ServiceError, VideoService};
pub use video::{VideoDetail, VideoSummary};
