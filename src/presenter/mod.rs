//! Rendering consumer of a [`VideoService`].
//!
//! [`Presenter`] is deliberately agnostic about what it holds — a raw remote
//! service and a caching proxy render identically. Methods return the
//! rendered text instead of printing, so the demo binary decides where the
//! output goes and tests can assert on it directly.

use crate::service::{ServiceError, VideoService};

/// Renders listing panels and single-video pages from a [`VideoService`].
///
/// Holds nothing but the service. Errors from the underlying service are
/// propagated unchanged — the presenter never catches or rewrites them.
pub struct Presenter<S> {
    service: S,
}

impl<S: VideoService> Presenter<S> {
    /// Creates a presenter over `service`.
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Fetches the video listing and renders one line per entry, preserving
    /// the service's order.
    pub async fn render_list_panel(&self) -> Result<String, ServiceError> {
        let videos = self.service.list_videos().await?;
        let mut panel = String::from("Video listing:\n");
        for video in &videos {
            panel.push_str(&format!(" - {video}\n"));
        }
        Ok(panel)
    }

    /// Fetches the metadata for `id` and renders it as a single record.
    pub async fn render_video_page(&self, id: &str) -> Result<String, ServiceError> {
        let info = self.service.video_info(id).await?;
        Ok(format!("Video page: {info}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::{Latency, MockRemoteService};
    use crate::video::{VideoDetail, VideoSummary};

    #[tokio::test]
    async fn panel_preserves_catalog_order() {
        let presenter = Presenter::new(MockRemoteService::new(Latency::None));
        let panel = presenter.render_list_panel().await.unwrap();

        assert_eq!(
            panel,
            concat!(
                "Video listing:\n",
                " - How to Cook Borscht (10:35) [id=video1]\n",
                " - Python Lessons for Beginners (25:10) [id=video2]\n",
                " - Music for Studying (1:00:00) [id=video3]\n",
            )
        );
    }

    #[tokio::test]
    async fn page_renders_all_detail_fields() {
        let presenter = Presenter::new(MockRemoteService::new(Latency::None));
        let page = presenter.render_video_page("video1").await.unwrap();

        assert_eq!(
            page,
            "Video page: How to Cook Borscht by Chef TV (10:35) [id=video1]"
        );
    }

    /// A service whose faults the presenter must pass through untouched.
    struct BrokenService;

    impl VideoService for BrokenService {
        async fn list_videos(&self) -> Result<Vec<VideoSummary>, ServiceError> {
            Err(ServiceError::Unavailable {
                reason: "offline".into(),
            })
        }

        async fn video_info(&self, id: &str) -> Result<VideoDetail, ServiceError> {
            Err(ServiceError::NotFound { id: id.to_owned() })
        }

        async fn download_video(&self, _id: &str) -> Result<(), ServiceError> {
            Err(ServiceError::Unavailable {
                reason: "offline".into(),
            })
        }
    }

    #[tokio::test]
    async fn service_faults_propagate_unchanged() {
        let presenter = Presenter::new(BrokenService);

        let err = presenter.render_list_panel().await.unwrap_err();
        assert_eq!(
            err,
            ServiceError::Unavailable {
                reason: "offline".into()
            }
        );

        let err = presenter.render_video_page("video9").await.unwrap_err();
        assert_eq!(
            err,
            ServiceError::NotFound {
                id: "video9".into()
            }
        );
    }
}
