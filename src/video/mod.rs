//! Video catalog record types.
//!
//! Two shapes exist: [`VideoSummary`] for listing panels and the richer
//! [`VideoDetail`] for single-video pages. Both are plain owned records —
//! once returned by a service they are never mutated.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry of a video listing.
///
/// Produced by [`VideoService::list_videos`](crate::service::VideoService::list_videos).
///
/// # Examples
///
/// ```
/// use vidcache::video::VideoSummary;
///
/// let summary = VideoSummary {
///     id: "video1".into(),
///     title: "How to Cook Borscht".into(),
///     duration: "10:35".into(),
/// };
/// assert_eq!(summary.to_string(), "How to Cook Borscht (10:35) [id=video1]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSummary {
    /// Platform-assigned video identifier.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Playback length as the platform formats it, e.g. `"10:35"`.
    pub duration: String,
}

impl fmt::Display for VideoSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [id={}]", self.title, self.duration, self.id)
    }
}

/// Full metadata for a single video.
///
/// Produced by [`VideoService::video_info`](crate::service::VideoService::video_info).
/// Carries everything a [`VideoSummary`] does plus the author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDetail {
    /// Platform-assigned video identifier.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Playback length as the platform formats it.
    pub duration: String,
    /// Channel or creator name.
    pub author: String,
}

impl fmt::Display for VideoDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} ({}) [id={}]",
            self.title, self.author, self.duration, self.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_display() {
        let s = VideoSummary {
            id: "video2".into(),
            title: "Python Lessons for Beginners".into(),
            duration: "25:10".into(),
        };
        assert_eq!(
            s.to_string(),
            "Python Lessons for Beginners (25:10) [id=video2]"
        );
    }

    #[test]
    fn detail_display() {
        let d = VideoDetail {
            id: "video1".into(),
            title: "How to Cook Borscht".into(),
            duration: "10:35".into(),
            author: "Chef TV".into(),
        };
        assert_eq!(d.to_string(), "How to Cook Borscht by Chef TV (10:35) [id=video1]");
    }

    #[test]
    fn summary_json_round_trip() {
        let json = r#"{"id":"video3","title":"Music for Studying","duration":"1:00:00"}"#;
        let s: VideoSummary = serde_json::from_str(json).unwrap();
        assert_eq!(s.id, "video3");
        assert_eq!(s.duration, "1:00:00");
        assert_eq!(serde_json::to_string(&s).unwrap(), json);
    }
}
