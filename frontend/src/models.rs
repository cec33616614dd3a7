use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoKind {
    #[serde(rename = "Short-form")]
    ShortForm,
    #[serde(rename = "Long-form")]
    LongForm,
}

impl VideoKind {
    pub const ALL: [VideoKind; 2] = [VideoKind::LongForm, VideoKind::ShortForm];

    pub fn as_str(&self) -> &'static str {
        match self {
            VideoKind::ShortForm => "Short-form",
            VideoKind::LongForm => "Long-form",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Short-form" => Some(VideoKind::ShortForm),
            "Long-form" => Some(VideoKind::LongForm),
            _ => None,
        }
    }
}

impl fmt::Display for VideoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the reference gallery. Field order is the serialized key order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct VideoReference {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: VideoKind,
    pub title: String,
    #[serde(rename = "embedUrl")]
    pub external_url: String,
    #[serde(default)]
    pub thumbnail: String,
}

impl VideoReference {
    /// Thumbnail to render; entries without one get a deterministic placeholder.
    pub fn display_thumbnail(&self) -> String {
        if self.thumbnail.is_empty() {
            format!("https://picsum.photos/seed/{}/800/450", self.id)
        } else {
            self.thumbnail.clone()
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub primary_color: String,
    pub secondary_color: String,
    pub hero_title: String,
    pub hero_slogan: String,
    pub agency_name: String,
    pub youtube_url: String,
    pub instagram_url: String,
    pub kakao_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon_name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Inquiry {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub email: String,
    pub message: String,
    /// Local wall-clock time of intake as shown to the admin, not authoritative.
    #[serde(rename = "date")]
    pub submitted_at: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceStats {
    pub total_views: u64,
    pub daily_views: u64,
    pub per_capita_views: u64,
    pub last_updated: String,
    pub hook_message: String,
}

/// Where the reference registry gets synced to.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct SyncTarget {
    pub token: String,
    /// `owner/name`
    pub repo: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

impl fmt::Debug for SyncTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncTarget")
            .field("token", &"<redacted>")
            .field("repo", &self.repo)
            .field("path", &self.path)
            .field("branch", &self.branch)
            .finish()
    }
}
