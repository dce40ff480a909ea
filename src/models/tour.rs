use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(tag = "media_type")] // Use the "media_type" field to determine which variant to use
pub enum MediaItem {
    #[serde(rename = "audio")]
    Audio {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration_seconds: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },

    #[serde(rename = "image")]
    Image {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
}

impl MediaItem {
    /// Narration seconds contributed by this item. Images contribute
    /// nothing, and audio whose duration has not been extracted yet
    /// counts as zero rather than failing.
    pub fn audio_duration_seconds(&self) -> f64 {
        match self {
            MediaItem::Audio {
                duration_seconds, ..
            } => duration_seconds.unwrap_or(0.0),
            MediaItem::Image { .. } => 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Stop {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Editor-assigned id for stops that have not been saved yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub media: Vec<MediaItem>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TourDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub title: String,
    /// Stop order is the tour order. Validation warnings are keyed by
    /// position in this list, so it is never reordered here.
    #[serde(default)]
    pub stops: Vec<Stop>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
