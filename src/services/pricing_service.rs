use serde::{Deserialize, Serialize};

use crate::models::tour::{MediaItem, TourDraft};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Rate charged per minute of narration audio
    pub price_per_minute: f64,
    /// Floor applied after the per-minute rate
    pub minimum_price: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            price_per_minute: 500.0,
            minimum_price: 1000.0,
        }
    }
}

impl PricingConfig {
    /// Create config from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            price_per_minute: std::env::var("PRICE_PER_MINUTE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.price_per_minute),
            minimum_price: std::env::var("MINIMUM_PRICE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.minimum_price),
        }
    }
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct MediaTotals {
    pub total_audio_duration_seconds: f64,
    pub total_audio_files: u32,
    pub total_images: u32,
    /// Narration seconds per stop, index-aligned with the draft's stop list
    pub stop_audio_durations: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PriceQuote {
    pub total_minutes: f64,
    pub raw_price: f64,
    pub final_price: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PricingResult {
    pub total_audio_duration_seconds: f64,
    pub total_minutes: f64,
    pub total_price: f64,
    pub total_audio_files: u32,
    pub total_images: u32,
    pub stop_audio_durations: Vec<f64>,
}

pub struct PricingService;

impl PricingService {
    /// Calculate total and per-stop narration durations plus media counts
    pub fn aggregate_media(draft: &TourDraft) -> MediaTotals {
        let mut totals = MediaTotals::default();

        for stop in &draft.stops {
            let stop_duration: f64 = stop
                .media
                .iter()
                .map(MediaItem::audio_duration_seconds)
                .sum();

            for item in &stop.media {
                match item {
                    MediaItem::Audio { .. } => totals.total_audio_files += 1,
                    MediaItem::Image { .. } => totals.total_images += 1,
                }
            }

            totals.total_audio_duration_seconds += stop_duration;
            totals.stop_audio_durations.push(stop_duration);
        }

        totals
    }

    /// Calculate the price for a given amount of narration audio.
    ///
    /// Minutes stay fractional through the floor comparison; rounding
    /// happens only when a display layer formats the result.
    pub fn calculate_price(
        total_audio_duration_seconds: f64,
        config: &PricingConfig,
    ) -> PriceQuote {
        let total_minutes = total_audio_duration_seconds / 60.0;
        let raw_price = total_minutes * config.price_per_minute;

        PriceQuote {
            total_minutes,
            raw_price,
            final_price: raw_price.max(config.minimum_price),
        }
    }

    /// Aggregate a draft's media and price it in one pass
    pub fn price_tour(draft: &TourDraft, config: &PricingConfig) -> PricingResult {
        let totals = Self::aggregate_media(draft);
        let quote = Self::calculate_price(totals.total_audio_duration_seconds, config);

        PricingResult {
            total_audio_duration_seconds: totals.total_audio_duration_seconds,
            total_minutes: quote.total_minutes,
            total_price: quote.final_price,
            total_audio_files: totals.total_audio_files,
            total_images: totals.total_images,
            stop_audio_durations: totals.stop_audio_durations,
        }
    }
}
