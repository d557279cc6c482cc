//! Emotion categories and the observations recorded by the dashboard.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of affect categories, in declaration order.
///
/// The order matters: aggregation iterates in this order and ties for the
/// dominant emotion resolve to whichever variant comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Fearful,
    Disgusted,
    Surprised,
    Neutral,
}

impl Emotion {
    pub const ALL: [Emotion; 7] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Fearful,
        Emotion::Disgusted,
        Emotion::Surprised,
        Emotion::Neutral,
    ];

    /// Position in [`Emotion::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase identifier, as sent to the narrative service.
    pub fn key(self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Fearful => "fearful",
            Emotion::Disgusted => "disgusted",
            Emotion::Surprised => "surprised",
            Emotion::Neutral => "neutral",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Emotion::Happy => "Happy",
            Emotion::Sad => "Sad",
            Emotion::Angry => "Angry",
            Emotion::Fearful => "Fearful",
            Emotion::Disgusted => "Disgusted",
            Emotion::Surprised => "Surprised",
            Emotion::Neutral => "Neutral",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Emotion::Happy => "😊",
            Emotion::Sad => "😢",
            Emotion::Angry => "😠",
            Emotion::Fearful => "😨",
            Emotion::Disgusted => "🤢",
            Emotion::Surprised => "😲",
            Emotion::Neutral => "😐",
        }
    }

    /// Accent color as 8-bit RGB. Shared by the dashboard chips and report bars.
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            Emotion::Happy => (250, 204, 21),
            Emotion::Sad => (59, 130, 246),
            Emotion::Angry => (239, 68, 68),
            Emotion::Fearful => (168, 85, 247),
            Emotion::Disgusted => (34, 197, 94),
            Emotion::Surprised => (249, 115, 22),
            Emotion::Neutral => (148, 163, 184),
        }
    }

    pub fn css_modifier(self) -> String {
        format!("emotion-chip--{}", self.key())
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single classification captured at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionData {
    pub emotion: Emotion,
    /// Classifier confidence in `[0, 1]`. Manual tags record `1.0`.
    pub confidence: f32,
    /// Capture time in Unix milliseconds.
    pub timestamp_ms: i64,
}

impl EmotionData {
    pub fn new(emotion: Emotion, confidence: f32, timestamp_ms: i64) -> Self {
        Self {
            emotion,
            confidence: confidence.clamp(0.0, 1.0),
            timestamp_ms,
        }
    }
}

/// Anything that can hand the report feature an ordered observation history.
pub trait EmotionSource {
    fn history(&self) -> &[EmotionData];

    fn current(&self) -> Option<&EmotionData> {
        self.history().last()
    }
}

/// In-memory log fed by the dashboard. Observations are append-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmotionLog {
    entries: Vec<EmotionData>,
}

impl EmotionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, observation: EmotionData) {
        self.entries.push(observation);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent observations first, capped at `limit`.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &EmotionData> {
        self.entries.iter().rev().take(limit)
    }
}

impl EmotionSource for EmotionLog {
    fn history(&self) -> &[EmotionData] {
        &self.entries
    }
}
