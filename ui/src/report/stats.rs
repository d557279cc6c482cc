//! Aggregation of an observation history into per-emotion counts and shares.

use crate::emotion::{Emotion, EmotionData};

/// Counts per category plus the derived totals used by the prompt and the PDF.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmotionStats {
    counts: [usize; Emotion::ALL.len()],
    total: usize,
}

/// One nonzero row of the distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionShare {
    pub emotion: Emotion,
    pub count: usize,
    pub percent: u32,
}

impl EmotionStats {
    pub fn from_observations(observations: &[EmotionData]) -> Self {
        let mut counts = [0usize; Emotion::ALL.len()];
        for observation in observations {
            counts[observation.emotion.index()] += 1;
        }

        Self {
            counts,
            total: observations.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn count(&self, emotion: Emotion) -> usize {
        self.counts[emotion.index()]
    }

    /// Rounded share of `emotion`; `None` for categories that never occurred.
    pub fn percentage(&self, emotion: Emotion) -> Option<u32> {
        let count = self.count(emotion);
        if count == 0 || self.total == 0 {
            return None;
        }
        Some(((count as f64 / self.total as f64) * 100.0).round() as u32)
    }

    /// Nonzero categories in declaration order.
    pub fn shares(&self) -> Vec<EmotionShare> {
        Emotion::ALL
            .iter()
            .filter_map(|&emotion| {
                self.percentage(emotion).map(|percent| EmotionShare {
                    emotion,
                    count: self.count(emotion),
                    percent,
                })
            })
            .collect()
    }

    /// Most frequent category. Ties go to the earliest declared variant.
    pub fn dominant(&self) -> Option<Emotion> {
        let mut best: Option<(Emotion, usize)> = None;
        for &emotion in Emotion::ALL.iter() {
            let count = self.count(emotion);
            if count == 0 {
                continue;
            }
            match best {
                Some((_, best_count)) if best_count >= count => {}
                _ => best = Some((emotion, count)),
            }
        }
        best.map(|(emotion, _)| emotion)
    }

    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    /// `"Label: N%"` per nonzero category, newline separated.
    pub fn percentage_summary(&self) -> String {
        self.shares()
            .iter()
            .map(|share| format!("{}: {}%", share.emotion.label(), share.percent))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
