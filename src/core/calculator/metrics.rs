//! Caption metrics: character count and characters-per-minute rate.

const RATE_SCALE: f64 = 1_000_000.0;

/// Unicode scalar values, so "テロップ" counts 4.
pub fn char_count(caption: Option<&str>) -> Option<usize> {
    caption.map(|c| c.chars().count())
}

/// `chars / minutes`, only for a strictly positive duration.
pub fn rate(char_count: Option<usize>, duration: Option<i64>) -> Option<f64> {
    match (char_count, duration) {
        (Some(chars), Some(minutes)) if minutes > 0 => {
            Some(round_6(chars as f64 / minutes as f64))
        }
        _ => None,
    }
}

/// Round half away from zero to 6 decimal places.
pub fn round_6(value: f64) -> f64 {
    (value * RATE_SCALE).round() / RATE_SCALE
}
