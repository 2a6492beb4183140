//! Reference blend values and error accounting
//!
//! The table engine promises to track the real-valued formulas within one
//! integer step (table fill rounds once, the root lookup truncates once).
//! These helpers compute the reference values the engine is measured against
//! and accumulate error statistics across full-domain scans.

use oxblend_core::formula;

/// Reference channel blend on the 8-bit scale.
///
/// Normalizes to `[0, 1]`, applies the gamma-aware formula, and rescales.
pub fn reference_channel_8bit(a: u8, b: u8, t: u8) -> i32 {
    let mixed = formula::blend_channel(a as f64 / 255.0, b as f64 / 255.0, t as f64 / 255.0);
    (mixed * 255.0).round() as i32
}

/// Reference alpha blend on the 8-bit scale.
pub fn reference_alpha_8bit(a: u8, b: u8, t: u8) -> i32 {
    formula::blend_alpha(a as f64, b as f64, t as f64 / 255.0).round() as i32
}

/// Absolute-error statistics from a scan
#[derive(Debug, Clone, Default)]
pub struct BlendErrorStats {
    /// Sum of absolute differences
    pub total_abs: u64,
    /// Largest absolute difference seen
    pub max_abs: i32,
    /// Number of samples
    pub count: u64,
}

impl BlendErrorStats {
    /// Record one engine-vs-reference pair.
    pub fn record(&mut self, actual: i32, expected: i32) {
        let diff = (actual - expected).abs();
        self.total_abs += diff as u64;
        self.max_abs = self.max_abs.max(diff);
        self.count += 1;
    }

    /// Merge statistics from another scan shard.
    pub fn merge(mut self, other: Self) -> Self {
        self.total_abs += other.total_abs;
        self.max_abs = self.max_abs.max(other.max_abs);
        self.count += other.count;
        self
    }

    /// Mean absolute difference.
    pub fn mean_abs(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_abs as f64 / self.count as f64
        }
    }

    /// True when every sample stayed within `tolerance` steps.
    pub fn within(&self, tolerance: i32) -> bool {
        self.max_abs <= tolerance
    }
}
