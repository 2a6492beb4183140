//! Real-valued blend formulas
//!
//! Channel intensities coming out of cameras (and stored in most 8-bit
//! formats) are gamma-encoded as the square root of linear light. Blending
//! such values correctly means squaring back into the linear domain, mixing
//! there, and rooting the result:
//!
//! ```text
//! mixed = sqrt((1 - t) * a^2 + t * b^2)
//! ```
//!
//! Alpha is stored linearly, so it mixes with a plain lerp.
//!
//! These functions are the reference semantics for the table-driven engine in
//! [`crate::engine`]; every lookup result must match them within integer
//! rounding error.

/// Gamma-aware channel blend.
///
/// `a` and `b` are gamma-encoded intensities in `[0, n]` for any maximum
/// intensity `n`; `t` is the mix fraction in `[0, 1]` (`0` yields `a`,
/// `1` yields `b`).
#[inline]
pub fn blend_channel(a: f64, b: f64, t: f64) -> f64 {
    ((1.0 - t) * (a * a) + t * (b * b)).sqrt()
}

/// Linear alpha blend.
///
/// Alpha is not gamma-encoded, so no squaring or rooting is involved.
#[inline]
pub fn blend_alpha(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_channel_midpoint() {
        // Blending full and zero intensity at t=0.5 lands at sqrt(0.5),
        // not 0.5: the mix happens in linear light.
        let mixed = blend_channel(1.0, 0.0, 0.5);
        assert!((mixed - 0.5f64.sqrt()).abs() < EPSILON, "got {}", mixed);
    }

    #[test]
    fn test_alpha_midpoint() {
        assert!((blend_alpha(1.0, 0.0, 0.5) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_channel_endpoints() {
        for i in 0..=255 {
            let a = i as f64 / 255.0;
            let b = (255 - i) as f64 / 255.0;
            assert!((blend_channel(a, b, 0.0) - a).abs() < EPSILON);
            assert!((blend_channel(a, b, 1.0) - b).abs() < EPSILON);
        }
    }

    #[test]
    fn test_alpha_endpoints() {
        for i in 0..=255 {
            let a = i as f64 / 255.0;
            let b = (255 - i) as f64 / 255.0;
            assert!((blend_alpha(a, b, 0.0) - a).abs() < EPSILON);
            assert!((blend_alpha(a, b, 1.0) - b).abs() < EPSILON);
        }
    }

    #[test]
    fn test_identical_inputs_fixed_point() {
        // Blending a value with itself returns it for every fraction.
        for i in 0..=100 {
            let t = i as f64 / 100.0;
            assert!((blend_channel(0.42, 0.42, t) - 0.42).abs() < 1e-9);
            assert!((blend_alpha(0.42, 0.42, t) - 0.42).abs() < 1e-9);
        }
    }

    #[test]
    fn test_arbitrary_max_intensity() {
        // The formulas are scale-invariant: domains other than [0, 1] work.
        let mixed = blend_channel(255.0, 0.0, 0.5);
        assert!((mixed - 255.0 * 0.5f64.sqrt()).abs() < 1e-9);
    }
}
