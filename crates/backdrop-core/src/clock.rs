//! Frame-driven angles.
//!
//! The frame counter grows without bound, so products like `frame * rate`
//! are taken in f64 and wrapped to one turn before narrowing to f32.

use std::f64::consts::TAU;

/// `frame * rate + offset` as an angle in `[0, TAU)`.
#[inline]
pub fn phase(frame: u64, rate: f64, offset: f64) -> f32 {
    (frame as f64 * rate + offset).rem_euclid(TAU) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_direct_product_for_small_frames() {
        let direct = (120.0f32 * 0.003 + 1.5).sin();
        assert!((phase(120, 0.003, 1.5).sin() - direct).abs() < 1e-6);
    }

    #[test]
    fn consecutive_frames_stay_distinct_late_in_a_session() {
        let late = 1u64 << 40;
        let a = phase(late, 0.002, 0.0);
        let b = phase(late + 1, 0.002, 0.0);
        let step = (b - a).rem_euclid(std::f32::consts::TAU);
        assert!((step - 0.002).abs() < 1e-4, "step {step}");
    }
}
