//! Seedable 2D coherent noise.
//!
//! Value noise over a wrapped lattice of random samples, cosine-interpolated
//! and summed over several octaves. Output lies in `[0, 1)`; nearby inputs
//! give nearby outputs, which is what spawn placement and drift rely on.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::PI;

const LATTICE_MASK: usize = 4095;
/// The field repeats every this many units along both axes.
pub const NOISE_PERIOD: f64 = (LATTICE_MASK + 1) as f64;
const Y_WRAP_BITS: u32 = 4;
const Y_WRAP: usize = 1 << Y_WRAP_BITS;

#[derive(Clone, Debug)]
pub struct Noise {
    lattice: Vec<f32>,
    octaves: u32,
    falloff: f32,
}

impl Noise {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let lattice = (0..=LATTICE_MASK).map(|_| rng.gen::<f32>()).collect();
        Self {
            lattice,
            octaves: 4,
            falloff: 0.5,
        }
    }

    /// Fold an unbounded coordinate into one period, keeping f32 precision
    /// for long-running offsets.
    pub fn wrap(t: f64) -> f32 {
        t.rem_euclid(NOISE_PERIOD) as f32
    }

    /// Sample the field at `(x, y)`. Negative inputs mirror their absolute value.
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let (x, y) = (x.abs(), y.abs());
        let mut xi = x.floor() as usize;
        let mut yi = y.floor() as usize;
        let mut xf = x - x.floor();
        let mut yf = y - y.floor();

        let mut sum = 0.0;
        let mut amp = 0.5;
        for _ in 0..self.octaves {
            let offset = xi.wrapping_add(yi << Y_WRAP_BITS);
            let rx = scaled_cosine(xf);
            let ry = scaled_cosine(yf);

            let mut n1 = self.at(offset);
            n1 += rx * (self.at(offset.wrapping_add(1)) - n1);
            let mut n2 = self.at(offset.wrapping_add(Y_WRAP));
            n2 += rx * (self.at(offset.wrapping_add(Y_WRAP + 1)) - n2);
            n1 += ry * (n2 - n1);

            sum += n1 * amp;
            amp *= self.falloff;

            xi <<= 1;
            xf *= 2.0;
            yi <<= 1;
            yf *= 2.0;
            if xf >= 1.0 {
                xi += 1;
                xf -= 1.0;
            }
            if yf >= 1.0 {
                yi += 1;
                yf -= 1.0;
            }
        }
        sum
    }

    /// Sample and linearly remap from `[0, 1]` onto `[lo, hi]`.
    pub fn sample_mapped(&self, x: f32, y: f32, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.sample(x, y)
    }

    #[inline]
    fn at(&self, i: usize) -> f32 {
        self.lattice[i & LATTICE_MASK]
    }
}

#[inline]
fn scaled_cosine(t: f32) -> f32 {
    0.5 * (1.0 - (t * PI).cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_field() {
        let a = Noise::new(7);
        let b = Noise::new(7);
        for i in 0..50 {
            let x = i as f32 * 0.37;
            assert_eq!(a.sample(x, 1.5), b.sample(x, 1.5));
        }
    }

    #[test]
    fn output_stays_in_unit_range() {
        let n = Noise::new(3);
        for i in 0..2000 {
            let v = n.sample(i as f32 * 0.013, i as f32 * 0.029);
            assert!((0.0..1.0).contains(&v), "noise out of range: {v}");
        }
    }

    #[test]
    fn field_repeats_every_period() {
        let n = Noise::new(5);
        for i in 0..100 {
            let x = i as f32 * 0.173;
            let y = i as f32 * 0.091;
            assert!((n.sample(x, y) - n.sample(x + 4096.0, y)).abs() < 5e-3);
            assert!((n.sample(x, y) - n.sample(x, y + 4096.0)).abs() < 5e-3);
        }
    }

    #[test]
    fn wrapped_offsets_keep_small_steps() {
        let late = 262_144.0f64;
        let a = Noise::wrap(late);
        let b = Noise::wrap(late + 0.01);
        assert!((b - a - 0.01).abs() < 1e-4, "{a} -> {b}");
    }

    #[test]
    fn small_steps_give_small_changes() {
        let n = Noise::new(11);
        let mut prev = n.sample(0.0, 0.0);
        for i in 1..500 {
            let v = n.sample(i as f32 * 0.01, 0.0);
            assert!((v - prev).abs() < 0.1, "jump at step {i}: {prev} -> {v}");
            prev = v;
        }
    }
}
