//! RGBA color values and the conversions the palette and structures share.
//!
//! Channels are kept in the 0–255 range as `f32` so interpolation does not
//! accumulate rounding error; the renderer normalizes at upload time.

use rand::Rng;
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb(rgb: [f32; 3], a: f32) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], a)
    }

    /// True when every color channel is strictly above `threshold`.
    #[inline]
    pub fn is_near_white(&self, threshold: f32) -> bool {
        self.r > threshold && self.g > threshold && self.b > threshold
    }

    /// Component-wise linear interpolation, alpha included.
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        Rgba {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Step toward `target` using the cosine-eased `progress` as lerp factor.
    pub fn ease_toward(self, target: Rgba, progress: f32) -> Rgba {
        self.lerp(target, cosine_ease(progress))
    }

    /// Normalized `[r, g, b, a]` for GPU upload.
    pub fn to_unit_array(&self) -> [f32; 4] {
        [self.r / 255.0, self.g / 255.0, self.b / 255.0, self.a / 255.0]
    }
}

/// `0.5 - cos(p·π)/2`: maps [0,1] onto a smooth S-curve.
#[inline]
pub fn cosine_ease(progress: f32) -> f32 {
    0.5 - (progress * PI).cos() / 2.0
}

/// Convert HSL (hue in degrees, saturation and lightness in percent) to RGB
/// channels in the 0–255 range.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let s = s / 100.0;
    let l = l / 100.0;
    if s == 0.0 {
        let v = l * 255.0;
        return [v, v, v];
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;
    let h = h.rem_euclid(360.0) / 360.0;

    [
        hue_to_rgb(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_rgb(p, q, h) * 255.0,
        hue_to_rgb(p, q, h - 1.0 / 3.0) * 255.0,
    ]
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Replace a near-white color with a random vivid, blue-leaning tone. The
/// blue floor differs between the pick-time and draw-time guards.
pub fn resaturate<R: Rng + ?Sized>(rng: &mut R, blue_min: f32) -> [f32; 3] {
    [
        rng.gen_range(50.0..=200.0),
        rng.gen_range(50.0..=200.0),
        rng.gen_range(blue_min..=255.0),
    ]
}
