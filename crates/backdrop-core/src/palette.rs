use crate::color::{hsl_to_rgb, resaturate, Rgba};
use crate::constants::*;
use rand::Rng;
use smallvec::SmallVec;

/// The set of colors structures draw from and retarget toward.
///
/// A palette is always replaced as a whole; there is no merge step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Palette {
    colors: SmallVec<[Rgba; PALETTE_LEN]>,
}

impl Palette {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Five hues evenly spaced from a random base, followed by the fixed
    /// accent colors.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let base_hue: f32 = rng.gen_range(0.0..360.0);
        let mut colors = SmallVec::new();
        for i in 0..PALETTE_GENERATED {
            let hue = (base_hue + i as f32 * PALETTE_HUE_STEP) % 360.0;
            let saturation = rng.gen_range(SATURATION_RANGE.0..=SATURATION_RANGE.1);
            let lightness = rng.gen_range(LIGHTNESS_RANGE.0..=LIGHTNESS_RANGE.1);
            colors.push(Rgba::from_rgb(
                hsl_to_rgb(hue, saturation, lightness),
                PALETTE_ALPHA,
            ));
        }
        for accent in ACCENT_COLORS {
            colors.push(Rgba::from_rgb(accent, PALETTE_ALPHA));
        }
        Self { colors }
    }

    pub fn from_colors(colors: impl IntoIterator<Item = Rgba>) -> Self {
        Self {
            colors: colors.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Pick a structure color.
    ///
    /// One time in five (and always for an empty palette) a fresh blue-leaning
    /// color is synthesized. Otherwise a palette entry is jittered per channel
    /// and given a new alpha. Near-white results are pushed back to a vivid
    /// tone in both paths.
    pub fn random_color<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgba {
        if self.colors.is_empty() || rng.gen_bool(SYNTH_COLOR_CHANCE) {
            return synthesize_color(rng);
        }

        let base = self.colors[rng.gen_range(0..self.colors.len())];
        let [mut r, mut g, mut b] = [base.r, base.g, base.b];
        if base.is_near_white(NEAR_WHITE_PICK) {
            [r, g, b] = resaturate(rng, 150.0);
        }

        let mut jitter = |c: f32| {
            (c + rng.gen_range(-COLOR_JITTER..=COLOR_JITTER)).clamp(CHANNEL_FLOOR, 255.0)
        };
        let (r, g, b) = (jitter(r), jitter(g), jitter(b));
        Rgba::new(r, g, b, rng.gen_range(COLOR_ALPHA_MIN..=COLOR_ALPHA_MAX))
    }
}

fn synthesize_color<R: Rng + ?Sized>(rng: &mut R) -> Rgba {
    let mut c = Rgba::new(
        rng.gen_range(50.0..=255.0),
        rng.gen_range(50.0..=255.0),
        rng.gen_range(150.0..=255.0),
        rng.gen_range(COLOR_ALPHA_MIN..=COLOR_ALPHA_MAX),
    );
    if c.is_near_white(NEAR_WHITE_DRAW) {
        [c.r, c.g, c.b] = resaturate(rng, 100.0);
    }
    c
}
