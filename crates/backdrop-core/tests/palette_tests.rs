// Host-side tests for palette generation and color selection.

use backdrop_core::constants::ACCENT_COLORS;
use backdrop_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 0.5
}

#[test]
fn hsl_primaries_convert_to_rgb() {
    let red = hsl_to_rgb(0.0, 100.0, 50.0);
    assert!(approx(red[0], 255.0) && approx(red[1], 0.0) && approx(red[2], 0.0), "{red:?}");

    let green = hsl_to_rgb(120.0, 100.0, 50.0);
    assert!(approx(green[0], 0.0) && approx(green[1], 255.0) && approx(green[2], 0.0), "{green:?}");

    let blue = hsl_to_rgb(240.0, 100.0, 50.0);
    assert!(approx(blue[0], 0.0) && approx(blue[1], 0.0) && approx(blue[2], 255.0), "{blue:?}");
}

#[test]
fn hsl_lightness_extremes() {
    let black = hsl_to_rgb(45.0, 80.0, 0.0);
    let white = hsl_to_rgb(45.0, 80.0, 100.0);
    for c in black {
        assert!(approx(c, 0.0));
    }
    for c in white {
        assert!(approx(c, 255.0));
    }
}

#[test]
fn generated_palette_has_ten_colors_at_alpha_200() {
    for seed in 0..64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let palette = Palette::generate(&mut rng);
        assert_eq!(palette.len(), 10, "seed {seed}");
        for c in palette.colors() {
            assert_eq!(c.a, 200.0);
        }
    }
}

#[test]
fn generated_palette_ends_with_accents() {
    let mut rng = StdRng::seed_from_u64(5);
    let palette = Palette::generate(&mut rng);
    let tail = &palette.colors()[5..];
    for (c, accent) in tail.iter().zip(ACCENT_COLORS.iter()) {
        assert_eq!([c.r, c.g, c.b], *accent);
    }
}

#[test]
fn generated_colors_are_neither_black_nor_white() {
    // Saturation >= 60% and lightness in 40..70% keep channels well apart.
    for seed in 0..64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let palette = Palette::generate(&mut rng);
        for c in &palette.colors()[..5] {
            let max = c.r.max(c.g).max(c.b);
            let min = c.r.min(c.g).min(c.b);
            assert!(max - min > 40.0, "washed-out color {c:?} for seed {seed}");
            assert!(!c.is_near_white(200.0));
        }
    }
}

#[test]
fn regenerating_replaces_the_palette() {
    let mut rng = StdRng::seed_from_u64(9);
    let first = Palette::generate(&mut rng);
    let second = Palette::generate(&mut rng);
    assert_eq!(second.len(), first.len());
    assert_ne!(first.colors()[0], second.colors()[0]);
}

#[test]
fn random_color_never_near_white() {
    let mut rng = StdRng::seed_from_u64(1234);
    let palettes = [
        Palette::empty(),
        Palette::generate(&mut rng),
        // All-white palette exercises the pick-time guard on every draw
        Palette::from_colors([Rgba::new(255.0, 255.0, 255.0, 200.0); 3]),
    ];
    for palette in &palettes {
        for _ in 0..5000 {
            let c = palette.random_color(&mut rng);
            assert!(!c.is_near_white(230.0), "near-white color {c:?}");
        }
    }
}

#[test]
fn random_color_ranges() {
    let mut rng = StdRng::seed_from_u64(77);
    let palette = Palette::generate(&mut rng);
    for _ in 0..5000 {
        let c = palette.random_color(&mut rng);
        for ch in [c.r, c.g, c.b] {
            assert!((20.0..=255.0).contains(&ch), "channel {ch} out of range");
        }
        assert!((180.0..=220.0).contains(&c.a), "alpha {} out of range", c.a);
    }
}

#[test]
fn empty_palette_synthesizes_blue_leaning_colors() {
    let mut rng = StdRng::seed_from_u64(42);
    let palette = Palette::empty();
    for _ in 0..2000 {
        let c = palette.random_color(&mut rng);
        assert!(c.r >= 50.0 && c.g >= 50.0);
        assert!(c.b >= 100.0, "blue channel too low: {}", c.b);
    }
}

#[test]
fn white_palette_entries_get_resaturated() {
    let mut rng = StdRng::seed_from_u64(8);
    let palette = Palette::from_colors([Rgba::new(250.0, 240.0, 245.0, 200.0)]);
    for _ in 0..1000 {
        let c = palette.random_color(&mut rng);
        // Resaturated red/green top out at 200, plus at most 25 of jitter
        assert!(c.r <= 225.0 + 1e-3 || c.g <= 225.0 + 1e-3);
    }
}
