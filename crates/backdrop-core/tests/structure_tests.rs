// Host-side tests for the structure lifecycle, motion and draw output.

use backdrop_core::*;
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

struct Fixture {
    rng: StdRng,
    palette: Palette,
    noise: Noise,
}

fn fixture(seed: u64) -> Fixture {
    let mut rng = StdRng::seed_from_u64(seed);
    let palette = Palette::generate(&mut rng);
    Fixture {
        rng,
        palette,
        noise: Noise::new(seed),
    }
}

fn make_structure(f: &mut Fixture) -> Structure {
    Structure::new(
        Vec2::new(10.0, -20.0),
        Vec3::new(100.0, 80.0, 60.0),
        &f.palette,
        &mut f.rng,
    )
}

#[test]
fn new_structure_starts_invisible_with_random_ranges() {
    let mut f = fixture(1);
    for _ in 0..200 {
        let s = make_structure(&mut f);
        assert_eq!(s.age, 0);
        assert_eq!(s.alpha, 0.0);
        assert!(!s.fade_out);
        assert_eq!(s.color, s.target_color);
        assert!((0.0002..0.003).contains(&s.rotation_speed));
        assert!((0.1..1.1).contains(&s.scale_factor));
        assert!((0.01..0.03).contains(&s.pulse_rate));
        assert!((0.0..100.0).contains(&s.noise_value));
    }
}

#[test]
fn shapes_and_patterns_are_all_reachable() {
    let mut f = fixture(2);
    let made: Vec<Structure> = (0..300).map(|_| make_structure(&mut f)).collect();
    for shape in [ShapeKind::Box, ShapeKind::RoundedBox, ShapeKind::Prism] {
        assert!(made.iter().any(|s| s.shape == shape), "{shape:?} never chosen");
    }
    for pattern in [MovePattern::Sine, MovePattern::Noise, MovePattern::Orbital] {
        assert!(made.iter().any(|s| s.pattern == pattern), "{pattern:?} never chosen");
    }
}

#[test]
fn alpha_fades_in_by_two_and_caps_at_180() {
    let mut f = fixture(3);
    let mut s = make_structure(&mut f);
    for frame in 1..=89u64 {
        s.update(frame, &f.palette, &f.noise, &mut f.rng);
        assert!((s.alpha - 2.0 * frame as f32).abs() < 1e-4);
    }
    for frame in 90..=750u64 {
        s.update(frame, &f.palette, &f.noise, &mut f.rng);
        assert_eq!(s.alpha, 180.0);
    }
}

#[test]
fn fade_out_starts_only_after_age_750() {
    let mut f = fixture(4);
    let mut s = make_structure(&mut f);
    for frame in 1..=750u64 {
        s.update(frame, &f.palette, &f.noise, &mut f.rng);
        assert!(!s.fade_out, "fade_out set early at age {}", s.age);
    }
    assert_eq!(s.age, 750);
    s.update(751, &f.palette, &f.noise, &mut f.rng);
    assert!(s.fade_out);
    assert_eq!(s.alpha, 178.5);
}

#[test]
fn faded_structure_reaches_zero_at_age_870() {
    let mut f = fixture(5);
    let mut s = make_structure(&mut f);
    let mut frame = 0;
    loop {
        frame += 1;
        s.update(frame, &f.palette, &f.noise, &mut f.rng);
        assert!(s.alpha >= 0.0 && s.alpha <= 180.0, "alpha {} at age {}", s.alpha, s.age);
        if s.is_faded() {
            break;
        }
        assert!(s.age < 870, "still visible at age {}", s.age);
    }
    assert_eq!(s.age, 870);
    assert_eq!(s.alpha, 0.0);
}

#[test]
fn color_freezes_once_fading() {
    let mut f = fixture(6);
    let mut s = make_structure(&mut f);
    s.target_color = Rgba::new(20.0, 20.0, 250.0, 200.0);
    for frame in 1..=751u64 {
        s.update(frame, &f.palette, &f.noise, &mut f.rng);
    }
    assert!(s.fade_out);
    let frozen = s.color;
    s.update(752, &f.palette, &f.noise, &mut f.rng);
    assert_eq!(s.color, frozen);
}

#[test]
fn color_eases_toward_target_by_cosine_factor() {
    let mut f = fixture(7);
    let mut s = make_structure(&mut f);
    let start = Rgba::new(100.0, 100.0, 100.0, 200.0);
    let target = Rgba::new(200.0, 50.0, 250.0, 200.0);
    s.color = start;
    s.target_color = target;
    s.update(1, &f.palette, &f.noise, &mut f.rng);
    let k = 0.5 - (0.01f32 * std::f32::consts::PI).cos() / 2.0;
    assert!((s.color.r - (100.0 + 100.0 * k)).abs() < 1e-4);
    assert!((s.color.g - (100.0 - 50.0 * k)).abs() < 1e-4);
    assert!((s.color.b - (100.0 + 150.0 * k)).abs() < 1e-4);
}

#[test]
fn target_color_retargets_every_200_frames() {
    let mut f = fixture(8);
    let mut s = make_structure(&mut f);
    let sentinel = Rgba::new(1.0, 2.0, 3.0, 4.0);
    s.target_color = sentinel;
    for frame in 1..=199u64 {
        s.update(frame, &f.palette, &f.noise, &mut f.rng);
        assert_eq!(s.target_color, sentinel);
    }
    s.update(200, &f.palette, &f.noise, &mut f.rng);
    assert_ne!(s.target_color, sentinel);
}

#[test]
fn empty_palette_keeps_target() {
    let mut f = fixture(9);
    let mut s = make_structure(&mut f);
    let empty = Palette::empty();
    let target = s.target_color;
    for frame in 1..=400u64 {
        s.update(frame, &empty, &f.noise, &mut f.rng);
    }
    assert_eq!(s.target_color, target);
}

#[test]
fn orbital_motion_follows_sin_cos_of_angle() {
    let mut f = fixture(10);
    let mut s = make_structure(&mut f);
    s.pattern = MovePattern::Orbital;
    for frame in [1u64, 2, 500, 12_345] {
        let before = s.position;
        let n = s.noise_value + 0.01;
        s.update(frame, &f.palette, &f.noise, &mut f.rng);
        let angle = frame as f32 * 0.002 + n;
        let delta = s.position - before;
        assert!((delta.x - angle.sin() * 0.3).abs() < 1e-4, "dx at frame {frame}");
        assert!((delta.y - angle.cos() * 0.3).abs() < 1e-4, "dy at frame {frame}");
    }
}

#[test]
fn sine_motion_uses_separate_axis_rates() {
    let mut f = fixture(11);
    let mut s = make_structure(&mut f);
    s.pattern = MovePattern::Sine;
    let before = s.position;
    let n = s.noise_value + 0.01;
    s.update(40, &f.palette, &f.noise, &mut f.rng);
    let delta = s.position - before;
    assert!((delta.x - (40.0 * 0.003 + n).cos() * 0.2).abs() < 1e-4);
    assert!((delta.y - (40.0 * 0.005 + n).sin() * 0.4).abs() < 1e-4);
}

#[test]
fn noise_motion_stays_within_mapped_bounds() {
    let mut f = fixture(12);
    let mut s = make_structure(&mut f);
    s.pattern = MovePattern::Noise;
    for frame in 1..500u64 {
        let before = s.position;
        s.update(frame, &f.palette, &f.noise, &mut f.rng);
        let delta = s.position - before;
        assert!(delta.x.abs() <= 0.5 + 1e-4 && delta.y.abs() <= 0.7 + 1e-4);
    }
}

#[test]
fn draw_uses_structure_alpha_and_guards_white() {
    let mut f = fixture(13);
    let mut s = make_structure(&mut f);
    s.alpha = 90.0;
    s.color = Rgba::new(242.5, 242.5, 255.0, 200.0);
    for frame in 0..200 {
        let inst = s.draw(frame, &mut f.rng);
        assert_eq!(inst.fill.a, 90.0);
        assert!(!inst.fill.is_near_white(230.0), "white fill {:?}", inst.fill);
    }
}

#[test]
fn draw_places_box_below_its_anchor() {
    let mut f = fixture(14);
    let mut s = make_structure(&mut f);
    s.shape = ShapeKind::Box;
    let inst = s.draw(0, &mut f.rng);
    let origin = inst.model.w_axis.truncate();
    assert!((origin - Vec3::new(10.0, -20.0, -30.0)).length() < 1e-3);
}

#[test]
fn pulse_stays_within_five_percent() {
    let mut f = fixture(15);
    let s = make_structure(&mut f);
    for frame in 0..5000 {
        let p = s.pulse_at(frame);
        assert!((0.95 - 1e-6..=1.05 + 1e-6).contains(&p));
    }
}

#[test]
fn nudge_spin_scales_within_bounds() {
    let mut f = fixture(16);
    let mut s = make_structure(&mut f);
    for _ in 0..100 {
        let before = s.rotation_speed;
        s.nudge_spin(&mut f.rng);
        let ratio = s.rotation_speed / before;
        assert!((0.8 - 1e-5..=1.2 + 1e-5).contains(&ratio), "ratio {ratio}");
    }
}

#[test]
fn spin_pulse_and_drift_keep_advancing_after_long_sessions() {
    let mut f = fixture(17);
    let mut s = make_structure(&mut f);
    let late = (1u64 << 25) + 1;

    let r0 = s.rotation_at(late);
    let r1 = s.rotation_at(late + 1);
    assert_ne!(r0, r1, "spin frozen at frame {late}");
    assert!(r0.x >= 0.0 && r0.x < std::f32::consts::TAU);

    s.pulse_rate = 0.02;
    let expected = 1.0 + ((late as f64 * 0.02).sin() as f32) * 0.05;
    assert!((s.pulse_at(late) - expected).abs() < 1e-4);

    s.pattern = MovePattern::Orbital;
    let a = s.pattern.step(late, s.noise_value, &f.noise);
    let b = s.pattern.step(late + 1, s.noise_value, &f.noise);
    assert_ne!(a, b, "orbital drift frozen at frame {late}");
}
