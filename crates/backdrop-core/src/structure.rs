use crate::clock::phase;
use crate::color::{resaturate, Rgba};
use crate::constants::*;
use crate::geometry::ShapeKind;
use crate::noise::Noise;
use crate::palette::Palette;
use glam::{Mat4, Vec2, Vec3};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::f32::consts::TAU;

/// How a structure drifts each frame. Fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovePattern {
    Sine,
    Noise,
    Orbital,
}

impl MovePattern {
    /// Position delta for `frame`, given the structure's current noise value.
    pub fn step(self, frame: u64, noise_value: f32, noise: &Noise) -> Vec2 {
        let n = noise_value as f64;
        match self {
            MovePattern::Sine => Vec2::new(
                phase(frame, 0.003, n).cos() * 0.2,
                phase(frame, 0.005, n).sin() * 0.4,
            ),
            MovePattern::Noise => Vec2::new(
                noise.sample_mapped(0.0, noise_value, -0.5, 0.5),
                noise.sample_mapped(noise_value, 0.0, -0.7, 0.7),
            ),
            MovePattern::Orbital => {
                let angle = phase(frame, 0.002, n);
                Vec2::new(angle.sin() * 0.3, angle.cos() * 0.3)
            }
        }
    }
}

impl Distribution<MovePattern> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> MovePattern {
        match rng.gen_range(0..3) {
            0 => MovePattern::Sine,
            1 => MovePattern::Noise,
            _ => MovePattern::Orbital,
        }
    }
}

/// What the renderer needs for one structure this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StructureInstance {
    pub model: Mat4,
    pub fill: Rgba,
    pub shape: ShapeKind,
}

/// One animated box with its own lifecycle and motion.
#[derive(Clone, Debug, PartialEq)]
pub struct Structure {
    pub position: Vec2,
    /// `(width, depth, height)`.
    pub dims: Vec3,
    pub age: u32,
    pub alpha: f32,
    pub fade_out: bool,
    pub color: Rgba,
    pub target_color: Rgba,
    pub rotation: Vec3,
    pub rotation_speed: f32,
    pub scale_factor: f32,
    pub pulse_rate: f32,
    pub noise_value: f32,
    pub shape: ShapeKind,
    pub pattern: MovePattern,
}

impl Structure {
    pub fn new<R: Rng + ?Sized>(
        position: Vec2,
        dims: Vec3,
        palette: &Palette,
        rng: &mut R,
    ) -> Self {
        let color = palette.random_color(rng);
        Self {
            position,
            dims,
            age: 0,
            alpha: 0.0,
            fade_out: false,
            color,
            target_color: color,
            rotation_speed: rng.gen_range(ROTATION_SPEED_MIN..ROTATION_SPEED_MAX),
            rotation: Vec3::new(
                rng.gen_range(0.0..TAU),
                rng.gen_range(0.0..TAU),
                rng.gen_range(0.0..TAU),
            ),
            scale_factor: rng.gen_range(SCALE_FACTOR_MIN..SCALE_FACTOR_MAX),
            pulse_rate: rng.gen_range(PULSE_RATE_MIN..PULSE_RATE_MAX),
            noise_value: rng.gen_range(0.0..NOISE_SEED_MAX),
            shape: rng.gen(),
            pattern: rng.gen(),
        }
    }

    /// Advance one frame: drift, age, ease color, fade in or out, and
    /// periodically retarget the color from `palette`.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        frame: u64,
        palette: &Palette,
        noise: &Noise,
        rng: &mut R,
    ) {
        self.noise_value += NOISE_VALUE_STEP;
        self.position += self.pattern.step(frame, self.noise_value, noise);

        self.age += 1;

        if !self.fade_out {
            self.color = self.color.ease_toward(self.target_color, COLOR_EASE_PROGRESS);
            self.alpha = (self.alpha + FADE_IN_STEP).min(ALPHA_MAX);
        }

        if self.age > FADE_DURATION_FRAMES {
            self.fade_out = true;
            self.alpha -= FADE_OUT_STEP;
        }

        if self.age % RETARGET_EVERY_FRAMES == 0 && !palette.is_empty() {
            self.target_color = palette.random_color(rng);
        }
    }

    pub fn is_faded(&self) -> bool {
        self.alpha <= 0.0
    }

    /// Rotation angles for `frame`; the three axes turn at 1, 0.7 and 0.5
    /// times the base speed.
    pub fn rotation_at(&self, frame: u64) -> Vec3 {
        let speed = self.rotation_speed as f64;
        Vec3::new(
            phase(frame, speed, self.rotation.x as f64),
            phase(frame, speed * 0.7, self.rotation.y as f64),
            phase(frame, speed * 0.5, self.rotation.z as f64),
        )
    }

    pub fn pulse_at(&self, frame: u64) -> f32 {
        1.0 + phase(frame, self.pulse_rate as f64, 0.0).sin() * PULSE_AMPLITUDE
    }

    /// Build this frame's instance. The fill color is re-checked for
    /// near-white because easing between two valid colors can still land
    /// there.
    pub fn draw<R: Rng + ?Sized>(&self, frame: u64, rng: &mut R) -> StructureInstance {
        let rot = self.rotation_at(frame);
        let model = Mat4::from_translation(self.position.extend(-self.dims.z / 2.0))
            * Mat4::from_rotation_x(rot.x)
            * Mat4::from_rotation_y(rot.y)
            * Mat4::from_rotation_z(rot.z)
            * Mat4::from_scale(Vec3::splat(self.scale_factor * self.pulse_at(frame)))
            * self.shape.local_transform(self.dims);

        let mut fill = Rgba::new(self.color.r, self.color.g, self.color.b, self.alpha.max(0.0));
        if fill.is_near_white(NEAR_WHITE_DRAW) {
            [fill.r, fill.g, fill.b] = resaturate(rng, 100.0);
        }

        StructureInstance {
            model,
            fill,
            shape: self.shape,
        }
    }

    /// Scale the spin speed by a random factor; used for click feedback.
    pub fn nudge_spin<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.rotation_speed *= rng.gen_range(CLICK_SPIN_MIN..=CLICK_SPIN_MAX);
    }
}
