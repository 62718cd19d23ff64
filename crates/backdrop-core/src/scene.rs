use crate::camera::{world_rotation, Camera, Viewport};
use crate::constants::*;
use crate::noise::Noise;
use crate::palette::Palette;
use crate::params::{AnimationParams, ParamsError};
use crate::structure::{Structure, StructureInstance};
use glam::{Mat4, Vec2, Vec3};
use rand::prelude::*;

/// The animation context: structure pool, palette, noise field, RNG and
/// clocks. Everything the per-frame loop mutates lives here.
pub struct Backdrop {
    pub params: AnimationParams,
    structures: Vec<Structure>,
    palette: Palette,
    noise: Noise,
    rng: StdRng,
    frame: u64,
    noise_offset: f64,
    last_palette_refresh_ms: f64,
    viewport: Viewport,
    instances: Vec<StructureInstance>,
}

impl Backdrop {
    /// Validate `params`, then seed the scene: one palette (with its extra
    /// spawns) followed by the initial population.
    pub fn new(params: AnimationParams, seed: u64, viewport: Viewport) -> Result<Self, ParamsError> {
        params.validate()?;
        // Separate stream for the noise lattice
        let noise_seed = seed ^ 0x9E37_79B9_7F4A_7C15;
        let mut backdrop = Self {
            structures: Vec::with_capacity(params.max_structures),
            instances: Vec::with_capacity(params.max_structures),
            params,
            palette: Palette::empty(),
            noise: Noise::new(noise_seed),
            rng: StdRng::seed_from_u64(seed),
            frame: 0,
            noise_offset: 0.0,
            last_palette_refresh_ms: 0.0,
            viewport,
        };
        backdrop.refresh_palette();
        for _ in 0..backdrop.params.initial_structures {
            backdrop.try_spawn();
        }
        log::info!(
            "[backdrop] seeded {} structures (seed={seed})",
            backdrop.structures.len()
        );
        Ok(backdrop)
    }

    pub fn structures(&self) -> &[Structure] {
        &self.structures
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Instances produced by the most recent `tick`.
    pub fn instances(&self) -> &[StructureInstance] {
        &self.instances
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            log::debug!(
                "[backdrop] viewport {}x{}",
                viewport.width,
                viewport.height
            );
            self.viewport = viewport;
        }
    }

    /// Append one structure at a noise-driven position. Unconditional: the
    /// cap is the caller's concern (see `try_spawn`).
    pub fn spawn(&mut self) {
        let dims = Vec3::new(
            self.rng.gen_range(FOOTPRINT_MIN..FOOTPRINT_MAX),
            self.rng.gen_range(FOOTPRINT_MIN..FOOTPRINT_MAX),
            self.rng.gen_range(HEIGHT_MIN..HEIGHT_MAX),
        );
        let half_w = self.viewport.width * SPAWN_SPREAD_X;
        let half_h = self.viewport.height;
        let position = Vec2::new(
            self.noise
                .sample_mapped(Noise::wrap(self.noise_offset), 0.0, -half_w, half_w),
            self.noise
                .sample_mapped(0.0, Noise::wrap(self.noise_offset), -half_h, half_h),
        );
        let s = Structure::new(position, dims, &self.palette, &mut self.rng);
        self.structures.push(s);
    }

    /// Spawn unless the pool is already at its cap.
    pub fn try_spawn(&mut self) -> bool {
        if self.structures.len() >= self.params.max_structures {
            log::debug!("[backdrop] pool full ({}), spawn skipped", self.structures.len());
            return false;
        }
        self.spawn();
        true
    }

    /// Replace the palette wholesale and spawn a couple of structures so the
    /// change is visible straight away.
    pub fn refresh_palette(&mut self) {
        self.palette = Palette::generate(&mut self.rng);
        for _ in 0..self.params.palette_spawn_count {
            self.try_spawn();
        }
        log::debug!(
            "[backdrop] palette refreshed at frame {} ({} structures)",
            self.frame,
            self.structures.len()
        );
    }

    /// Click feedback: every live structure spins a little faster or slower.
    pub fn nudge_spin(&mut self) {
        for s in &mut self.structures {
            s.nudge_spin(&mut self.rng);
        }
    }

    /// Advance one frame at wall-clock `now_ms`.
    ///
    /// Structures are updated and drawn newest-first; any that have faded out
    /// are dropped before the tick returns, so each live structure is visited
    /// exactly once per tick and a removed one never reappears.
    pub fn tick(&mut self, now_ms: f64) {
        self.frame += 1;

        if self.frame % self.params.spawn_interval_frames == 0 {
            self.try_spawn();
        }

        if now_ms - self.last_palette_refresh_ms > self.params.palette_refresh_ms {
            self.refresh_palette();
            self.last_palette_refresh_ms = now_ms;
        }

        self.noise_offset += NOISE_OFFSET_STEP;

        let Self {
            structures,
            palette,
            noise,
            rng,
            instances,
            frame,
            ..
        } = self;
        instances.clear();
        for s in structures.iter_mut().rev() {
            s.update(*frame, palette, noise, rng);
            instances.push(s.draw(*frame, rng));
        }
        structures.retain(|s| !s.is_faded());
    }

    pub fn camera(&self) -> Camera {
        Camera::for_frame(self.frame, self.viewport)
    }

    /// Combined matrix for the current frame, world rotation included.
    pub fn view_proj(&self) -> Mat4 {
        self.camera().view_proj(world_rotation(self.frame))
    }
}
