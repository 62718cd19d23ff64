//! Camera and viewport state shared with the web frontend.
//!
//! These types avoid platform-specific APIs. The frontend feeds them the
//! canvas CSS size and reads back a combined view-projection matrix.

use crate::clock::phase;
use crate::constants::MOBILE_MAX_WIDTH;
use glam::{Mat4, Vec3};
use std::f32::consts::{FRAC_PI_3, FRAC_PI_6};

/// Visible area in CSS pixels. World units match these pixels on the
/// `z = 0` plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Narrow viewports get the optional performance hint.
    pub fn is_mobile(&self) -> bool {
        self.width <= MOBILE_MAX_WIDTH
    }
}

/// Perspective camera looking at the origin with screen-space y growing
/// downward.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The slowly wandering camera for `frame`. The eye sits where the
    /// viewport exactly fills the 60° field of view at `z = 0`.
    pub fn for_frame(frame: u64, viewport: Viewport) -> Self {
        let eye_z = (viewport.height / 2.0) / FRAC_PI_6.tan();
        Self {
            eye: Vec3::new(
                remap_unit(phase(frame, 0.0007, 0.0).sin(), -50.0, 50.0),
                remap_unit(phase(frame, 0.0005, 0.0).cos(), -30.0, 30.0),
                eye_z,
            ),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: viewport.aspect(),
            fovy_radians: FRAC_PI_3,
            znear: eye_z / 10.0,
            zfar: eye_z * 10.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Projection, y flip and view combined with the scene-wide `world`
    /// rotation.
    pub fn view_proj(&self, world: Mat4) -> Mat4 {
        self.projection_matrix()
            * Mat4::from_scale(Vec3::new(1.0, -1.0, 1.0))
            * self.view_matrix()
            * world
    }
}

/// Gentle whole-scene rotation applied on top of the camera.
pub fn world_rotation(frame: u64) -> Mat4 {
    Mat4::from_rotation_z(phase(frame, 0.001, 0.0))
        * Mat4::from_rotation_x(phase(frame, 0.0003, 0.0).sin() * 0.1)
}

/// Map `v` from `[-1, 1]` onto `[lo, hi]`.
#[inline]
fn remap_unit(v: f32, lo: f32, hi: f32) -> f32 {
    lo + (v + 1.0) * 0.5 * (hi - lo)
}
