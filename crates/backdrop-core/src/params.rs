use crate::constants::*;
use thiserror::Error;

/// Pool-level tuning. Per-structure lifecycle timings live in `constants`.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationParams {
    pub spawn_interval_frames: u64,
    pub max_structures: usize,
    pub initial_structures: usize,
    pub palette_spawn_count: usize,
    pub palette_refresh_ms: f64,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            spawn_interval_frames: SPAWN_INTERVAL_FRAMES,
            max_structures: MAX_STRUCTURES,
            initial_structures: INITIAL_STRUCTURES,
            palette_spawn_count: PALETTE_SPAWN_COUNT,
            palette_refresh_ms: PALETTE_REFRESH_MS,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("spawn interval must be at least one frame")]
    ZeroSpawnInterval,
    #[error("structure cap must be positive")]
    ZeroCapacity,
    #[error("initial structures ({initial}) exceed the cap ({max})")]
    InitialOverCap { initial: usize, max: usize },
    #[error("palette refresh interval must be a positive number of milliseconds, got {0}")]
    BadRefreshInterval(f64),
}

impl AnimationParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.spawn_interval_frames == 0 {
            return Err(ParamsError::ZeroSpawnInterval);
        }
        if self.max_structures == 0 {
            return Err(ParamsError::ZeroCapacity);
        }
        if self.initial_structures > self.max_structures {
            return Err(ParamsError::InitialOverCap {
                initial: self.initial_structures,
                max: self.max_structures,
            });
        }
        if !(self.palette_refresh_ms.is_finite() && self.palette_refresh_ms > 0.0) {
            return Err(ParamsError::BadRefreshInterval(self.palette_refresh_ms));
        }
        Ok(())
    }
}
