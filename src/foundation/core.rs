use crate::foundation::error::{FlowError, FlowResult};

pub use kurbo::{BezPath, CubicBez, Point, Rect, Size, Vec2};

/// Frame rate every timing default in this crate assumes.
pub const FPS: u32 = 30;

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32, // must be > 0
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: FPS, den: 1 }
    }
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> FlowResult<Self> {
        if den == 0 {
            return Err(FlowError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(FlowError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Convert a (possibly fractional) frame count to seconds.
    pub fn frames_to_secs(self, frames: f64) -> f64 {
        frames * f64::from(self.den) / f64::from(self.num)
    }

    /// Convert seconds to a whole frame count, rounding to nearest.
    pub fn secs_to_frames(self, secs: f64) -> f64 {
        (secs * self.as_f64()).round()
    }

    /// Convert seconds to frame count using floor semantics.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

/// Convert frames to seconds at [`FPS`].
pub fn frames_to_seconds(frames: f64) -> f64 {
    Fps::default().frames_to_secs(frames)
}

/// Convert seconds to frames at [`FPS`], rounded to the nearest frame.
pub fn seconds_to_frames(seconds: f64) -> f64 {
    Fps::default().secs_to_frames(seconds)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
