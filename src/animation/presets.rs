//! One-call animation presets shared by the scene components.
//!
//! Every preset is a pure function of `(frame, declared parameters)`. Durations and delays are
//! passed explicitly; take them from [`crate::TimingConfig`] to follow the house pacing.

use std::f64::consts::PI;

use crate::{
    animation::ease::Ease,
    animation::interp::progress,
    foundation::core::Vec2,
    foundation::error::{FlowError, FlowResult},
    foundation::math::lerp,
};

/// Direction an element travels while sliding into place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SlideDirection {
    /// Enters moving upward (starts below its resting position).
    #[default]
    Up,
    /// Enters moving downward.
    Down,
    /// Enters moving left (starts to the right).
    Left,
    /// Enters moving right.
    Right,
}

impl SlideDirection {
    /// Offset from the resting position for a remaining `distance`.
    pub fn offset(self, distance: f64) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, distance),
            Self::Down => Vec2::new(0.0, -distance),
            Self::Left => Vec2::new(distance, 0.0),
            Self::Right => Vec2::new(-distance, 0.0),
        }
    }
}

pub(crate) fn check_period(name: &str, period: f64) -> FlowResult<()> {
    if !period.is_finite() || period <= 0.0 {
        return Err(FlowError::invalid_input(format!(
            "{name} must be finite and > 0, got {period}"
        )));
    }
    Ok(())
}

/// Linear opacity from 0 to 1.
pub fn fade(frame: f64, start: f64, duration: f64, delay: f64) -> FlowResult<f64> {
    progress(frame, start + delay, duration, Ease::Linear)
}

/// Remaining slide offset, easing out from `distance` to zero.
pub fn slide(
    frame: f64,
    start: f64,
    distance: f64,
    duration: f64,
    delay: f64,
    direction: SlideDirection,
) -> FlowResult<Vec2> {
    let p = progress(frame, start + delay, duration, Ease::OutCubic)?;
    Ok(direction.offset(distance * (1.0 - p)))
}

/// Scale from `from` to `to` with a slight overshoot.
pub fn scale(
    frame: f64,
    start: f64,
    from: f64,
    to: f64,
    duration: f64,
    delay: f64,
) -> FlowResult<f64> {
    let p = progress(frame, start + delay, duration, Ease::OutBack)?;
    Ok(lerp(from, to, p))
}

/// Linear rotation in degrees.
pub fn rotate(
    frame: f64,
    start: f64,
    from_degrees: f64,
    to_degrees: f64,
    duration: f64,
    delay: f64,
) -> FlowResult<f64> {
    let p = progress(frame, start + delay, duration, Ease::Linear)?;
    Ok(lerp(from_degrees, to_degrees, p))
}

/// Repeating sine swing between `min` and `max`; `min` before `start`.
pub fn pulse(frame: f64, start: f64, period: f64, min: f64, max: f64) -> FlowResult<f64> {
    check_period("pulse period", period)?;
    let elapsed = frame - start;
    if elapsed < 0.0 {
        return Ok(min);
    }
    let phase = (elapsed % period) / period;
    let sine = (phase * PI * 2.0).sin();
    Ok(min + ((sine + 1.0) / 2.0) * (max - min))
}

/// Stroke-dash offset that draws a path of `path_length` over `duration` frames.
pub fn draw_path(
    frame: f64,
    start: f64,
    path_length: f64,
    duration: f64,
    delay: f64,
) -> FlowResult<f64> {
    let p = progress(frame, start + delay, duration, Ease::Linear)?;
    Ok(path_length * (1.0 - p))
}

/// Counter text from `from` to `to` with a fixed number of decimals.
pub fn count(
    frame: f64,
    start: f64,
    from: f64,
    to: f64,
    duration: f64,
    delay: f64,
    decimals: usize,
) -> FlowResult<String> {
    let p = progress(frame, start + delay, duration, Ease::Linear)?;
    Ok(format!("{:.*}", decimals, lerp(from, to, p)))
}

/// Phase-shifted sine wave for item `index` of `total`; 0 before `start`.
pub fn wave(
    frame: f64,
    start: f64,
    index: usize,
    total: usize,
    period: f64,
    amplitude: f64,
) -> FlowResult<f64> {
    check_period("wave period", period)?;
    let elapsed = frame - start;
    if elapsed < 0.0 || total == 0 {
        return Ok(0.0);
    }
    let phase_offset = (index as f64 / total as f64) * PI * 2.0;
    let wave_progress = (elapsed / period) * PI * 2.0;
    Ok((wave_progress + phase_offset).sin() * amplitude)
}

/// Number of visible characters of a `total_chars` long text.
pub fn typewriter(
    frame: f64,
    start: f64,
    total_chars: usize,
    duration: f64,
    delay: f64,
) -> FlowResult<usize> {
    let p = progress(frame, start + delay, duration, Ease::Linear)?;
    Ok((p * total_chars as f64).floor() as usize)
}

/// Linear reveal of item `index` in a sequence spaced `item_delay` frames apart.
pub fn sequential_reveal(
    frame: f64,
    start: f64,
    index: usize,
    item_delay: f64,
    item_duration: f64,
) -> FlowResult<f64> {
    let item_start = start + index as f64 * item_delay;
    progress(frame, item_start, item_duration, Ease::Linear)
}

/// Damped spring response over a normalized `duration`; 0 before, exactly 1 after.
pub fn spring(
    frame: f64,
    start: f64,
    duration: f64,
    delay: f64,
    tension: f64,
    friction: f64,
) -> FlowResult<f64> {
    check_period("spring duration", duration)?;
    check_period("spring tension", tension)?;
    let elapsed = frame - start - delay;
    if elapsed < 0.0 {
        return Ok(0.0);
    }
    if elapsed >= duration {
        return Ok(1.0);
    }

    let t = elapsed / duration;
    let w0 = tension.sqrt();
    let zeta = friction / (2.0 * tension.sqrt());

    if zeta < 1.0 {
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let b = (zeta * w0) / wd;
        Ok(1.0 - (-zeta * w0 * t).exp() * ((wd * t).cos() + b * (wd * t).sin()))
    } else {
        Ok(1.0 - (-w0 * t).exp() * (1.0 + w0 * t))
    }
}

/// `true` from `start` on, up to and including `end` when given.
pub fn is_visible(frame: f64, start: f64, end: Option<f64>) -> bool {
    match end {
        Some(end) => frame >= start && frame <= end,
        None => frame >= start,
    }
}

/// Repeating `[0, 1)` progress with a `period`-frame cycle; 0 before `start`.
pub fn loop_progress(frame: f64, start: f64, period: f64) -> FlowResult<f64> {
    check_period("loop period", period)?;
    let elapsed = frame - start;
    if elapsed < 0.0 {
        return Ok(0.0);
    }
    Ok((elapsed % period) / period)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/presets.rs"]
mod tests;
