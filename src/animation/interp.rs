use crate::{
    animation::ease::Ease,
    foundation::core::{Point, Vec2},
    foundation::error::{FlowError, FlowResult},
};

/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.lerp(*b, t)
    }
}

/// Behavior of [`interpolate`] outside the declared input range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Extrapolate {
    /// Hold the first/last output value.
    #[default]
    Clamp,
    /// Continue the outermost segment linearly (eased by the same curve).
    Extend,
    /// Return the input frame unchanged.
    Identity,
}

/// Options for [`interpolate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterpolateOptions {
    /// Behavior before the first breakpoint.
    #[serde(default)]
    pub extrapolate_left: Extrapolate,
    /// Behavior after the last breakpoint.
    #[serde(default)]
    pub extrapolate_right: Extrapolate,
    /// Curve applied to normalized segment progress.
    #[serde(default)]
    pub easing: Option<Ease>,
}

impl InterpolateOptions {
    /// Clamped on both sides with the given easing curve.
    pub fn eased(ease: Ease) -> Self {
        Self {
            easing: Some(ease),
            ..Self::default()
        }
    }

    /// Same extrapolation on both sides.
    pub fn extrapolate(mut self, mode: Extrapolate) -> Self {
        self.extrapolate_left = mode;
        self.extrapolate_right = mode;
        self
    }
}

/// Piecewise map of `frame` through `input_range` onto `output_range`.
///
/// `input_range` must hold at least two finite, non-decreasing breakpoints and match
/// `output_range` in length. The containing segment is located, its normalized progress is
/// passed through `options.easing`, and the result is mapped onto the matching output segment.
/// A zero-width segment acts as a step to the later output.
pub fn interpolate(
    frame: f64,
    input_range: &[f64],
    output_range: &[f64],
    options: InterpolateOptions,
) -> FlowResult<f64> {
    validate_ranges(input_range, output_range)?;
    if frame.is_nan() {
        return Err(FlowError::invalid_input("interpolate frame must not be NaN"));
    }

    let last = input_range.len() - 1;
    if frame < input_range[0] {
        match options.extrapolate_left {
            Extrapolate::Clamp => return Ok(output_range[0]),
            Extrapolate::Identity => return Ok(frame),
            Extrapolate::Extend => {}
        }
    }
    if frame > input_range[last] {
        match options.extrapolate_right {
            Extrapolate::Clamp => return Ok(output_range[last]),
            Extrapolate::Identity => return Ok(frame),
            Extrapolate::Extend => {}
        }
    }

    // Index of the segment [seg, seg + 1]; frames outside fall into the outermost segments.
    let seg = input_range[1..last]
        .partition_point(|&b| b <= frame)
        .min(last - 1);

    let (in_lo, in_hi) = (input_range[seg], input_range[seg + 1]);
    let (out_lo, out_hi) = (output_range[seg], output_range[seg + 1]);
    let width = in_hi - in_lo;
    if width == 0.0 {
        return Ok(if frame < in_lo { out_lo } else { out_hi });
    }

    let t = (frame - in_lo) / width;
    let te = options.easing.map_or(t, |ease| ease.apply(t));
    Ok(out_lo + (out_hi - out_lo) * te)
}

fn validate_ranges(input_range: &[f64], output_range: &[f64]) -> FlowResult<()> {
    if input_range.len() < 2 {
        return Err(FlowError::invalid_input(format!(
            "interpolate input range needs at least 2 breakpoints, got {}",
            input_range.len()
        )));
    }
    if input_range.len() != output_range.len() {
        return Err(FlowError::invalid_input(format!(
            "interpolate input range has {} breakpoints but output range has {}",
            input_range.len(),
            output_range.len()
        )));
    }
    if let Some(bad) = input_range.iter().chain(output_range).find(|v| !v.is_finite()) {
        return Err(FlowError::invalid_input(format!(
            "interpolate ranges must be finite, found {bad}"
        )));
    }
    if let Some(i) = input_range.windows(2).position(|w| w[0] > w[1]) {
        return Err(FlowError::invalid_input(format!(
            "interpolate input range must be non-decreasing ({} > {} at index {})",
            input_range[i],
            input_range[i + 1],
            i
        )));
    }
    Ok(())
}

/// Eased `[0, 1]` progress of a `duration`-frame window starting at `start`.
///
/// A zero duration is a step at `start`. Negative durations are rejected.
pub fn progress(frame: f64, start: f64, duration: f64, ease: Ease) -> FlowResult<f64> {
    if duration.is_nan() || duration < 0.0 {
        return Err(FlowError::invalid_input(format!(
            "animation duration must be >= 0, got {duration}"
        )));
    }
    interpolate(
        frame,
        &[start, start + duration],
        &[0.0, 1.0],
        InterpolateOptions::eased(ease),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
