use crate::{
    animation::ease::Ease,
    foundation::error::{FlowError, FlowResult},
};

/// Named pacing table, in frames at 30 fps.
///
/// Scenes retune pacing by deserializing a partial table; every field falls back to its default.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// ~0.16s.
    pub instant: f64,
    /// 0.5s.
    pub quick: f64,
    /// 1s.
    pub normal: f64,
    /// 2s.
    pub slow: f64,
    /// 3s.
    pub very_slow: f64,
    /// Delay between revealed code lines.
    pub line_delay: f64,
    /// Delay between typed characters.
    pub char_delay: f64,
    /// Short stagger between sibling elements.
    pub stagger_short: f64,
    /// Default stagger between sibling elements.
    pub stagger_normal: f64,
    /// Long stagger between sibling elements.
    pub stagger_long: f64,
    /// Standard ease-out timing curve.
    pub ease_out: Ease,
    /// Standard ease-in/out timing curve.
    pub ease_in_out: Ease,
    /// Standard ease-in timing curve.
    pub ease_in: Ease,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            instant: 5.0,
            quick: 15.0,
            normal: 30.0,
            slow: 60.0,
            very_slow: 90.0,
            line_delay: 10.0,
            char_delay: 1.0,
            stagger_short: 5.0,
            stagger_normal: 10.0,
            stagger_long: 20.0,
            ease_out: Ease::cubic_bezier(0.16, 1.0, 0.3, 1.0),
            ease_in_out: Ease::cubic_bezier(0.65, 0.0, 0.35, 1.0),
            ease_in: Ease::cubic_bezier(0.42, 0.0, 1.0, 1.0),
        }
    }
}

impl TimingConfig {
    /// Reject negative or non-finite durations.
    pub fn validate(&self) -> FlowResult<()> {
        for (name, value) in [
            ("instant", self.instant),
            ("quick", self.quick),
            ("normal", self.normal),
            ("slow", self.slow),
            ("very_slow", self.very_slow),
            ("line_delay", self.line_delay),
            ("char_delay", self.char_delay),
            ("stagger_short", self.stagger_short),
            ("stagger_normal", self.stagger_normal),
            ("stagger_long", self.stagger_long),
        ] {
            check_frames(name, value)?;
        }
        Ok(())
    }
}

pub(crate) fn check_frames(name: &str, value: f64) -> FlowResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(FlowError::validation(format!(
            "timing {name} must be finite and >= 0, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
