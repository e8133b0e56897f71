use crate::{
    animation::ease::Ease,
    animation::interp::Lerp,
    foundation::error::{FlowError, FlowResult},
};

/// Keyframed animation with optional default value.
///
/// Sampling is a pure function of the frame: before the first key the first value holds,
/// after the last key the last value holds.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframes<T> {
    /// Keyframes sorted by `frame`.
    pub keys: Vec<Keyframe<T>>, // sorted by frame
    /// Interpolation mode between adjacent keyframes.
    #[serde(default)]
    pub mode: InterpMode,
    /// Value used when `keys` is empty.
    #[serde(default)]
    pub default: Option<T>,
}

/// One keyframe in a keyframed animation.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    /// Frame of this key, relative to the owning element's start.
    pub frame: f64,
    /// Value at `frame`.
    pub value: T,
    /// Easing function applied toward the next keyframe.
    #[serde(default)]
    pub ease: Ease, // ease applied toward next key
}

/// Interpolation strategy between keyframes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InterpMode {
    /// Hold the previous key's value until the next key.
    Hold,
    /// Interpolate with the previous key's easing.
    #[default]
    Linear,
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    /// Build a linear keyframe track from `(frame, value, ease)` triples.
    pub fn linear(keys: impl IntoIterator<Item = (f64, T, Ease)>) -> Self {
        Self {
            keys: keys
                .into_iter()
                .map(|(frame, value, ease)| Keyframe { frame, value, ease })
                .collect(),
            mode: InterpMode::Linear,
            default: None,
        }
    }

    /// Build a track that always returns `value`.
    pub fn constant(value: T) -> Self {
        Self {
            keys: vec![Keyframe {
                frame: 0.0,
                value,
                ease: Ease::Linear,
            }],
            mode: InterpMode::Hold,
            default: None,
        }
    }

    /// Validate keyframe ordering and default/fallback requirements.
    pub fn validate(&self) -> FlowResult<()> {
        if self.keys.is_empty() && self.default.is_none() {
            return Err(FlowError::invalid_input(
                "Keyframes must have at least one key or a default value",
            ));
        }
        if self.keys.iter().any(|k| !k.frame.is_finite()) {
            return Err(FlowError::invalid_input("Keyframes frames must be finite"));
        }
        if !self.keys.windows(2).all(|w| w[0].frame <= w[1].frame) {
            return Err(FlowError::invalid_input(
                "Keyframes keys must be sorted by frame",
            ));
        }
        Ok(())
    }

    /// Sample the track at a (possibly fractional) frame.
    pub fn sample(&self, frame: f64) -> FlowResult<T> {
        self.validate()?;
        if self.keys.is_empty() {
            return self
                .default
                .clone()
                .ok_or_else(|| FlowError::invalid_input("Keyframes has no keys and no default"));
        }

        let idx = self.keys.partition_point(|k| k.frame <= frame);

        if idx == 0 {
            return Ok(self.keys[0].value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.frame - a.frame;
        if denom <= 0.0 {
            return Ok(a.value.clone());
        }

        let t = (frame - a.frame) / denom;
        let te = a.ease.apply(t);
        match self.mode {
            InterpMode::Hold => Ok(a.value.clone()),
            InterpMode::Linear => Ok(T::lerp(&a.value, &b.value, te)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
