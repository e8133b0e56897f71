//! Text splitting and staggered text-reveal helpers.

use crate::{
    animation::ease::Ease,
    animation::interp::progress,
    animation::presets::{SlideDirection, check_period},
    foundation::core::Vec2,
    foundation::error::FlowResult,
    foundation::math::lerp,
};

/// Split into single characters.
pub fn split_chars(text: &str) -> Vec<&str> {
    text.char_indices()
        .map(|(i, c)| &text[i..i + c.len_utf8()])
        .collect()
}

/// Split into alternating word and whitespace runs, so joining the parts restores `text`.
pub fn split_words(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut run_start = 0;
    let mut in_space: Option<bool> = None;
    for (i, c) in text.char_indices() {
        let space = c.is_whitespace();
        if in_space.is_some_and(|prev| prev != space) {
            parts.push(&text[run_start..i]);
            run_start = i;
        }
        in_space = Some(space);
    }
    if run_start < text.len() {
        parts.push(&text[run_start..]);
    }
    parts
}

/// Split on `\n`.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Opacity of element `index` in a staggered reveal.
pub fn staggered_opacity(
    frame: f64,
    start: f64,
    index: usize,
    stagger: f64,
    duration: f64,
) -> FlowResult<f64> {
    progress(frame, start + index as f64 * stagger, duration, Ease::Linear)
}

/// Blur radius of element `index`, from `max_blur` down to zero.
pub fn staggered_blur(
    frame: f64,
    start: f64,
    index: usize,
    stagger: f64,
    duration: f64,
    max_blur: f64,
) -> FlowResult<f64> {
    let p = progress(frame, start + index as f64 * stagger, duration, Ease::Linear)?;
    Ok(lerp(max_blur, 0.0, p))
}

/// Remaining slide offset of element `index`.
pub fn staggered_slide(
    frame: f64,
    start: f64,
    index: usize,
    stagger: f64,
    duration: f64,
    distance: f64,
    direction: SlideDirection,
) -> FlowResult<Vec2> {
    let p = progress(frame, start + index as f64 * stagger, duration, Ease::Linear)?;
    Ok(direction.offset(distance * (1.0 - p)))
}

/// Frames from the first element's start to the last element's end.
pub fn staggered_duration(count: usize, stagger: f64, element_duration: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (count - 1) as f64 * stagger + element_duration
}

/// Visible characters when typing at `chars_per_frame`, clamped to `[0, total_chars]`.
pub fn typewriter_chars(frame: f64, start: f64, total_chars: usize, chars_per_frame: f64) -> usize {
    let typed = ((frame - start) * chars_per_frame).floor();
    if typed.is_nan() || typed <= 0.0 {
        return 0;
    }
    (typed as usize).min(total_chars)
}

/// Blinking cursor state: visible for `interval` frames, hidden for the next `interval`.
pub fn cursor_visible(frame: f64, interval: f64) -> FlowResult<bool> {
    check_period("cursor blink interval", interval)?;
    Ok((frame / interval).floor().rem_euclid(2.0) == 0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/text.rs"]
mod tests;
