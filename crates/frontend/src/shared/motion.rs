//! Motion tokens shared by every animated surface.

/// Short transitions (hover, header fade)
pub const DURATION_FAST_MS: u32 = 160;
/// Card and list item entrance
pub const DURATION_BASE_MS: u32 = 220;
/// Delay between consecutive items of a list
pub const STAGGER_MS: u32 = 60;
pub const EASE: &str = "cubic-bezier(0.2, 0.9, 0.25, 1)";

/// Entrance delay for the item at `index` of a staggered list
pub fn stagger_delay(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(STAGGER_MS)
}

/// Inline `animation` declaration for a keyframe defined in `layout.css`
pub fn animation_style(keyframes: &str, duration_ms: u32, delay_ms: u32) -> String {
    format!(
        "animation: {} {}ms {} {}ms both;",
        keyframes, duration_ms, EASE, delay_ms
    )
}

/// Inline `transition` declaration for hover feedback
pub fn transition_style(property: &str, duration_ms: u32) -> String {
    format!("transition: {} {}ms {};", property, duration_ms, EASE)
}
