//! Avatar emoji catalog, paged for the picker

pub const DEFAULT_EMOJI: &str = "🥷";

pub const EMOJIS_PER_PAGE: usize = 24;

pub const EMOJIS: [&str; 30] = [
    "🥷", "🥶", "👾", "😈", "🤯", "🎃", "🪬", "🤑", "🔥", "💰", //
    "🤖", "🙈", "😍", "🦊", "🏀", "❤️‍🔥", "❤️", "😱", "💋", "🤪", //
    "😈", "👿", "😵‍💫", "😶‍🌫️", "😶", "👻", "💀", "👾", "🤡", "🫀",
];

/// Number of picker pages (at least one).
pub fn page_count() -> usize {
    EMOJIS.len().div_ceil(EMOJIS_PER_PAGE).max(1)
}

/// Emojis on a zero-based page; empty past the last page.
pub fn page(index: usize) -> &'static [&'static str] {
    let start = index.saturating_mul(EMOJIS_PER_PAGE);
    if start >= EMOJIS.len() {
        return &[];
    }
    let end = (start + EMOJIS_PER_PAGE).min(EMOJIS.len());
    &EMOJIS[start..end]
}

pub fn is_known(emoji: &str) -> bool {
    EMOJIS.contains(&emoji)
}
