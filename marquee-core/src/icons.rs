//! Emoji icons for movie cards.

/// Keyword table checked in order against the lower-cased movie name.
const KEYWORD_ICONS: &[(&str, &str)] = &[
    ("prison", "🔒"),
    ("family", "👨‍👩‍👧"),
    ("hero", "🦸"),
    ("mask", "🎭"),
    ("space", "🚀"),
    ("star", "⭐"),
    ("dream", "💭"),
    ("virtual", "💻"),
    ("ring", "💍"),
    ("quest", "🗺️"),
    ("journey", "🧭"),
    ("urban", "🏙️"),
    ("club", "🥊"),
    ("wise", "🎩"),
    ("war", "⚔️"),
];

/// Icon used when no keyword matches.
pub const DEFAULT_ICON: &str = "🎬";

/// Pick an icon for `movie_name`; falls back to [`DEFAULT_ICON`].
pub fn movie_icon(movie_name: &str) -> &'static str {
    let name = movie_name.to_lowercase();
    KEYWORD_ICONS
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}
