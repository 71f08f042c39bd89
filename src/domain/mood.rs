//! Daylio mood labels and their Year in Pixels codes

/// Exact-match Daylio labels and their 1-5 codes (higher = better).
///
/// The trailing spaces on `"sad "` and `"amazing "` are part of the keys:
/// that is how the labels appear in the export column.
pub const MOOD_CODES: [(&str, &str); 5] = [
    ("amazing ", "5"),
    ("happy", "4"),
    ("average", "3"),
    ("sad ", "2"),
    ("horrible", "1"),
];

/// Look up the numeric code for a mood label.
///
/// Returns None unless `label` matches one of the keys byte for byte.
pub fn mood_code(label: &str) -> Option<&'static str> {
    MOOD_CODES
        .iter()
        .find(|(key, _)| *key == label)
        .map(|(_, code)| *code)
}

/// Replace a known label with its code; anything else is returned unchanged.
pub fn normalize_mood(label: &str) -> String {
    match mood_code(label) {
        Some(code) => code.to_string(),
        None => label.to_string(),
    }
}
