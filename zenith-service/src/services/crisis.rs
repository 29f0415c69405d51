use once_cell::sync::Lazy;
use regex::Regex;

static CRISIS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(suicid|kill myself|end my life|self[- ]?harm|hurt myself|i want to die)")
        .expect("crisis pattern must compile")
});

/// Substring match against self-harm and suicidal-ideation phrasing, any casing.
/// The pattern is case-insensitive, so callers need not lower-case first.
pub fn is_crisis(message: &str) -> bool {
    let detected = CRISIS_PATTERN.is_match(message);
    if detected {
        tracing::warn!("Crisis language detected");
    }
    detected
}
