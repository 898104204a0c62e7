//! Key namespace for the aggregate mirror.
//!
//! Every cached aggregate lives under one of these prefixes. The rebuild
//! wipes the whole store, so the namespace is assumed to be exclusively
//! owned by this application.

/// Key prefix for per-user reaction totals
const TOTAL_REACTIONS_PREFIX: &str = "total_reactions:";
/// Key prefix for per-livestream reaction totals
const LIVESTREAM_REACTIONS_PREFIX: &str = "livestream_reactions:";
/// Key prefix for per-user tip totals
const TOTAL_TIP_PREFIX: &str = "total_tip:";
/// Key prefix for per-livestream tip totals
const LIVESTREAM_TIP_PREFIX: &str = "livestream_tip:";
/// Key prefix for the per-user dark-theme flag
const THEME_DARK_PREFIX: &str = "theme_dark:";

/// Key holding the total reactions received across all of a user's posts
#[must_use]
pub fn total_reactions_key(user_id: i64) -> String {
    format!("{TOTAL_REACTIONS_PREFIX}{user_id}")
}

/// Key holding the total reactions posted to a livestream
#[must_use]
pub fn livestream_reactions_key(livestream_id: i64) -> String {
    format!("{LIVESTREAM_REACTIONS_PREFIX}{livestream_id}")
}

/// Key holding the summed tip amount for a user
#[must_use]
pub fn total_tips_key(user_id: i64) -> String {
    format!("{TOTAL_TIP_PREFIX}{user_id}")
}

/// Key holding the summed tip amount posted to a livestream
#[must_use]
pub fn livestream_tips_key(livestream_id: i64) -> String {
    format!("{LIVESTREAM_TIP_PREFIX}{livestream_id}")
}

/// Key holding a user's dark-theme flag
#[must_use]
pub fn theme_dark_key(user_id: i64) -> String {
    format!("{THEME_DARK_PREFIX}{user_id}")
}
