//! Frozen menu orderings of the v0 parameter schema.
//!
//! v0 payloads recorded positions into these lists. The lists must never be
//! reordered, deduplicated or edited, or stored payloads silently change
//! meaning. Append-only at most.

/// v0 `sumlevel` menu.
pub const SUMLEVEL_MENU: [&str; 4] = ["all_states", "counties", "places", "metro_areas"];

/// v0 `topic` menu: source table ids, lowercased during migration.
pub const TOPIC_MENU: [&str; 20] = [
    "B01001", "B01001", "B03002", "B19001", "B17001", "B08006", "B11002", "B12001", "B13016",
    "B25002", "B25003", "B25024", "B25026", "B25075", "B07003", "B15002", "B16007", "B16007",
    "B05006", "B21002",
];

/// v0 state menu shared by `states-for-counties`, `states-for-places` and
/// `states-for-metro-areas`.
pub const STATE_MENU: [&str; 56] = [
    "al", "ak", "az", "ar", "ca", "co", "ct", "de", "dc", "fl", "ga", "hi", "id", "il", "in",
    "ia", "ks", "ky", "la", "me", "md", "ma", "mi", "mn", "ms", "mo", "mt", "ne", "nv", "nh",
    "nj", "nm", "ny", "nc", "nd", "oh", "ok", "or", "pa", "ri", "sc", "sd", "tn", "tx", "ut",
    "vt", "va", "wa", "wv", "wi", "wy", "as", "gu", "mp", "pr", "vi",
];
