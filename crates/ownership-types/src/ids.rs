//! Stable identifiers for built-in filters and profiles.
//!
//! Filter IDs are a dotted namespace: `<what is inspected>.<predicate>`.

// Filters
pub const FILTER_OWNER_IN: &str = "owner.in";
pub const FILTER_CLASS_MATCHES: &str = "class.matches";
pub const FILTER_CLASS_UNOWNED: &str = "class.unowned";
pub const FILTER_METHODS_CROSS_TEAM: &str = "methods.cross_team";
pub const FILTER_DEPS_DEPENDED_ON: &str = "deps.depended_on";

// Profiles
pub const PROFILE_ALL: &str = "all";
pub const PROFILE_CROSS_TEAM: &str = "cross-team";
pub const PROFILE_UNOWNED: &str = "unowned";
