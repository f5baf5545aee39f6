pub mod format;
pub mod rank;
pub mod split;

/// Companies named explicitly per bucket; anything beyond this is folded
/// into the "others reporting" count.
pub const MAX_NAMED: usize = 8;

/// Importance scores strictly above this are "high importance" for the
/// ranker's overflow diagnostic.
pub const HIGH_IMPORTANCE: i64 = 4;
