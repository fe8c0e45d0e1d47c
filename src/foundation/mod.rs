/// Shared value types: frame indices, ranges, colours, placements.
pub mod core;
/// Error taxonomy.
pub mod error;
