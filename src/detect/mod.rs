/// Reading detector output from JSON.
pub mod ingest;
/// Detection value types.
pub mod model;
