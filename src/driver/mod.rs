/// Run configuration.
pub mod config;
/// The per-tick state machine and run loop.
pub mod session;
/// Parallel tick rendering controls.
pub mod threading;
