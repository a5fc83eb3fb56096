//! Observability: `tracing` with an `EnvFilter` read from `NULLSAFE_LOG`.

pub mod setup;

pub use setup::init_tracing;
