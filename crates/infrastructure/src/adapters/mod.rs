//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod locationiq_adapter;

pub use locationiq_adapter::LocationIqAdapter;
