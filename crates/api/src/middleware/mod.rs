//! Request middleware.
//!
//! - [`latency::simulate_latency`] -- Delays every request by the configured amount.

pub mod latency;
