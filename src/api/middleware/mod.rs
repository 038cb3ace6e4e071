//! HTTP middleware.
//!
//! `audit` assigns a request id and logs every request with its status
//! and latency.

pub mod audit;
