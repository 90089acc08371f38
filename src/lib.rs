//! Product Cart Library
//!
//! This library provides a read-only product catalog and a concurrently
//! mutated shopping cart, exposed over a JSON-RPC query/mutation endpoint
//! and REST routes.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod error;
pub mod rpc;

// Infrastructure
pub mod config;
pub mod router;
pub mod telemetry;
