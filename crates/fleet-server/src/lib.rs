//! Shared library surface for the fleet server and its tests.

pub mod api;
pub mod config;
pub mod seed;
pub mod state;
