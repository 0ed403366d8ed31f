//! Fleet CLI - command line access to the drone fleet reservation service.
//!
//! The `fleetctl` binary wraps the SDK; argument parsing and dispatch
//! live here so they can be tested without a server.

pub mod cli;

pub use cli::{run, Args, Command};
