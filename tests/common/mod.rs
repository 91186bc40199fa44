//! Shared utilities for neuromancer integration tests
//!
//! Every scenario runs against real git repositories in temporary directories. Remotes
//! are local bare repositories, so pushes never leave the machine.

pub mod assertions;
pub mod fixtures;
pub mod repository;
