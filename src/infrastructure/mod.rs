//! Adapters implementing the domain ports.

pub mod file;
pub mod in_memory;
