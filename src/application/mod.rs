//! Application layer containing the computation and its orchestration.
//!
//! This module defines `count_strings`, the pure summation, and the
//! `StringCountEngine` which reads input through a port, solves it and
//! writes the rendered report through another port.

pub mod engine;
