//! Domain types for the string count computation.
//!
//! `Dimensions` is the validated `(N, K)` pair, `Report` the computed result,
//! and `ports` the traits that decouple the engine from where its text
//! comes from and where it goes.

pub mod dimensions;
pub mod ports;
pub mod report;
