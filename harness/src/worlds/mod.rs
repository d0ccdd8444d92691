//! World implementations for the harness runner.

pub mod route;
pub mod vacuum;
