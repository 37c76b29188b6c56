//! Property-based tests for the calculator core.

mod gravity;
mod recipe;
