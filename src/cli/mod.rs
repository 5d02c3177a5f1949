//! Command implementations for the `depdag` binary.

pub mod commands;
