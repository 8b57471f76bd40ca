//! Command modules - one file per group of CLI commands

pub mod latest;
pub mod releases;
pub mod versions;
