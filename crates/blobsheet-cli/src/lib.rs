//! Blobsheet CLI library.
//!
//! This crate holds the command implementations behind the `blobsheet`
//! binary so they can be exercised from tests.

pub mod commands;
