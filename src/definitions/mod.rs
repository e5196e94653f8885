//! # Definitions
//!
//! Seed data structures embedded in the binary

pub mod groups;
