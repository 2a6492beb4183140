//! # blend-tests
//!
//! Exhaustive property and parity testing for oxblend.
//!
//! This crate provides:
//! - Reference computations scaled to the 8-bit domain
//! - Error statistics over full-domain scans
//! - `[[test]]` targets that sweep all 256^3 input triples (rayon-parallel)
//!
//! ## Test Categories
//!
//! 1. **Codec equivalence**: multiplicative vs bytewise indexing
//! 2. **Reference parity**: table results vs the real-valued formulas
//! 3. **Lifecycle**: build idempotence, footprint, drop behavior

pub mod reference;

pub use reference::{BlendErrorStats, reference_alpha_8bit, reference_channel_8bit};
