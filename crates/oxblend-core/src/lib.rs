//! # oxblend - Oxidized Gamma-Aware Blending
//!
//! Perceptually-correct blending of gamma-encoded channel values and linear
//! alpha values, with a precomputed lookup-table engine that answers every
//! 8-bit blend in constant time.
//!
//! ## Why gamma matters
//!
//! Stored channel intensity is the square root of linear light. Mixing two
//! such values directly darkens the result; the correct blend squares back to
//! linear, mixes there, and roots the result:
//!
//! ```text
//! mixed = sqrt((1 - t) * a^2 + t * b^2)       // channels
//! mixed = (1 - t) * a + t * b                 // alpha (already linear)
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use oxblend_core::BlendEngine;
//!
//! // One-time table build (~1.5 MB); fall back to the formula module
//! // if this fails.
//! let engine = BlendEngine::new().unwrap();
//!
//! // 50/50 blend of full and zero intensity lands near sqrt(0.5) * 255.
//! let channel = engine.blend_channel_8bit(255, 0, 128);
//! assert!((179..=181).contains(&channel));
//!
//! // Alpha mixes linearly.
//! let alpha = engine.blend_alpha_8bit(255, 0, 128);
//! assert!((127..=128).contains(&alpha));
//! ```
//!
//! Each operation also comes in a `_packed` variant that builds table indices
//! by native byte placement instead of a multiply, and in `_frac` variants
//! taking a real fraction in `[0, 1]`. The packed and multiplicative variants
//! always agree; benchmark both (`cargo bench`) and use the faster one on
//! your target.
//!
//! The real-valued formulas in [`formula`] stand alone and need no engine.

pub mod engine;
pub mod error;
pub mod formula;
pub mod index;
pub mod tables;

pub use engine::BlendEngine;
pub use error::{Error, Result};
pub use formula::{blend_alpha, blend_channel};
pub use index::{ByteOrder, IndexCodec};
pub use tables::{BLEND_TABLE_LEN, ROOT_TABLE_LEN, TableSet};

/// Version of oxblend
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
