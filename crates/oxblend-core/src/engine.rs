//! Constant-time 8-bit blend engine
//!
//! [`BlendEngine`] owns a filled [`TableSet`] and answers every blend query
//! with table reads only: no multiply-by-weight, no `sqrt`, no per-call
//! branching or validation. Each channel/alpha operation comes in a
//! multiplicative and a bytewise indexing variant that produce identical
//! results; their only difference is instruction-level cost, which varies by
//! CPU. Benchmark both on the deployment target (`benches/blend.rs`) and call
//! whichever wins.
//!
//! Construction is the single fallible step: the tables are allocated and
//! filled in [`BlendEngine::new`], and released when the engine is dropped.
//! After construction every query is a pure read over immutable state, so a
//! shared reference can be used freely from many threads.

use crate::error::Result;
use crate::index::IndexCodec;
use crate::tables::TableSet;

/// Quantize a real blend fraction in `[0, 1]` to `0..=255`.
#[inline]
fn quantize_fraction(t: f64) -> u8 {
    (t * 255.0).round() as u8
}

/// Table-driven gamma-aware blender for 8-bit samples.
#[derive(Debug)]
pub struct BlendEngine {
    codec: IndexCodec,
    tables: TableSet,
}

impl BlendEngine {
    /// Allocate and fill the lookup tables.
    ///
    /// This is the only operation that can fail; on allocation failure every
    /// table already obtained is released before the error is returned, and
    /// the caller is left to fall back to the formulas in [`crate::formula`]
    /// (or give up). The tables are all-or-nothing by design: there is no
    /// degraded mode and no retry.
    pub fn new() -> Result<Self> {
        Ok(Self {
            codec: IndexCodec::new(),
            tables: TableSet::build()?,
        })
    }

    /// Gamma-aware channel blend, multiplicative indexing.
    ///
    /// `t = 0` yields `a`, `t = 255` yields `b`. Matches
    /// [`crate::formula::blend_channel`] scaled to `0..=255` within one
    /// integer step (two quantization stages: table fill, root truncation).
    #[inline]
    pub fn blend_channel_8bit(&self, a: u8, b: u8, t: u8) -> u8 {
        let ia = IndexCodec::pack_multiplicative(a, t) as usize;
        let ib = IndexCodec::pack_multiplicative(b, t) as usize;
        let sum = self.tables.blends_prime()[ia] + self.tables.blends()[ib];
        self.tables.roots()[sum as usize] as u8
    }

    /// Gamma-aware channel blend, bytewise indexing.
    ///
    /// Identical results to [`Self::blend_channel_8bit`]; trades the index
    /// multiply for native byte placement.
    #[inline]
    pub fn blend_channel_8bit_packed(&self, a: u8, b: u8, t: u8) -> u8 {
        let ia = self.codec.pack_bytewise(a, t) as usize;
        let ib = self.codec.pack_bytewise(b, t) as usize;
        let sum = self.tables.blends_prime()[ia] + self.tables.blends()[ib];
        self.tables.roots()[sum as usize] as u8
    }

    /// Linear alpha blend, multiplicative indexing.
    ///
    /// Alpha is already linear, so the two weighted terms sum directly with
    /// no root lookup.
    #[inline]
    pub fn blend_alpha_8bit(&self, a: u8, b: u8, t: u8) -> u8 {
        let ia = IndexCodec::pack_multiplicative(a, t) as usize;
        let ib = IndexCodec::pack_multiplicative(b, t) as usize;
        (self.tables.factors_prime()[ia] + self.tables.factors()[ib]) as u8
    }

    /// Linear alpha blend, bytewise indexing.
    #[inline]
    pub fn blend_alpha_8bit_packed(&self, a: u8, b: u8, t: u8) -> u8 {
        let ia = self.codec.pack_bytewise(a, t) as usize;
        let ib = self.codec.pack_bytewise(b, t) as usize;
        (self.tables.factors_prime()[ia] + self.tables.factors()[ib]) as u8
    }

    /// Channel blend with a real fraction in `[0, 1]`, multiplicative
    /// indexing.
    ///
    /// Quantizes `t` via `round(t * 255)` and delegates. A fraction outside
    /// `[0, 1]` is a caller contract violation.
    #[inline]
    pub fn blend_channel_8bit_frac(&self, a: u8, b: u8, t: f64) -> u8 {
        self.blend_channel_8bit(a, b, quantize_fraction(t))
    }

    /// Channel blend with a real fraction, bytewise indexing.
    #[inline]
    pub fn blend_channel_8bit_packed_frac(&self, a: u8, b: u8, t: f64) -> u8 {
        self.blend_channel_8bit_packed(a, b, quantize_fraction(t))
    }

    /// Alpha blend with a real fraction, multiplicative indexing.
    #[inline]
    pub fn blend_alpha_8bit_frac(&self, a: u8, b: u8, t: f64) -> u8 {
        self.blend_alpha_8bit(a, b, quantize_fraction(t))
    }

    /// Alpha blend with a real fraction, bytewise indexing.
    #[inline]
    pub fn blend_alpha_8bit_packed_frac(&self, a: u8, b: u8, t: f64) -> u8 {
        self.blend_alpha_8bit_packed(a, b, quantize_fraction(t))
    }

    /// Read-only view of the underlying tables, for callers who want to
    /// inline the lookups themselves.
    #[inline]
    pub fn tables(&self) -> &TableSet {
        &self.tables
    }

    /// The index codec this engine was built with.
    #[inline]
    pub fn codec(&self) -> IndexCodec {
        self.codec
    }

    /// Bytes held by the lookup tables.
    ///
    /// Fixed and independent of sample data; callers can use it to decide
    /// whether the table path is worth having at all on a constrained target.
    pub fn memory_footprint(&self) -> usize {
        self.tables.memory_footprint()
    }
}
