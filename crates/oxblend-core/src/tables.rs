//! Precomputed blend lookup tables
//!
//! Five flat arrays that together reduce a gamma-aware channel blend to two
//! table reads, an addition, and one root-table lookup. An alpha blend needs
//! only two reads and an addition. All transcendental math (the squaring,
//! the per-fraction weighting, the `sqrt`) is amortized into the one-time
//! fill.
//!
//! The squared-blend formula splits into two additively-separable terms,
//!
//! ```text
//! mixed^2 = channelA^2 * (1 - t)  +  channelB^2 * t
//! ```
//!
//! each of which depends on one sample and the fraction only. Tabulating both
//! terms scaled to `0..=65535` means any query sum stays inside the
//! precomputed root table's domain of `0..=2*65535`.

use crate::error::{Error, Result};
use crate::index::IndexCodec;

/// Entries in each `(sample, blend)`-indexed table: one per composite index.
pub const BLEND_TABLE_LEN: usize = 256 * 256;

/// Entries in the root table: every sum of two blend-term entries fits.
///
/// Each addend is bounded by 65535, so `2 * 65535` is the true maximum sum
/// (the original allocated `256 * 256 * 2` here; the extra slack bought
/// nothing and is not replicated).
pub const ROOT_TABLE_LEN: usize = 2 * 65535 + 1;

/// Scale of the squared-channel tables.
const BLEND_SCALE: f64 = 65535.0;

/// Scale of the linear alpha factor tables.
const FACTOR_SCALE: f64 = 255.0;

/// The five precomputed tables.
///
/// Filled exactly once by [`TableSet::fill`] and read-only thereafter; the
/// accessors are part of the public contract so callers can inline the
/// lookups themselves (see [`crate::engine::BlendEngine::tables`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSet {
    /// `round(fc^2 * (1 - fb) * 65535)` at `pack_multiplicative(c, b)`
    blends_prime: Box<[u32]>,
    /// `round(fc^2 * fb * 65535)`
    blends: Box<[u32]>,
    /// `round((1 - fb) * fa * 255)`
    factors_prime: Box<[u32]>,
    /// `round(fb * fa * 255)`
    factors: Box<[u32]>,
    /// `floor(sqrt(s))` for every reachable sum `s`
    roots: Box<[u32]>,
}

/// Allocate one zeroed table, reporting failure instead of aborting.
fn try_alloc(len: usize) -> Result<Box<[u32]>> {
    let mut table = Vec::new();
    table.try_reserve_exact(len).map_err(|_| Error::TableAllocation {
        requested: len * size_of::<u32>(),
    })?;
    table.resize(len, 0);
    Ok(table.into_boxed_slice())
}

impl TableSet {
    /// Allocate all five tables, zeroed and unfilled.
    ///
    /// On any allocation failure the tables already obtained are released
    /// (dropped with the partially built value) and
    /// [`Error::TableAllocation`] is returned; no partial set escapes.
    pub fn allocate() -> Result<Self> {
        Ok(Self {
            blends_prime: try_alloc(BLEND_TABLE_LEN)?,
            blends: try_alloc(BLEND_TABLE_LEN)?,
            factors_prime: try_alloc(BLEND_TABLE_LEN)?,
            factors: try_alloc(BLEND_TABLE_LEN)?,
            roots: try_alloc(ROOT_TABLE_LEN)?,
        })
    }

    /// Allocate and fill in one step.
    pub fn build() -> Result<Self> {
        let mut tables = Self::allocate()?;
        tables.fill();
        Ok(tables)
    }

    /// Compute every table entry from the governing equations.
    ///
    /// Deterministic: re-running over an already-filled set writes the same
    /// bits. All `(sample, blend)`-indexed entries are written through the
    /// multiplicative packing, which the bytewise packing is guaranteed to
    /// agree with (see [`IndexCodec`]).
    pub fn fill(&mut self) {
        for channel in 0..256u32 {
            for blend in 0..256u32 {
                let idx = IndexCodec::pack_multiplicative(channel as u8, blend as u8) as usize;
                let fc = channel as f64 / 255.0;
                let fb = blend as f64 / 255.0;

                self.blends_prime[idx] = (fc * fc * (1.0 - fb) * BLEND_SCALE).round() as u32;
                self.blends[idx] = (fc * fc * fb * BLEND_SCALE).round() as u32;

                self.factors_prime[idx] = ((1.0 - fb) * fc * FACTOR_SCALE).round() as u32;
                self.factors[idx] = (fb * fc * FACTOR_SCALE).round() as u32;
            }
        }
        for (s, root) in self.roots.iter_mut().enumerate() {
            *root = (s as f64).sqrt() as u32;
        }
    }

    /// Squared-channel term weighted by `1 - blend`.
    #[inline]
    pub fn blends_prime(&self) -> &[u32] {
        &self.blends_prime
    }

    /// Squared-channel term weighted by `blend`.
    #[inline]
    pub fn blends(&self) -> &[u32] {
        &self.blends
    }

    /// Linear alpha term weighted by `1 - blend`.
    #[inline]
    pub fn factors_prime(&self) -> &[u32] {
        &self.factors_prime
    }

    /// Linear alpha term weighted by `blend`.
    #[inline]
    pub fn factors(&self) -> &[u32] {
        &self.factors
    }

    /// `floor(sqrt(s))` over the full reachable-sum domain.
    #[inline]
    pub fn roots(&self) -> &[u32] {
        &self.roots
    }

    /// Total bytes held by the five tables.
    pub fn memory_footprint(&self) -> usize {
        (self.blends_prime.len()
            + self.blends.len()
            + self.factors_prime.len()
            + self.factors.len()
            + self.roots.len())
            * size_of::<u32>()
    }
}
