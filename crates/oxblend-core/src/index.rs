//! Composite table index construction
//!
//! The lookup tables in [`crate::tables`] are flat 65536-entry arrays indexed
//! by a `(sample, blend)` pair packed into one `u16`. Two equivalent packings
//! exist:
//!
//! - **multiplicative**: `blend * 256 + sample`. Pure arithmetic, identical
//!   on every platform.
//! - **bytewise**: place the two bytes directly in their native memory
//!   positions and read the `u16` back, trading the multiply for a one-time
//!   byte-order probe. On some CPUs this is cheaper than the multiply;
//!   benchmark both on the deployment target.
//!
//! The original trick was a `union { u16; u8[2] }`; that aliasing is
//! re-expressed here as a safe [`bytemuck::cast`] over `[u8; 2]`. Byte
//! placement is chosen at construction so that both packings always yield the
//! same numeric index, which also guarantees that a table filled through one
//! codec variant can be read through the other.

/// Host byte order, as observed by the runtime probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Low-order byte at the lower address
    LittleEndian,
    /// High-order byte at the lower address
    BigEndian,
}

/// Packs a `(sample, blend)` pair into a composite table index.
#[derive(Debug, Clone, Copy)]
pub struct IndexCodec {
    byte_order: ByteOrder,
}

impl IndexCodec {
    /// Create a codec, probing the host byte order once.
    ///
    /// The probe writes `0` then `1` into adjacent byte positions of a 16-bit
    /// value and observes the integer that results: `1` means the first byte
    /// landed in the high-order position (big-endian).
    pub fn new() -> Self {
        let probe: u16 = bytemuck::cast([0u8, 1u8]);
        let byte_order = if probe == 1 {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        };
        let codec = Self { byte_order };
        debug_assert!(
            codec.bytewise_matches_multiplicative(),
            "bytewise index packing disagrees with multiplicative packing"
        );
        codec
    }

    /// The byte order the probe observed.
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Arithmetic composite index: `blend * 256 + sample`.
    ///
    /// Platform-independent; this is the packing [`crate::tables::TableSet`]
    /// is filled with.
    #[inline]
    pub fn pack_multiplicative(sample: u8, blend: u8) -> u16 {
        blend as u16 * 256 + sample as u16
    }

    /// Bytewise composite index: native-order byte placement, no multiply.
    ///
    /// Numerically identical to [`Self::pack_multiplicative`] for every
    /// input pair.
    #[inline]
    pub fn pack_bytewise(&self, sample: u8, blend: u8) -> u16 {
        match self.byte_order {
            ByteOrder::LittleEndian => bytemuck::cast([sample, blend]),
            ByteOrder::BigEndian => bytemuck::cast([blend, sample]),
        }
    }

    /// Exhaustive equivalence check of the two packings.
    fn bytewise_matches_multiplicative(&self) -> bool {
        for blend in 0..=255u8 {
            for sample in 0..=255u8 {
                if self.pack_bytewise(sample, blend) != Self::pack_multiplicative(sample, blend) {
                    return false;
                }
            }
        }
        true
    }
}

impl Default for IndexCodec {
    fn default() -> Self {
        Self::new()
    }
}
