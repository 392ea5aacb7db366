//! The format catalog: one ordinal per supported pixel encoding.
//!
//! Ordinals are a compatibility surface. The enum is append-only and the
//! declaration order below is frozen; callers persist and compare raw
//! ordinal values, so reordering or removing an entry is a breaking change
//! even if every query still answers correctly.
//!
//! Naming follows the storage layout:
//!
//! - **Array formats** (`RgbaFloat32`, `AUnorm8`, ...) list channels in
//!   element order, then the storage class and per-element bit width. Byte
//!   order does not change the channel order.
//! - **Packed formats** (`A8B8G8R8Unorm`, `B5G6R5Unorm`, ...) list channels
//!   from the least significant bits of the little-endian machine word
//!   upward, each with its bit width. For byte-aligned packings this is the
//!   memory byte order.
//! - **Compressed formats** (`RgbaDxt5`, `Etc2Rgb8`, ...) name the channel
//!   set and the compression scheme; their unit is a block, not a texel.
//!
//! An `Srgb`/`Srgb8` suffix (or `Srgb`/`Srgba` channel prefix) marks the
//! non-linearly encoded variants; everything else is linear.

use crate::descriptor::{descriptor_table, FormatDescriptor};
use derive_enum_all_values::AllValues;

/// Number of catalog entries, including the [`Format::None`] sentinel.
///
/// This is the terminal count: `from_index` rejects any ordinal at or past
/// it. Table sizing uses this constant so a new format cannot be added
/// without extending every table (enforced by `validate_tables`).
pub const FORMAT_COUNT: usize = 187;

/// A pixel format identifier.
///
/// `Format` is an opaque, totally ordered handle; all layout knowledge lives
/// in the descriptor table keyed by it. See the [module docs](self) for the
/// naming scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AllValues)]
#[repr(u32)]
#[allow(missing_docs)] // layout is encoded in the variant name itself
pub enum Format {
    /// Sentinel for "no format"; never a valid table key.
    None = 0,

    // Packed 32-bit RGBA orderings, 8 bits per channel.
    A8B8G8R8Unorm,
    R8G8B8A8Unorm,
    B8G8R8A8Unorm,
    A8R8G8B8Unorm,
    X8B8G8R8Unorm,
    R8G8B8X8Unorm,
    B8G8R8X8Unorm,
    X8R8G8B8Unorm,

    // 3-channel byte arrays.
    BgrUnorm8,
    RgbUnorm8,

    // Packed 16-bit color.
    B5G6R5Unorm,
    R5G6B5Unorm,
    B4G4R4A4Unorm,
    A4R4G4B4Unorm,
    A1B5G5R5Unorm,
    B5G5R5A1Unorm,
    A1R5G5B5Unorm,
    L4A4Unorm,
    L8A8Unorm,
    A8L8Unorm,
    L16A16Unorm,
    A16L16Unorm,
    B2G3R3Unorm,

    // Single-channel normalized arrays.
    AUnorm8,
    AUnorm16,
    LUnorm8,
    LUnorm16,
    IUnorm8,
    IUnorm16,

    /// Packed YCbCr macropixel, Y in the high byte.
    Ycbcr,
    /// Packed YCbCr macropixel, Y in the low byte.
    YcbcrRev,

    RUnorm8,
    R8G8Unorm,
    G8R8Unorm,
    RUnorm16,
    R16G16Unorm,
    G16R16Unorm,
    B10G10R10A2Unorm,

    // Packed depth/stencil. Both byte orderings exist in hardware and both
    // are distinct catalog entries; neither is an alias of the other.
    S8UintZ24Unorm,
    Z24UnormS8Uint,
    ZUnorm16,
    Z24UnormX8Uint,
    X8Z24Unorm,
    ZUnorm32,
    SUint8,

    // 8-bit/channel sRGB.
    BgrSrgb8,
    A8B8G8R8Srgb,
    B8G8R8A8Srgb,
    LSrgb8,
    L8A8Srgb,
    SrgbDxt1,
    SrgbaDxt1,
    SrgbaDxt3,
    SrgbaDxt5,

    // Linear compressed color.
    RgbFxt1,
    RgbaFxt1,
    RgbDxt1,
    RgbaDxt1,
    RgbaDxt3,
    RgbaDxt5,

    // Floating point arrays.
    RgbaFloat32,
    RgbaFloat16,
    RgbFloat32,
    RgbFloat16,
    AFloat32,
    AFloat16,
    LFloat32,
    LFloat16,
    LaFloat32,
    LaFloat16,
    IFloat32,
    IFloat16,
    RFloat32,
    RFloat16,
    RgFloat32,
    RgFloat16,

    // Non-normalized signed/unsigned integer arrays.
    AUint8,
    AUint16,
    AUint32,
    ASint8,
    ASint16,
    ASint32,
    IUint8,
    IUint16,
    IUint32,
    ISint8,
    ISint16,
    ISint32,
    LUint8,
    LUint16,
    LUint32,
    LSint8,
    LSint16,
    LSint32,
    LaUint8,
    LaUint16,
    LaUint32,
    LaSint8,
    LaSint16,
    LaSint32,
    RSint8,
    RgSint8,
    RgbSint8,
    RgbaSint8,
    RSint16,
    RgSint16,
    RgbSint16,
    RgbaSint16,
    RSint32,
    RgSint32,
    RgbSint32,
    RgbaSint32,
    RUint8,
    RgUint8,
    RgbUint8,
    RgbaUint8,
    RUint16,
    RgUint16,
    RgbUint16,
    RgbaUint16,
    RUint32,
    RgUint32,
    RgbUint32,
    RgbaUint32,

    /// Packed signed delta-chrominance pairs, DU then DV.
    Dudv8,

    // Signed normalized.
    RSnorm8,
    R8G8Snorm,
    X8B8G8R8Snorm,
    A8B8G8R8Snorm,
    R8G8B8A8Snorm,
    RSnorm16,
    R16G16Snorm,
    RgbSnorm16,
    RgbaSnorm16,
    RgbaUnorm16,

    // Red/green block compression.
    RRgtc1Unorm,
    RRgtc1Snorm,
    RgRgtc2Unorm,
    RgRgtc2Snorm,

    // Luminance block compression.
    LLatc1Unorm,
    LLatc1Snorm,
    LaLatc2Unorm,
    LaLatc2Snorm,

    // ETC1/ETC2/EAC.
    Etc1Rgb8,
    Etc2Rgb8,
    Etc2Srgb8,
    Etc2Rgba8Eac,
    Etc2Srgb8Alpha8Eac,
    Etc2R11Eac,
    Etc2Rg11Eac,
    Etc2SignedR11Eac,
    Etc2SignedRg11Eac,
    Etc2Rgb8PunchthroughAlpha1,
    Etc2Srgb8PunchthroughAlpha1,

    ASnorm8,
    LSnorm8,
    L8A8Snorm,
    ISnorm8,
    ASnorm16,
    LSnorm16,
    LaSnorm16,
    ISnorm16,

    /// Packed 9/9/9 mantissas with a 5-bit shared exponent.
    R9G9B9E5Float,
    /// Packed small floats: 11-bit R and G, 10-bit B, no sign bits.
    R11G11B10Float,

    ZFloat32,
    /// Packed 64-bit: 32-bit float depth, 8-bit stencil, 24 padding bits.
    Z32FloatS8X24Uint,

    B10G10R10A2Uint,
    R10G10B10A2Uint,

    B4G4R4X4Unorm,
    B5G5R5X1Unorm,
    R8G8B8X8Snorm,
    R8G8B8X8Srgb,

    // Byte arrays with a padding tail element.
    RgbxUint8,
    RgbxSint8,

    B10G10R10X2Unorm,

    RgbxUnorm16,
    RgbxSnorm16,
    RgbxFloat16,
    RgbxUint16,
    RgbxSint16,
    RgbxFloat32,
    RgbxUint32,
    RgbxSint32,

    R10G10B10A2Unorm,
    G8R8Snorm,
    G16R16Snorm,
}

impl Format {
    /// Number of catalog entries, including the [`Format::None`] sentinel.
    pub const COUNT: usize = FORMAT_COUNT;

    /// Looks up a format by raw ordinal.
    ///
    /// Returns [`Format::None`] wrapped for ordinal 0 and `None` for any
    /// ordinal at or past [`Format::COUNT`]. This is the only supported way
    /// to turn persisted identifier values back into handles.
    pub fn from_index(index: u32) -> Option<Format> {
        Self::all_values().get(index as usize).copied()
    }

    /// The canonical diagnostic name, e.g. `"A8B8G8R8_UNORM"`.
    ///
    /// [`Format::None`] reports the sentinel name `"NONE"`.
    pub fn name(self) -> &'static str {
        descriptor_table()[self as usize].name
    }

    /// The descriptor record for this format.
    ///
    /// # Panics
    ///
    /// Panics for [`Format::None`]: the sentinel carries no layout and a
    /// zeroed descriptor would silently corrupt downstream size math.
    #[inline]
    pub fn descriptor(self) -> &'static FormatDescriptor {
        assert!(
            self != Format::None,
            "Format::None has no descriptor; caller passed the sentinel"
        );
        &descriptor_table()[self as usize]
    }

    /// Fallible descriptor lookup for untrusted ordinals.
    pub fn try_descriptor(self) -> Result<&'static FormatDescriptor, crate::FormatError> {
        if self == Format::None {
            return Err(crate::FormatError::InvalidFormat(self as u32));
        }
        Ok(&descriptor_table()[self as usize])
    }
}

impl core::fmt::Display for Format {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_matches_catalog() {
        assert_eq!(Format::all_values().len(), FORMAT_COUNT);
    }

    #[test]
    fn ordinals_are_dense_and_stable() {
        for (i, f) in Format::all_values().iter().enumerate() {
            assert_eq!(*f as usize, i);
            assert_eq!(Format::from_index(i as u32), Some(*f));
        }
        assert_eq!(Format::from_index(FORMAT_COUNT as u32), None);
        assert_eq!(Format::from_index(u32::MAX), None);
    }

    #[test]
    fn spot_check_frozen_ordinals() {
        // These raw values are persisted by callers; they must never move.
        assert_eq!(Format::None as u32, 0);
        assert_eq!(Format::A8B8G8R8Unorm as u32, 1);
        assert_eq!(Format::Ycbcr as u32, 30);
        assert_eq!(Format::SUint8 as u32, 45);
        assert_eq!(Format::RgbDxt1 as u32, 57);
        assert_eq!(Format::Dudv8 as u32, 125);
        assert_eq!(Format::Etc1Rgb8 as u32, 144);
        assert_eq!(Format::R9G9B9E5Float as u32, 163);
        assert_eq!(Format::G16R16Snorm as u32, 186);
    }

    #[test]
    fn none_reports_sentinel_name() {
        assert_eq!(Format::None.name(), "NONE");
    }

    #[test]
    #[should_panic(expected = "sentinel")]
    fn descriptor_of_none_panics() {
        let _ = Format::None.descriptor();
    }

    #[test]
    fn try_descriptor_rejects_none() {
        assert_eq!(
            Format::None.try_descriptor().unwrap_err(),
            crate::FormatError::InvalidFormat(0)
        );
        assert!(Format::RgbaFloat32.try_descriptor().is_ok());
    }
}
