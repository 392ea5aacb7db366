//! Inter-format relationships and legacy transfer descriptions.
//!
//! Three families of queries live here:
//!
//! - sRGB formats resolve to their linear twins ([`Format::srgb_to_linear`]);
//! - compressed formats resolve to an uncompressed staging format
//!   ([`Format::uncompressed_equivalent`]);
//! - storage layouts are compared against legacy client-memory transfer
//!   descriptions ([`Format::matches_transfer`],
//!   [`Format::transfer_type_and_comps`]).
//!
//! Transfer descriptions are layout-only: a [`TransferFormat`] names the
//! channel order of client memory and a [`TransferType`] names the element
//! packing, and a format matches exactly when a straight memcpy of such a
//! stream reproduces its storage bytes on a little-endian host. Intensity
//! formats and formats with padding or reversed in-word channel pairs
//! (`G8R8_UNORM`, `A8L8_UNORM`, ...) have no client-memory counterpart and
//! never match.

use crate::format::Format;

/// Channel order of one client-memory pixel stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferFormat {
    /// Red, green, blue, alpha.
    Rgba,
    /// Blue, green, red, alpha.
    Bgra,
    /// Alpha, blue, green, red.
    Abgr,
    /// Red, green, blue.
    Rgb,
    /// Blue, green, red.
    Bgr,
    /// Red, green.
    Rg,
    /// Red only.
    Red,
    /// Luminance only.
    Luminance,
    /// Luminance, alpha.
    LuminanceAlpha,
    /// Alpha only.
    Alpha,
    /// Depth only.
    Depth,
    /// Stencil index only.
    Stencil,
    /// Depth and stencil interleaved.
    DepthStencil,
    /// Packed YCbCr macropixels.
    Ycbcr,
    /// Delta-chrominance pairs.
    DuDv,
}

/// Element packing of one client-memory pixel stream.
///
/// The plain variants are per-channel element arrays; the suffixed variants
/// pack all channels of one pixel into a single machine word, listing the
/// per-channel bit counts from the most significant bits down. A `Rev`
/// variant reverses the channel order within the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)] // the packing is encoded in the variant name itself
pub enum TransferType {
    UnsignedByte,
    Byte,
    UnsignedShort,
    Short,
    UnsignedInt,
    Int,
    HalfFloat,
    Float,
    UnsignedByte332,
    UnsignedShort565,
    UnsignedShort565Rev,
    UnsignedShort4444,
    UnsignedShort4444Rev,
    UnsignedShort5551,
    UnsignedShort1555Rev,
    UnsignedShort88,
    UnsignedShort88Rev,
    UnsignedInt8888,
    UnsignedInt8888Rev,
    UnsignedInt2101010Rev,
    UnsignedInt248,
    UnsignedInt5999Rev,
    UnsignedInt10F11F11FRev,
    /// One 32-bit float, then one 32-bit word holding stencil in its low
    /// byte. Spans two words, so byte swapping always breaks it.
    Float32UnsignedInt248Rev,
}

impl TransferType {
    /// Byte width of the machine element the stream is addressed in.
    pub const fn element_bytes(self) -> u32 {
        match self {
            Self::UnsignedByte | Self::Byte | Self::UnsignedByte332 => 1,
            Self::UnsignedShort
            | Self::Short
            | Self::HalfFloat
            | Self::UnsignedShort565
            | Self::UnsignedShort565Rev
            | Self::UnsignedShort4444
            | Self::UnsignedShort4444Rev
            | Self::UnsignedShort5551
            | Self::UnsignedShort1555Rev
            | Self::UnsignedShort88
            | Self::UnsignedShort88Rev => 2,
            Self::UnsignedInt
            | Self::Int
            | Self::Float
            | Self::UnsignedInt8888
            | Self::UnsignedInt8888Rev
            | Self::UnsignedInt2101010Rev
            | Self::UnsignedInt248
            | Self::UnsignedInt5999Rev
            | Self::UnsignedInt10F11F11FRev => 4,
            Self::Float32UnsignedInt248Rev => 8,
        }
    }
}

impl Format {
    /// The linear twin of an sRGB-encoded format.
    ///
    /// Total: formats that are already linear (or have no linear twin)
    /// return themselves, so decode paths can call this unconditionally.
    pub fn srgb_to_linear(self) -> Format {
        match self {
            Format::BgrSrgb8 => Format::BgrUnorm8,
            Format::A8B8G8R8Srgb => Format::A8B8G8R8Unorm,
            Format::B8G8R8A8Srgb => Format::B8G8R8A8Unorm,
            Format::LSrgb8 => Format::LUnorm8,
            Format::L8A8Srgb => Format::L8A8Unorm,
            Format::R8G8B8X8Srgb => Format::R8G8B8X8Unorm,
            Format::SrgbDxt1 => Format::RgbDxt1,
            Format::SrgbaDxt1 => Format::RgbaDxt1,
            Format::SrgbaDxt3 => Format::RgbaDxt3,
            Format::SrgbaDxt5 => Format::RgbaDxt5,
            Format::Etc2Srgb8 => Format::Etc2Rgb8,
            Format::Etc2Srgb8Alpha8Eac => Format::Etc2Rgba8Eac,
            Format::Etc2Srgb8PunchthroughAlpha1 => Format::Etc2Rgb8PunchthroughAlpha1,
            other => other,
        }
    }

    /// An uncompressed format a decoder can expand this format into.
    ///
    /// Total: uncompressed formats return themselves. The equivalent keeps
    /// the channel set, signedness and color encoding of the source; bit
    /// depths widen to the nearest byte-addressable layout (the 11-bit EAC
    /// channels decode into 16-bit texels).
    pub fn uncompressed_equivalent(self) -> Format {
        match self {
            Format::RgbDxt1 | Format::RgbFxt1 | Format::Etc1Rgb8 | Format::Etc2Rgb8 => {
                Format::BgrUnorm8
            }
            Format::SrgbDxt1 | Format::Etc2Srgb8 => Format::BgrSrgb8,
            Format::RgbaDxt1
            | Format::RgbaDxt3
            | Format::RgbaDxt5
            | Format::RgbaFxt1
            | Format::Etc2Rgba8Eac
            | Format::Etc2Rgb8PunchthroughAlpha1 => Format::A8B8G8R8Unorm,
            Format::SrgbaDxt1
            | Format::SrgbaDxt3
            | Format::SrgbaDxt5
            | Format::Etc2Srgb8Alpha8Eac
            | Format::Etc2Srgb8PunchthroughAlpha1 => Format::A8B8G8R8Srgb,
            Format::RRgtc1Unorm => Format::RUnorm8,
            Format::RRgtc1Snorm => Format::RSnorm8,
            Format::RgRgtc2Unorm => Format::R8G8Unorm,
            Format::RgRgtc2Snorm => Format::R8G8Snorm,
            Format::LLatc1Unorm => Format::LUnorm8,
            Format::LLatc1Snorm => Format::LSnorm8,
            Format::LaLatc2Unorm => Format::L8A8Unorm,
            Format::LaLatc2Snorm => Format::L8A8Snorm,
            Format::Etc2R11Eac => Format::RUnorm16,
            Format::Etc2SignedR11Eac => Format::RSnorm16,
            Format::Etc2Rg11Eac => Format::R16G16Unorm,
            Format::Etc2SignedRg11Eac => Format::R16G16Snorm,
            other => other,
        }
    }

    /// Whether a client-memory stream described by `(transfer_format,
    /// transfer_type, swap_bytes)` is bit-identical to this format's storage
    /// on a little-endian host, i.e. whether an upload may skip conversion
    /// and memcpy.
    ///
    /// Always false for compressed formats. A swapped stream only matches
    /// when the element is a single byte (swapping is then a no-op).
    ///
    /// # Panics
    ///
    /// Panics for [`Format::None`].
    pub fn matches_transfer(
        self,
        transfer_format: TransferFormat,
        transfer_type: TransferType,
        swap_bytes: bool,
    ) -> bool {
        use TransferFormat as F;
        use TransferType as T;

        if self.is_compressed() {
            return false;
        }
        if swap_bytes && transfer_type.element_bytes() > 1 {
            return false;
        }
        let combo = (transfer_format, transfer_type);
        match self {
            // 8888 packings, named by memory byte order.
            Format::A8B8G8R8Unorm | Format::A8B8G8R8Srgb => {
                combo == (F::Rgba, T::UnsignedInt8888) || combo == (F::Abgr, T::UnsignedByte)
            }
            Format::R8G8B8A8Unorm => {
                combo == (F::Rgba, T::UnsignedByte) || combo == (F::Rgba, T::UnsignedInt8888Rev)
            }
            Format::B8G8R8A8Unorm | Format::B8G8R8A8Srgb => {
                combo == (F::Bgra, T::UnsignedByte) || combo == (F::Bgra, T::UnsignedInt8888Rev)
            }
            Format::A8R8G8B8Unorm => combo == (F::Bgra, T::UnsignedInt8888),

            Format::BgrUnorm8 | Format::BgrSrgb8 => combo == (F::Bgr, T::UnsignedByte),
            Format::RgbUnorm8 => combo == (F::Rgb, T::UnsignedByte),

            // 16-bit packings. The word stores the name's first channel in
            // its low bits, so the msb-first transfer packings pair up with
            // the reversed channel order.
            Format::B5G6R5Unorm => {
                combo == (F::Rgb, T::UnsignedShort565) || combo == (F::Bgr, T::UnsignedShort565Rev)
            }
            Format::R5G6B5Unorm => {
                combo == (F::Rgb, T::UnsignedShort565Rev) || combo == (F::Bgr, T::UnsignedShort565)
            }
            Format::B4G4R4A4Unorm => combo == (F::Bgra, T::UnsignedShort4444Rev),
            Format::A4R4G4B4Unorm => combo == (F::Bgra, T::UnsignedShort4444),
            Format::A1B5G5R5Unorm => combo == (F::Rgba, T::UnsignedShort5551),
            Format::B5G5R5A1Unorm => combo == (F::Bgra, T::UnsignedShort1555Rev),
            Format::A1R5G5B5Unorm => combo == (F::Bgra, T::UnsignedShort5551),

            Format::L8A8Unorm | Format::L8A8Srgb => combo == (F::LuminanceAlpha, T::UnsignedByte),
            Format::L16A16Unorm => combo == (F::LuminanceAlpha, T::UnsignedShort),
            Format::L8A8Snorm => combo == (F::LuminanceAlpha, T::Byte),
            Format::LaSnorm16 => combo == (F::LuminanceAlpha, T::Short),
            Format::B2G3R3Unorm => combo == (F::Rgb, T::UnsignedByte332),

            Format::AUnorm8 => combo == (F::Alpha, T::UnsignedByte),
            Format::AUnorm16 => combo == (F::Alpha, T::UnsignedShort),
            Format::ASnorm8 => combo == (F::Alpha, T::Byte),
            Format::ASnorm16 => combo == (F::Alpha, T::Short),
            Format::LUnorm8 | Format::LSrgb8 => combo == (F::Luminance, T::UnsignedByte),
            Format::LUnorm16 => combo == (F::Luminance, T::UnsignedShort),
            Format::LSnorm8 => combo == (F::Luminance, T::Byte),
            Format::LSnorm16 => combo == (F::Luminance, T::Short),

            Format::Ycbcr => combo == (F::Ycbcr, T::UnsignedShort88),
            Format::YcbcrRev => combo == (F::Ycbcr, T::UnsignedShort88Rev),
            Format::Dudv8 => combo == (F::DuDv, T::Byte),

            Format::RUnorm8 => combo == (F::Red, T::UnsignedByte),
            Format::RUnorm16 => combo == (F::Red, T::UnsignedShort),
            Format::RSnorm8 => combo == (F::Red, T::Byte),
            Format::RSnorm16 => combo == (F::Red, T::Short),
            Format::R8G8Unorm => combo == (F::Rg, T::UnsignedByte),
            Format::R16G16Unorm => combo == (F::Rg, T::UnsignedShort),
            Format::R8G8Snorm => combo == (F::Rg, T::Byte),
            Format::R16G16Snorm => combo == (F::Rg, T::Short),

            Format::B10G10R10A2Unorm | Format::B10G10R10A2Uint => {
                combo == (F::Bgra, T::UnsignedInt2101010Rev)
            }
            Format::R10G10B10A2Unorm | Format::R10G10B10A2Uint => {
                combo == (F::Rgba, T::UnsignedInt2101010Rev)
            }

            // Depth/stencil. Only the stencil-low packing has a client-side
            // packed element; its byte-swapped sibling never matches.
            Format::S8UintZ24Unorm => combo == (F::DepthStencil, T::UnsignedInt248),
            Format::ZUnorm16 => combo == (F::Depth, T::UnsignedShort),
            Format::ZUnorm32 => combo == (F::Depth, T::UnsignedInt),
            Format::ZFloat32 => combo == (F::Depth, T::Float),
            Format::Z32FloatS8X24Uint => {
                combo == (F::DepthStencil, T::Float32UnsignedInt248Rev)
            }
            Format::SUint8 => combo == (F::Stencil, T::UnsignedByte),

            // Float arrays.
            Format::RgbaFloat32 => combo == (F::Rgba, T::Float),
            Format::RgbaFloat16 => combo == (F::Rgba, T::HalfFloat),
            Format::RgbFloat32 => combo == (F::Rgb, T::Float),
            Format::RgbFloat16 => combo == (F::Rgb, T::HalfFloat),
            Format::AFloat32 => combo == (F::Alpha, T::Float),
            Format::AFloat16 => combo == (F::Alpha, T::HalfFloat),
            Format::LFloat32 => combo == (F::Luminance, T::Float),
            Format::LFloat16 => combo == (F::Luminance, T::HalfFloat),
            Format::LaFloat32 => combo == (F::LuminanceAlpha, T::Float),
            Format::LaFloat16 => combo == (F::LuminanceAlpha, T::HalfFloat),
            Format::RFloat32 => combo == (F::Red, T::Float),
            Format::RFloat16 => combo == (F::Red, T::HalfFloat),
            Format::RgFloat32 => combo == (F::Rg, T::Float),
            Format::RgFloat16 => combo == (F::Rg, T::HalfFloat),

            // Integer arrays; the layout is what matters, not the
            // normalized/integer distinction.
            Format::AUint8 => combo == (F::Alpha, T::UnsignedByte),
            Format::AUint16 => combo == (F::Alpha, T::UnsignedShort),
            Format::AUint32 => combo == (F::Alpha, T::UnsignedInt),
            Format::ASint8 => combo == (F::Alpha, T::Byte),
            Format::ASint16 => combo == (F::Alpha, T::Short),
            Format::ASint32 => combo == (F::Alpha, T::Int),
            Format::LUint8 => combo == (F::Luminance, T::UnsignedByte),
            Format::LUint16 => combo == (F::Luminance, T::UnsignedShort),
            Format::LUint32 => combo == (F::Luminance, T::UnsignedInt),
            Format::LSint8 => combo == (F::Luminance, T::Byte),
            Format::LSint16 => combo == (F::Luminance, T::Short),
            Format::LSint32 => combo == (F::Luminance, T::Int),
            Format::LaUint8 => combo == (F::LuminanceAlpha, T::UnsignedByte),
            Format::LaUint16 => combo == (F::LuminanceAlpha, T::UnsignedShort),
            Format::LaUint32 => combo == (F::LuminanceAlpha, T::UnsignedInt),
            Format::LaSint8 => combo == (F::LuminanceAlpha, T::Byte),
            Format::LaSint16 => combo == (F::LuminanceAlpha, T::Short),
            Format::LaSint32 => combo == (F::LuminanceAlpha, T::Int),
            Format::RUint8 => combo == (F::Red, T::UnsignedByte),
            Format::RUint16 => combo == (F::Red, T::UnsignedShort),
            Format::RUint32 => combo == (F::Red, T::UnsignedInt),
            Format::RSint8 => combo == (F::Red, T::Byte),
            Format::RSint16 => combo == (F::Red, T::Short),
            Format::RSint32 => combo == (F::Red, T::Int),
            Format::RgUint8 => combo == (F::Rg, T::UnsignedByte),
            Format::RgUint16 => combo == (F::Rg, T::UnsignedShort),
            Format::RgUint32 => combo == (F::Rg, T::UnsignedInt),
            Format::RgSint8 => combo == (F::Rg, T::Byte),
            Format::RgSint16 => combo == (F::Rg, T::Short),
            Format::RgSint32 => combo == (F::Rg, T::Int),
            Format::RgbUint8 => combo == (F::Rgb, T::UnsignedByte),
            Format::RgbUint16 => combo == (F::Rgb, T::UnsignedShort),
            Format::RgbUint32 => combo == (F::Rgb, T::UnsignedInt),
            Format::RgbSint8 => combo == (F::Rgb, T::Byte),
            Format::RgbSint16 => combo == (F::Rgb, T::Short),
            Format::RgbSint32 => combo == (F::Rgb, T::Int),
            Format::RgbaUint8 => combo == (F::Rgba, T::UnsignedByte),
            Format::RgbaUint16 => combo == (F::Rgba, T::UnsignedShort),
            Format::RgbaUint32 => combo == (F::Rgba, T::UnsignedInt),
            Format::RgbaSint8 => combo == (F::Rgba, T::Byte),
            Format::RgbaSint16 => combo == (F::Rgba, T::Short),
            Format::RgbaSint32 => combo == (F::Rgba, T::Int),

            Format::A8B8G8R8Snorm => combo == (F::Abgr, T::Byte),
            Format::R8G8B8A8Snorm => combo == (F::Rgba, T::Byte),
            Format::RgbSnorm16 => combo == (F::Rgb, T::Short),
            Format::RgbaSnorm16 => combo == (F::Rgba, T::Short),
            Format::RgbaUnorm16 => combo == (F::Rgba, T::UnsignedShort),

            Format::R9G9B9E5Float => combo == (F::Rgb, T::UnsignedInt5999Rev),
            Format::R11G11B10Float => combo == (F::Rgb, T::UnsignedInt10F11F11FRev),

            // Everything left has padding bits, a reversed channel pair, or
            // an intensity composition; no client stream is bit-identical.
            _ => false,
        }
    }

    /// The element type and component count a pixel-transfer path should
    /// stage this format through.
    ///
    /// Sub-byte packings report one packed component per element (`L4A4`),
    /// and compressed formats answer for their [uncompressed
    /// equivalent](Format::uncompressed_equivalent).
    ///
    /// # Panics
    ///
    /// Panics for [`Format::None`].
    pub fn transfer_type_and_comps(self) -> (TransferType, u32) {
        use TransferType as T;

        if self.is_compressed() {
            return self.uncompressed_equivalent().transfer_type_and_comps();
        }
        match self {
            Format::A8B8G8R8Unorm
            | Format::R8G8B8A8Unorm
            | Format::B8G8R8A8Unorm
            | Format::A8R8G8B8Unorm
            | Format::X8B8G8R8Unorm
            | Format::R8G8B8X8Unorm
            | Format::B8G8R8X8Unorm
            | Format::X8R8G8B8Unorm
            | Format::A8B8G8R8Srgb
            | Format::B8G8R8A8Srgb
            | Format::R8G8B8X8Srgb
            | Format::RgbxUint8 => (T::UnsignedByte, 4),
            Format::BgrUnorm8 | Format::RgbUnorm8 | Format::BgrSrgb8 => (T::UnsignedByte, 3),

            Format::B5G6R5Unorm => (T::UnsignedShort565, 3),
            Format::R5G6B5Unorm => (T::UnsignedShort565Rev, 3),
            Format::B4G4R4A4Unorm | Format::B4G4R4X4Unorm => (T::UnsignedShort4444Rev, 4),
            Format::A4R4G4B4Unorm => (T::UnsignedShort4444, 4),
            Format::A1B5G5R5Unorm | Format::A1R5G5B5Unorm => (T::UnsignedShort5551, 4),
            Format::B5G5R5A1Unorm | Format::B5G5R5X1Unorm => (T::UnsignedShort1555Rev, 4),
            Format::B2G3R3Unorm => (T::UnsignedByte332, 3),

            // One packed byte holds both channels.
            Format::L4A4Unorm => (T::UnsignedByte, 1),
            Format::L8A8Unorm | Format::A8L8Unorm | Format::L8A8Srgb => (T::UnsignedByte, 2),
            Format::L16A16Unorm | Format::A16L16Unorm => (T::UnsignedShort, 2),
            Format::L8A8Snorm => (T::Byte, 2),
            Format::LaSnorm16 => (T::Short, 2),

            Format::AUnorm8 | Format::LUnorm8 | Format::IUnorm8 | Format::LSrgb8 => {
                (T::UnsignedByte, 1)
            }
            Format::AUnorm16 | Format::LUnorm16 | Format::IUnorm16 => (T::UnsignedShort, 1),
            Format::ASnorm8 | Format::LSnorm8 | Format::ISnorm8 => (T::Byte, 1),
            Format::ASnorm16 | Format::LSnorm16 | Format::ISnorm16 => (T::Short, 1),

            Format::Ycbcr => (T::UnsignedShort88, 2),
            Format::YcbcrRev => (T::UnsignedShort88Rev, 2),
            Format::Dudv8 => (T::Byte, 2),

            Format::RUnorm8 => (T::UnsignedByte, 1),
            Format::R8G8Unorm | Format::G8R8Unorm => (T::UnsignedByte, 2),
            Format::RUnorm16 => (T::UnsignedShort, 1),
            Format::R16G16Unorm | Format::G16R16Unorm => (T::UnsignedShort, 2),
            Format::RSnorm8 => (T::Byte, 1),
            Format::R8G8Snorm | Format::G8R8Snorm => (T::Byte, 2),
            Format::RSnorm16 => (T::Short, 1),
            Format::R16G16Snorm | Format::G16R16Snorm => (T::Short, 2),
            Format::X8B8G8R8Snorm
            | Format::A8B8G8R8Snorm
            | Format::R8G8B8A8Snorm
            | Format::R8G8B8X8Snorm => (T::Byte, 4),
            Format::RgbSnorm16 => (T::Short, 3),
            Format::RgbaSnorm16 => (T::Short, 4),
            Format::RgbaUnorm16 | Format::RgbxUnorm16 => (T::UnsignedShort, 4),
            Format::RgbxSnorm16 => (T::Short, 4),

            Format::B10G10R10A2Unorm
            | Format::R10G10B10A2Unorm
            | Format::B10G10R10X2Unorm
            | Format::B10G10R10A2Uint
            | Format::R10G10B10A2Uint => (T::UnsignedInt2101010Rev, 4),

            Format::S8UintZ24Unorm | Format::Z24UnormS8Uint => (T::UnsignedInt248, 2),
            Format::ZUnorm16 => (T::UnsignedShort, 1),
            Format::Z24UnormX8Uint | Format::X8Z24Unorm | Format::ZUnorm32 => (T::UnsignedInt, 1),
            Format::SUint8 => (T::UnsignedByte, 1),
            Format::ZFloat32 => (T::Float, 1),
            Format::Z32FloatS8X24Uint => (T::Float32UnsignedInt248Rev, 1),

            Format::RgbaFloat32 | Format::RgbxFloat32 => (T::Float, 4),
            Format::RgbaFloat16 | Format::RgbxFloat16 => (T::HalfFloat, 4),
            Format::RgbFloat32 => (T::Float, 3),
            Format::RgbFloat16 => (T::HalfFloat, 3),
            Format::AFloat32 | Format::LFloat32 | Format::IFloat32 | Format::RFloat32 => {
                (T::Float, 1)
            }
            Format::AFloat16 | Format::LFloat16 | Format::IFloat16 | Format::RFloat16 => {
                (T::HalfFloat, 1)
            }
            Format::LaFloat32 | Format::RgFloat32 => (T::Float, 2),
            Format::LaFloat16 | Format::RgFloat16 => (T::HalfFloat, 2),

            Format::AUint8 | Format::IUint8 | Format::LUint8 | Format::RUint8 => {
                (T::UnsignedByte, 1)
            }
            Format::AUint16 | Format::IUint16 | Format::LUint16 | Format::RUint16 => {
                (T::UnsignedShort, 1)
            }
            Format::AUint32 | Format::IUint32 | Format::LUint32 | Format::RUint32 => {
                (T::UnsignedInt, 1)
            }
            Format::ASint8 | Format::ISint8 | Format::LSint8 | Format::RSint8 => (T::Byte, 1),
            Format::ASint16 | Format::ISint16 | Format::LSint16 | Format::RSint16 => (T::Short, 1),
            Format::ASint32 | Format::ISint32 | Format::LSint32 | Format::RSint32 => (T::Int, 1),
            Format::LaUint8 | Format::RgUint8 => (T::UnsignedByte, 2),
            Format::LaUint16 | Format::RgUint16 => (T::UnsignedShort, 2),
            Format::LaUint32 | Format::RgUint32 => (T::UnsignedInt, 2),
            Format::LaSint8 | Format::RgSint8 => (T::Byte, 2),
            Format::LaSint16 | Format::RgSint16 => (T::Short, 2),
            Format::LaSint32 | Format::RgSint32 => (T::Int, 2),
            Format::RgbUint8 => (T::UnsignedByte, 3),
            Format::RgbUint16 => (T::UnsignedShort, 3),
            Format::RgbUint32 => (T::UnsignedInt, 3),
            Format::RgbSint8 => (T::Byte, 3),
            Format::RgbSint16 => (T::Short, 3),
            Format::RgbSint32 => (T::Int, 3),
            Format::RgbaUint8 => (T::UnsignedByte, 4),
            Format::RgbaUint16 | Format::RgbxUint16 => (T::UnsignedShort, 4),
            Format::RgbaUint32 | Format::RgbxUint32 => (T::UnsignedInt, 4),
            Format::RgbaSint8 | Format::RgbxSint8 => (T::Byte, 4),
            Format::RgbaSint16 | Format::RgbxSint16 => (T::Short, 4),
            Format::RgbaSint32 | Format::RgbxSint32 => (T::Int, 4),

            Format::R9G9B9E5Float => (T::UnsignedInt5999Rev, 3),
            Format::R11G11B10Float => (T::UnsignedInt10F11F11FRev, 3),

            // is_compressed() above already rejected the sentinel by
            // asserting; compressed arms never reach here.
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use rstest::rstest;

    #[test]
    fn srgb_resolution_is_total_and_linear() {
        for f in valid_formats() {
            let linear = f.srgb_to_linear();
            match f.color_encoding() {
                ColorEncoding::NonLinear => {
                    assert_ne!(linear, f, "{f:?} has no linear twin");
                    assert_eq!(linear.color_encoding(), ColorEncoding::Linear, "{f:?}");
                }
                ColorEncoding::Linear => assert_eq!(linear, f, "{f:?}"),
            }
            assert_eq!(linear.srgb_to_linear(), linear, "{f:?} not idempotent");
        }
    }

    #[test]
    fn srgb_twins_keep_channel_widths() {
        for f in valid_formats() {
            let linear = f.srgb_to_linear();
            for role in ChannelRole::all_values() {
                assert_eq!(
                    f.channel_bits(*role),
                    linear.channel_bits(*role),
                    "{f:?} vs {linear:?}"
                );
            }
            assert_eq!(f.block_dimensions(), linear.block_dimensions());
            assert_eq!(f.bytes_per_block(), linear.bytes_per_block());
        }
    }

    #[test]
    fn uncompressed_equivalents_are_uncompressed() {
        for f in valid_formats() {
            let eq = f.uncompressed_equivalent();
            assert!(!eq.is_compressed(), "{f:?} -> {eq:?}");
            assert_eq!(eq.uncompressed_equivalent(), eq, "{f:?} not idempotent");
            if !f.is_compressed() {
                assert_eq!(eq, f, "{f:?}");
            }
        }
    }

    #[test]
    fn uncompressed_equivalents_keep_signedness_and_encoding() {
        for f in valid_formats().filter(|f| f.is_compressed()) {
            let eq = f.uncompressed_equivalent();
            assert_eq!(f.is_signed(), eq.is_signed(), "{f:?} -> {eq:?}");
            assert_eq!(f.color_encoding(), eq.color_encoding(), "{f:?} -> {eq:?}");
            // Alpha in the source needs alpha in the staging format.
            if f.channel_bits(ChannelRole::Alpha) > 0 {
                assert!(eq.channel_bits(ChannelRole::Alpha) > 0, "{f:?} -> {eq:?}");
            }
        }
    }

    #[rstest]
    #[case(Format::RgbDxt1, Format::BgrUnorm8)]
    #[case(Format::SrgbaDxt5, Format::A8B8G8R8Srgb)]
    #[case(Format::RRgtc1Snorm, Format::RSnorm8)]
    #[case(Format::LaLatc2Unorm, Format::L8A8Unorm)]
    #[case(Format::Etc2R11Eac, Format::RUnorm16)]
    #[case(Format::Etc2SignedRg11Eac, Format::R16G16Snorm)]
    fn uncompressed_equivalent_cases(#[case] source: Format, #[case] expected: Format) {
        assert_eq!(source.uncompressed_equivalent(), expected);
    }

    #[rstest]
    #[case(Format::R8G8B8A8Unorm, TransferFormat::Rgba, TransferType::UnsignedByte, true)]
    #[case(Format::R8G8B8A8Unorm, TransferFormat::Rgba, TransferType::UnsignedInt8888Rev, true)]
    #[case(Format::R8G8B8A8Unorm, TransferFormat::Bgra, TransferType::UnsignedByte, false)]
    #[case(Format::A8B8G8R8Unorm, TransferFormat::Rgba, TransferType::UnsignedInt8888, true)]
    #[case(Format::A8B8G8R8Unorm, TransferFormat::Abgr, TransferType::UnsignedByte, true)]
    #[case(Format::A8B8G8R8Unorm, TransferFormat::Rgba, TransferType::UnsignedByte, false)]
    #[case(Format::B8G8R8A8Unorm, TransferFormat::Bgra, TransferType::UnsignedByte, true)]
    #[case(Format::B5G6R5Unorm, TransferFormat::Rgb, TransferType::UnsignedShort565, true)]
    #[case(Format::B5G6R5Unorm, TransferFormat::Rgb, TransferType::UnsignedShort565Rev, false)]
    #[case(Format::S8UintZ24Unorm, TransferFormat::DepthStencil, TransferType::UnsignedInt248, true)]
    #[case(Format::Z24UnormS8Uint, TransferFormat::DepthStencil, TransferType::UnsignedInt248, false)]
    #[case(Format::ZFloat32, TransferFormat::Depth, TransferType::Float, true)]
    #[case(Format::Ycbcr, TransferFormat::Ycbcr, TransferType::UnsignedShort88, true)]
    #[case(Format::YcbcrRev, TransferFormat::Ycbcr, TransferType::UnsignedShort88, false)]
    #[case(Format::R9G9B9E5Float, TransferFormat::Rgb, TransferType::UnsignedInt5999Rev, true)]
    #[case(Format::G8R8Unorm, TransferFormat::Rg, TransferType::UnsignedByte, false)]
    #[case(Format::X8B8G8R8Unorm, TransferFormat::Rgba, TransferType::UnsignedInt8888, false)]
    fn transfer_match_cases(
        #[case] format: Format,
        #[case] tf: TransferFormat,
        #[case] tt: TransferType,
        #[case] expected: bool,
    ) {
        assert_eq!(format.matches_transfer(tf, tt, false), expected);
    }

    #[test]
    fn compressed_formats_never_match_transfers() {
        for f in valid_formats().filter(|f| f.is_compressed()) {
            assert!(!f.matches_transfer(
                TransferFormat::Rgba,
                TransferType::UnsignedByte,
                false
            ));
        }
    }

    #[test]
    fn swapped_multibyte_streams_never_match() {
        assert!(!Format::R8G8B8A8Unorm.matches_transfer(
            TransferFormat::Rgba,
            TransferType::UnsignedInt8888Rev,
            true
        ));
        assert!(!Format::ZUnorm16.matches_transfer(
            TransferFormat::Depth,
            TransferType::UnsignedShort,
            true
        ));
        // Swapping single-byte elements is a no-op.
        assert!(Format::RgbUnorm8.matches_transfer(
            TransferFormat::Rgb,
            TransferType::UnsignedByte,
            true
        ));
    }

    #[test]
    fn every_format_has_a_transfer_description() {
        for f in valid_formats() {
            let (_, comps) = f.transfer_type_and_comps();
            assert!(comps >= 1 && comps <= 4, "{f:?}");
        }
    }

    #[rstest]
    #[case(Format::B8G8R8A8Unorm, TransferType::UnsignedByte, 4)]
    #[case(Format::B5G6R5Unorm, TransferType::UnsignedShort565, 3)]
    #[case(Format::L4A4Unorm, TransferType::UnsignedByte, 1)]
    #[case(Format::Z32FloatS8X24Uint, TransferType::Float32UnsignedInt248Rev, 1)]
    #[case(Format::RgbDxt1, TransferType::UnsignedByte, 3)]
    #[case(Format::RgbxUint16, TransferType::UnsignedShort, 4)]
    #[case(Format::Etc2SignedR11Eac, TransferType::Short, 1)]
    #[case(Format::R9G9B9E5Float, TransferType::UnsignedInt5999Rev, 3)]
    fn transfer_type_and_comps_cases(
        #[case] format: Format,
        #[case] expected_type: TransferType,
        #[case] expected_comps: u32,
    ) {
        assert_eq!(format.transfer_type_and_comps(), (expected_type, expected_comps));
    }
}
