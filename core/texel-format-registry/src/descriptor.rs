//! The descriptor table: one validated, build-time record per catalog entry.
//!
//! Every query in this crate is a read of this table. The table is `static`,
//! immutable, and checked at compile time against the structural invariants
//! (channel bits sum to the element width, block geometry is sane, element
//! sizes stay under [`MAX_ELEMENT_BYTES`]); a wrong row here corrupts size
//! math everywhere downstream, so the invariants fail the build rather than
//! a late assert.

use crate::format::FORMAT_COUNT;
use derive_enum_all_values::AllValues;

/// Upper bound on any single non-compressed texel's byte footprint.
///
/// Also the worst-case size of an intermediate per-texel staging buffer.
/// Compressed formats are exempt; their storage unit is a block.
pub const MAX_ELEMENT_BYTES: u32 = 16;

/// Structural family of a format's storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatLayout {
    /// One storage element per channel, channel order independent of byte
    /// order.
    Array,
    /// All channels packed into a single little-endian machine word.
    Packed,
    /// Block-encoded; the addressable unit is a multi-texel block.
    Compressed,
}

/// How a channel's numeric value is encoded in its bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageClass {
    /// Unsigned integer mapped to [0, 1].
    UnsignedNormalized,
    /// Signed integer mapped to [-1, 1].
    SignedNormalized,
    /// Raw unsigned integer.
    UnsignedInt,
    /// Raw signed integer.
    SignedInt,
    /// IEEE (or packed small) floating point.
    Float,
    /// Unsigned mantissas scaled by one shared exponent field.
    SharedExponentFloat,
    /// Opaque packed encoding (YCbCr macropixels); no per-channel numeric
    /// interpretation.
    PackedSpecial,
}

/// Whether stored color values are linear light or sRGB-encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorEncoding {
    /// Values are proportional to light intensity.
    Linear,
    /// Color channels are sRGB-encoded and need decoding before arithmetic.
    /// Alpha, where present, stays linear.
    NonLinear,
}

/// Logical channel composition, used to pick compatible transfer paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseComposition {
    /// Red, green, blue.
    Rgb,
    /// Red, green, blue, alpha.
    Rgba,
    /// Alpha only.
    Alpha,
    /// Luminance only.
    Luminance,
    /// Luminance and alpha.
    LuminanceAlpha,
    /// Intensity only.
    Intensity,
    /// Red only.
    Red,
    /// Red and green.
    Rg,
    /// Packed luma/chroma macropixels.
    YCbCr,
    /// Delta-chrominance pairs.
    DuDv,
    /// Depth only.
    Depth,
    /// Stencil only.
    Stencil,
    /// Depth and stencil in one element.
    DepthStencil,
}

/// A named logical channel within a texel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum ChannelRole {
    /// Red color channel.
    Red,
    /// Green color channel.
    Green,
    /// Blue color channel.
    Blue,
    /// Alpha channel.
    Alpha,
    /// Luminance (replicated to RGB on sampling).
    Luminance,
    /// Intensity (replicated to RGBA on sampling).
    Intensity,
    /// Depth.
    Depth,
    /// Stencil.
    Stencil,
    /// Shared exponent field scaling the color mantissas.
    SharedExponent,
    /// Chrominance U (Cb) or delta-U.
    ChromaU,
    /// Chrominance V (Cr) or delta-V.
    ChromaV,
    /// Luma (Y).
    Luma,
    /// Unused filler bits; counted in the element width, never a component.
    Padding,
}

/// Fixed layout record for one catalog entry.
///
/// All fields are plain data; the accessors on [`Format`] are thin reads of
/// this struct. For non-compressed formats the block is 1x1 and
/// `bytes_per_block` is the texel size.
///
/// [`Format`]: crate::Format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    /// Canonical diagnostic name.
    pub name: &'static str,
    /// Structural family.
    pub layout: FormatLayout,
    /// Logical channel composition.
    pub base: BaseComposition,
    /// Numeric encoding of the channels.
    pub storage: StorageClass,
    /// Linear vs sRGB-encoded color.
    pub encoding: ColorEncoding,
    /// Red bits (nominal for compressed formats).
    pub red: u8,
    /// Green bits.
    pub green: u8,
    /// Blue bits.
    pub blue: u8,
    /// Alpha bits.
    pub alpha: u8,
    /// Luminance bits.
    pub luminance: u8,
    /// Intensity bits.
    pub intensity: u8,
    /// Depth bits.
    pub depth: u8,
    /// Stencil bits.
    pub stencil: u8,
    /// Shared exponent bits.
    pub exponent: u8,
    /// Chrominance U / delta-U bits.
    pub chroma_u: u8,
    /// Chrominance V / delta-V bits.
    pub chroma_v: u8,
    /// Luma bits.
    pub luma: u8,
    /// Filler bits.
    pub padding: u8,
    /// Block width in texels (1 for non-compressed).
    pub block_width: u8,
    /// Block height in texels (1 for non-compressed).
    pub block_height: u8,
    /// Bytes per block (per texel for non-compressed).
    pub bytes_per_block: u8,
}

impl FormatDescriptor {
    const fn new(
        name: &'static str,
        layout: FormatLayout,
        base: BaseComposition,
        storage: StorageClass,
        bytes_per_block: u8,
    ) -> Self {
        Self {
            name,
            layout,
            base,
            storage,
            encoding: ColorEncoding::Linear,
            red: 0,
            green: 0,
            blue: 0,
            alpha: 0,
            luminance: 0,
            intensity: 0,
            depth: 0,
            stencil: 0,
            exponent: 0,
            chroma_u: 0,
            chroma_v: 0,
            luma: 0,
            padding: 0,
            block_width: 1,
            block_height: 1,
            bytes_per_block,
        }
    }

    const fn rgba(mut self, r: u8, g: u8, b: u8, a: u8) -> Self {
        self.red = r;
        self.green = g;
        self.blue = b;
        self.alpha = a;
        self
    }

    const fn la(mut self, l: u8, a: u8) -> Self {
        self.luminance = l;
        self.alpha = a;
        self
    }

    const fn i(mut self, i: u8) -> Self {
        self.intensity = i;
        self
    }

    const fn zs(mut self, z: u8, s: u8) -> Self {
        self.depth = z;
        self.stencil = s;
        self
    }

    const fn e(mut self, e: u8) -> Self {
        self.exponent = e;
        self
    }

    const fn yuv(mut self, y: u8, c: u8) -> Self {
        self.luma = y;
        self.chroma_u = c;
        self
    }

    const fn duv(mut self, du: u8, dv: u8) -> Self {
        self.chroma_u = du;
        self.chroma_v = dv;
        self
    }

    const fn pad(mut self, x: u8) -> Self {
        self.padding = x;
        self
    }

    const fn srgb(mut self) -> Self {
        self.encoding = ColorEncoding::NonLinear;
        self
    }

    const fn block(mut self, w: u8, h: u8) -> Self {
        self.block_width = w;
        self.block_height = h;
        self
    }

    /// Bit width of one channel role; 0 when the role is absent.
    pub const fn channel_bits(&self, role: ChannelRole) -> u8 {
        match role {
            ChannelRole::Red => self.red,
            ChannelRole::Green => self.green,
            ChannelRole::Blue => self.blue,
            ChannelRole::Alpha => self.alpha,
            ChannelRole::Luminance => self.luminance,
            ChannelRole::Intensity => self.intensity,
            ChannelRole::Depth => self.depth,
            ChannelRole::Stencil => self.stencil,
            ChannelRole::SharedExponent => self.exponent,
            ChannelRole::ChromaU => self.chroma_u,
            ChannelRole::ChromaV => self.chroma_v,
            ChannelRole::Luma => self.luma,
            ChannelRole::Padding => self.padding,
        }
    }

    /// Sum of all channel bits, padding included.
    ///
    /// For Array and Packed rows this equals `bytes_per_block * 8`.
    pub const fn total_channel_bits(&self) -> u32 {
        (self.red as u32)
            + (self.green as u32)
            + (self.blue as u32)
            + (self.alpha as u32)
            + (self.luminance as u32)
            + (self.intensity as u32)
            + (self.depth as u32)
            + (self.stencil as u32)
            + (self.exponent as u32)
            + (self.chroma_u as u32)
            + (self.chroma_v as u32)
            + (self.luma as u32)
            + (self.padding as u32)
    }

    /// Count of component roles present.
    ///
    /// Padding never counts; neither does the shared exponent field, which
    /// scales the other channels rather than standing alone (so
    /// `R9G9B9E5Float` reports 3, matching its RGB composition).
    pub const fn num_components(&self) -> u32 {
        let mut n = 0;
        if self.red > 0 {
            n += 1;
        }
        if self.green > 0 {
            n += 1;
        }
        if self.blue > 0 {
            n += 1;
        }
        if self.alpha > 0 {
            n += 1;
        }
        if self.luminance > 0 {
            n += 1;
        }
        if self.intensity > 0 {
            n += 1;
        }
        if self.depth > 0 {
            n += 1;
        }
        if self.stencil > 0 {
            n += 1;
        }
        if self.chroma_u > 0 {
            n += 1;
        }
        if self.chroma_v > 0 {
            n += 1;
        }
        if self.luma > 0 {
            n += 1;
        }
        n
    }

    /// Largest bit width among the present component channels.
    pub const fn max_channel_bits(&self) -> u8 {
        let bits = [
            self.red,
            self.green,
            self.blue,
            self.alpha,
            self.luminance,
            self.intensity,
            self.depth,
            self.stencil,
            self.chroma_u,
            self.chroma_v,
            self.luma,
        ];
        let mut max = 0;
        let mut idx = 0;
        while idx < bits.len() {
            if bits[idx] > max {
                max = bits[idx];
            }
            idx += 1;
        }
        max
    }
}

pub(crate) const fn descriptor_table() -> &'static [FormatDescriptor; FORMAT_COUNT] {
    &FORMAT_DESCRIPTORS
}

use BaseComposition as B;
use FormatLayout::{Array, Compressed, Packed};
use StorageClass::{
    Float, PackedSpecial, SharedExponentFloat, SignedInt, SignedNormalized, UnsignedInt,
    UnsignedNormalized,
};

const fn d(
    name: &'static str,
    layout: FormatLayout,
    base: B,
    storage: StorageClass,
    bytes: u8,
) -> FormatDescriptor {
    FormatDescriptor::new(name, layout, base, storage, bytes)
}

/// The table. Row order mirrors the catalog enum exactly; the compile-time
/// check below refuses rows that break the structural invariants.
static FORMAT_DESCRIPTORS: [FormatDescriptor; FORMAT_COUNT] = [
    // The sentinel row exists only so ordinals index directly; it is never
    // returned by descriptor().
    d("NONE", Array, B::Rgba, UnsignedNormalized, 0),
    // Packed 32-bit RGBA orderings.
    d("A8B8G8R8_UNORM", Packed, B::Rgba, UnsignedNormalized, 4).rgba(8, 8, 8, 8),
    d("R8G8B8A8_UNORM", Packed, B::Rgba, UnsignedNormalized, 4).rgba(8, 8, 8, 8),
    d("B8G8R8A8_UNORM", Packed, B::Rgba, UnsignedNormalized, 4).rgba(8, 8, 8, 8),
    d("A8R8G8B8_UNORM", Packed, B::Rgba, UnsignedNormalized, 4).rgba(8, 8, 8, 8),
    d("X8B8G8R8_UNORM", Packed, B::Rgb, UnsignedNormalized, 4).rgba(8, 8, 8, 0).pad(8),
    d("R8G8B8X8_UNORM", Packed, B::Rgb, UnsignedNormalized, 4).rgba(8, 8, 8, 0).pad(8),
    d("B8G8R8X8_UNORM", Packed, B::Rgb, UnsignedNormalized, 4).rgba(8, 8, 8, 0).pad(8),
    d("X8R8G8B8_UNORM", Packed, B::Rgb, UnsignedNormalized, 4).rgba(8, 8, 8, 0).pad(8),
    d("BGR_UNORM8", Array, B::Rgb, UnsignedNormalized, 3).rgba(8, 8, 8, 0),
    d("RGB_UNORM8", Array, B::Rgb, UnsignedNormalized, 3).rgba(8, 8, 8, 0),
    // Packed 16-bit color.
    d("B5G6R5_UNORM", Packed, B::Rgb, UnsignedNormalized, 2).rgba(5, 6, 5, 0),
    d("R5G6B5_UNORM", Packed, B::Rgb, UnsignedNormalized, 2).rgba(5, 6, 5, 0),
    d("B4G4R4A4_UNORM", Packed, B::Rgba, UnsignedNormalized, 2).rgba(4, 4, 4, 4),
    d("A4R4G4B4_UNORM", Packed, B::Rgba, UnsignedNormalized, 2).rgba(4, 4, 4, 4),
    d("A1B5G5R5_UNORM", Packed, B::Rgba, UnsignedNormalized, 2).rgba(5, 5, 5, 1),
    d("B5G5R5A1_UNORM", Packed, B::Rgba, UnsignedNormalized, 2).rgba(5, 5, 5, 1),
    d("A1R5G5B5_UNORM", Packed, B::Rgba, UnsignedNormalized, 2).rgba(5, 5, 5, 1),
    d("L4A4_UNORM", Packed, B::LuminanceAlpha, UnsignedNormalized, 1).la(4, 4),
    d("L8A8_UNORM", Packed, B::LuminanceAlpha, UnsignedNormalized, 2).la(8, 8),
    d("A8L8_UNORM", Packed, B::LuminanceAlpha, UnsignedNormalized, 2).la(8, 8),
    d("L16A16_UNORM", Packed, B::LuminanceAlpha, UnsignedNormalized, 4).la(16, 16),
    d("A16L16_UNORM", Packed, B::LuminanceAlpha, UnsignedNormalized, 4).la(16, 16),
    d("B2G3R3_UNORM", Packed, B::Rgb, UnsignedNormalized, 1).rgba(3, 3, 2, 0),
    // Single-channel normalized arrays.
    d("A_UNORM8", Array, B::Alpha, UnsignedNormalized, 1).la(0, 8),
    d("A_UNORM16", Array, B::Alpha, UnsignedNormalized, 2).la(0, 16),
    d("L_UNORM8", Array, B::Luminance, UnsignedNormalized, 1).la(8, 0),
    d("L_UNORM16", Array, B::Luminance, UnsignedNormalized, 2).la(16, 0),
    d("I_UNORM8", Array, B::Intensity, UnsignedNormalized, 1).i(8),
    d("I_UNORM16", Array, B::Intensity, UnsignedNormalized, 2).i(16),
    // YCbCr macropixels: 16 bits per texel, U and V alternate across texels.
    d("YCBCR", Packed, B::YCbCr, PackedSpecial, 2).yuv(8, 8),
    d("YCBCR_REV", Packed, B::YCbCr, PackedSpecial, 2).yuv(8, 8),
    d("R_UNORM8", Array, B::Red, UnsignedNormalized, 1).rgba(8, 0, 0, 0),
    d("R8G8_UNORM", Packed, B::Rg, UnsignedNormalized, 2).rgba(8, 8, 0, 0),
    d("G8R8_UNORM", Packed, B::Rg, UnsignedNormalized, 2).rgba(8, 8, 0, 0),
    d("R_UNORM16", Array, B::Red, UnsignedNormalized, 2).rgba(16, 0, 0, 0),
    d("R16G16_UNORM", Packed, B::Rg, UnsignedNormalized, 4).rgba(16, 16, 0, 0),
    d("G16R16_UNORM", Packed, B::Rg, UnsignedNormalized, 4).rgba(16, 16, 0, 0),
    d("B10G10R10A2_UNORM", Packed, B::Rgba, UnsignedNormalized, 4).rgba(10, 10, 10, 2),
    // Packed depth/stencil, both byte orderings.
    d("S8_UINT_Z24_UNORM", Packed, B::DepthStencil, UnsignedNormalized, 4).zs(24, 8),
    d("Z24_UNORM_S8_UINT", Packed, B::DepthStencil, UnsignedNormalized, 4).zs(24, 8),
    d("Z_UNORM16", Array, B::Depth, UnsignedNormalized, 2).zs(16, 0),
    d("Z24_UNORM_X8_UINT", Packed, B::Depth, UnsignedNormalized, 4).zs(24, 0).pad(8),
    d("X8Z24_UNORM", Packed, B::Depth, UnsignedNormalized, 4).zs(24, 0).pad(8),
    d("Z_UNORM32", Array, B::Depth, UnsignedNormalized, 4).zs(32, 0),
    d("S_UINT8", Array, B::Stencil, UnsignedInt, 1).zs(0, 8),
    // 8-bit/channel sRGB.
    d("BGR_SRGB8", Array, B::Rgb, UnsignedNormalized, 3).rgba(8, 8, 8, 0).srgb(),
    d("A8B8G8R8_SRGB", Packed, B::Rgba, UnsignedNormalized, 4).rgba(8, 8, 8, 8).srgb(),
    d("B8G8R8A8_SRGB", Packed, B::Rgba, UnsignedNormalized, 4).rgba(8, 8, 8, 8).srgb(),
    d("L_SRGB8", Array, B::Luminance, UnsignedNormalized, 1).la(8, 0).srgb(),
    d("L8A8_SRGB", Packed, B::LuminanceAlpha, UnsignedNormalized, 2).la(8, 8).srgb(),
    // Compressed rows carry nominal per-channel bits; only block geometry
    // and bytes_per_block feed size math.
    d("SRGB_DXT1", Compressed, B::Rgb, UnsignedNormalized, 8).rgba(4, 4, 4, 0).srgb().block(4, 4),
    d("SRGBA_DXT1", Compressed, B::Rgba, UnsignedNormalized, 8).rgba(4, 4, 4, 4).srgb().block(4, 4),
    d("SRGBA_DXT3", Compressed, B::Rgba, UnsignedNormalized, 16).rgba(4, 4, 4, 4).srgb().block(4, 4),
    d("SRGBA_DXT5", Compressed, B::Rgba, UnsignedNormalized, 16).rgba(4, 4, 4, 4).srgb().block(4, 4),
    d("RGB_FXT1", Compressed, B::Rgb, UnsignedNormalized, 16).rgba(4, 4, 4, 0).block(8, 4),
    d("RGBA_FXT1", Compressed, B::Rgba, UnsignedNormalized, 16).rgba(4, 4, 4, 1).block(8, 4),
    d("RGB_DXT1", Compressed, B::Rgb, UnsignedNormalized, 8).rgba(4, 4, 4, 0).block(4, 4),
    d("RGBA_DXT1", Compressed, B::Rgba, UnsignedNormalized, 8).rgba(4, 4, 4, 4).block(4, 4),
    d("RGBA_DXT3", Compressed, B::Rgba, UnsignedNormalized, 16).rgba(4, 4, 4, 4).block(4, 4),
    d("RGBA_DXT5", Compressed, B::Rgba, UnsignedNormalized, 16).rgba(4, 4, 4, 4).block(4, 4),
    // Floating point arrays.
    d("RGBA_FLOAT32", Array, B::Rgba, Float, 16).rgba(32, 32, 32, 32),
    d("RGBA_FLOAT16", Array, B::Rgba, Float, 8).rgba(16, 16, 16, 16),
    d("RGB_FLOAT32", Array, B::Rgb, Float, 12).rgba(32, 32, 32, 0),
    d("RGB_FLOAT16", Array, B::Rgb, Float, 6).rgba(16, 16, 16, 0),
    d("A_FLOAT32", Array, B::Alpha, Float, 4).la(0, 32),
    d("A_FLOAT16", Array, B::Alpha, Float, 2).la(0, 16),
    d("L_FLOAT32", Array, B::Luminance, Float, 4).la(32, 0),
    d("L_FLOAT16", Array, B::Luminance, Float, 2).la(16, 0),
    d("LA_FLOAT32", Array, B::LuminanceAlpha, Float, 8).la(32, 32),
    d("LA_FLOAT16", Array, B::LuminanceAlpha, Float, 4).la(16, 16),
    d("I_FLOAT32", Array, B::Intensity, Float, 4).i(32),
    d("I_FLOAT16", Array, B::Intensity, Float, 2).i(16),
    d("R_FLOAT32", Array, B::Red, Float, 4).rgba(32, 0, 0, 0),
    d("R_FLOAT16", Array, B::Red, Float, 2).rgba(16, 0, 0, 0),
    d("RG_FLOAT32", Array, B::Rg, Float, 8).rgba(32, 32, 0, 0),
    d("RG_FLOAT16", Array, B::Rg, Float, 4).rgba(16, 16, 0, 0),
    // Non-normalized integer arrays.
    d("A_UINT8", Array, B::Alpha, UnsignedInt, 1).la(0, 8),
    d("A_UINT16", Array, B::Alpha, UnsignedInt, 2).la(0, 16),
    d("A_UINT32", Array, B::Alpha, UnsignedInt, 4).la(0, 32),
    d("A_SINT8", Array, B::Alpha, SignedInt, 1).la(0, 8),
    d("A_SINT16", Array, B::Alpha, SignedInt, 2).la(0, 16),
    d("A_SINT32", Array, B::Alpha, SignedInt, 4).la(0, 32),
    d("I_UINT8", Array, B::Intensity, UnsignedInt, 1).i(8),
    d("I_UINT16", Array, B::Intensity, UnsignedInt, 2).i(16),
    d("I_UINT32", Array, B::Intensity, UnsignedInt, 4).i(32),
    d("I_SINT8", Array, B::Intensity, SignedInt, 1).i(8),
    d("I_SINT16", Array, B::Intensity, SignedInt, 2).i(16),
    d("I_SINT32", Array, B::Intensity, SignedInt, 4).i(32),
    d("L_UINT8", Array, B::Luminance, UnsignedInt, 1).la(8, 0),
    d("L_UINT16", Array, B::Luminance, UnsignedInt, 2).la(16, 0),
    d("L_UINT32", Array, B::Luminance, UnsignedInt, 4).la(32, 0),
    d("L_SINT8", Array, B::Luminance, SignedInt, 1).la(8, 0),
    d("L_SINT16", Array, B::Luminance, SignedInt, 2).la(16, 0),
    d("L_SINT32", Array, B::Luminance, SignedInt, 4).la(32, 0),
    d("LA_UINT8", Array, B::LuminanceAlpha, UnsignedInt, 2).la(8, 8),
    d("LA_UINT16", Array, B::LuminanceAlpha, UnsignedInt, 4).la(16, 16),
    d("LA_UINT32", Array, B::LuminanceAlpha, UnsignedInt, 8).la(32, 32),
    d("LA_SINT8", Array, B::LuminanceAlpha, SignedInt, 2).la(8, 8),
    d("LA_SINT16", Array, B::LuminanceAlpha, SignedInt, 4).la(16, 16),
    d("LA_SINT32", Array, B::LuminanceAlpha, SignedInt, 8).la(32, 32),
    d("R_SINT8", Array, B::Red, SignedInt, 1).rgba(8, 0, 0, 0),
    d("RG_SINT8", Array, B::Rg, SignedInt, 2).rgba(8, 8, 0, 0),
    d("RGB_SINT8", Array, B::Rgb, SignedInt, 3).rgba(8, 8, 8, 0),
    d("RGBA_SINT8", Array, B::Rgba, SignedInt, 4).rgba(8, 8, 8, 8),
    d("R_SINT16", Array, B::Red, SignedInt, 2).rgba(16, 0, 0, 0),
    d("RG_SINT16", Array, B::Rg, SignedInt, 4).rgba(16, 16, 0, 0),
    d("RGB_SINT16", Array, B::Rgb, SignedInt, 6).rgba(16, 16, 16, 0),
    d("RGBA_SINT16", Array, B::Rgba, SignedInt, 8).rgba(16, 16, 16, 16),
    d("R_SINT32", Array, B::Red, SignedInt, 4).rgba(32, 0, 0, 0),
    d("RG_SINT32", Array, B::Rg, SignedInt, 8).rgba(32, 32, 0, 0),
    d("RGB_SINT32", Array, B::Rgb, SignedInt, 12).rgba(32, 32, 32, 0),
    d("RGBA_SINT32", Array, B::Rgba, SignedInt, 16).rgba(32, 32, 32, 32),
    d("R_UINT8", Array, B::Red, UnsignedInt, 1).rgba(8, 0, 0, 0),
    d("RG_UINT8", Array, B::Rg, UnsignedInt, 2).rgba(8, 8, 0, 0),
    d("RGB_UINT8", Array, B::Rgb, UnsignedInt, 3).rgba(8, 8, 8, 0),
    d("RGBA_UINT8", Array, B::Rgba, UnsignedInt, 4).rgba(8, 8, 8, 8),
    d("R_UINT16", Array, B::Red, UnsignedInt, 2).rgba(16, 0, 0, 0),
    d("RG_UINT16", Array, B::Rg, UnsignedInt, 4).rgba(16, 16, 0, 0),
    d("RGB_UINT16", Array, B::Rgb, UnsignedInt, 6).rgba(16, 16, 16, 0),
    d("RGBA_UINT16", Array, B::Rgba, UnsignedInt, 8).rgba(16, 16, 16, 16),
    d("R_UINT32", Array, B::Red, UnsignedInt, 4).rgba(32, 0, 0, 0),
    d("RG_UINT32", Array, B::Rg, UnsignedInt, 8).rgba(32, 32, 0, 0),
    d("RGB_UINT32", Array, B::Rgb, UnsignedInt, 12).rgba(32, 32, 32, 0),
    d("RGBA_UINT32", Array, B::Rgba, UnsignedInt, 16).rgba(32, 32, 32, 32),
    // Signed fixed point.
    d("DUDV8", Packed, B::DuDv, SignedNormalized, 2).duv(8, 8),
    d("R_SNORM8", Array, B::Red, SignedNormalized, 1).rgba(8, 0, 0, 0),
    d("R8G8_SNORM", Packed, B::Rg, SignedNormalized, 2).rgba(8, 8, 0, 0),
    d("X8B8G8R8_SNORM", Packed, B::Rgb, SignedNormalized, 4).rgba(8, 8, 8, 0).pad(8),
    d("A8B8G8R8_SNORM", Packed, B::Rgba, SignedNormalized, 4).rgba(8, 8, 8, 8),
    d("R8G8B8A8_SNORM", Packed, B::Rgba, SignedNormalized, 4).rgba(8, 8, 8, 8),
    d("R_SNORM16", Array, B::Red, SignedNormalized, 2).rgba(16, 0, 0, 0),
    d("R16G16_SNORM", Packed, B::Rg, SignedNormalized, 4).rgba(16, 16, 0, 0),
    d("RGB_SNORM16", Array, B::Rgb, SignedNormalized, 6).rgba(16, 16, 16, 0),
    d("RGBA_SNORM16", Array, B::Rgba, SignedNormalized, 8).rgba(16, 16, 16, 16),
    d("RGBA_UNORM16", Array, B::Rgba, UnsignedNormalized, 8).rgba(16, 16, 16, 16),
    // Red/green and luminance block compression.
    d("R_RGTC1_UNORM", Compressed, B::Red, UnsignedNormalized, 8).rgba(8, 0, 0, 0).block(4, 4),
    d("R_RGTC1_SNORM", Compressed, B::Red, SignedNormalized, 8).rgba(8, 0, 0, 0).block(4, 4),
    d("RG_RGTC2_UNORM", Compressed, B::Rg, UnsignedNormalized, 16).rgba(8, 8, 0, 0).block(4, 4),
    d("RG_RGTC2_SNORM", Compressed, B::Rg, SignedNormalized, 16).rgba(8, 8, 0, 0).block(4, 4),
    d("L_LATC1_UNORM", Compressed, B::Luminance, UnsignedNormalized, 8).la(8, 0).block(4, 4),
    d("L_LATC1_SNORM", Compressed, B::Luminance, SignedNormalized, 8).la(8, 0).block(4, 4),
    d("LA_LATC2_UNORM", Compressed, B::LuminanceAlpha, UnsignedNormalized, 16).la(8, 8).block(4, 4),
    d("LA_LATC2_SNORM", Compressed, B::LuminanceAlpha, SignedNormalized, 16).la(8, 8).block(4, 4),
    // ETC1/ETC2/EAC.
    d("ETC1_RGB8", Compressed, B::Rgb, UnsignedNormalized, 8).rgba(8, 8, 8, 0).block(4, 4),
    d("ETC2_RGB8", Compressed, B::Rgb, UnsignedNormalized, 8).rgba(8, 8, 8, 0).block(4, 4),
    d("ETC2_SRGB8", Compressed, B::Rgb, UnsignedNormalized, 8).rgba(8, 8, 8, 0).srgb().block(4, 4),
    d("ETC2_RGBA8_EAC", Compressed, B::Rgba, UnsignedNormalized, 16).rgba(8, 8, 8, 8).block(4, 4),
    d("ETC2_SRGB8_ALPHA8_EAC", Compressed, B::Rgba, UnsignedNormalized, 16).rgba(8, 8, 8, 8).srgb().block(4, 4),
    d("ETC2_R11_EAC", Compressed, B::Red, UnsignedNormalized, 8).rgba(11, 0, 0, 0).block(4, 4),
    d("ETC2_RG11_EAC", Compressed, B::Rg, UnsignedNormalized, 16).rgba(11, 11, 0, 0).block(4, 4),
    d("ETC2_SIGNED_R11_EAC", Compressed, B::Red, SignedNormalized, 8).rgba(11, 0, 0, 0).block(4, 4),
    d("ETC2_SIGNED_RG11_EAC", Compressed, B::Rg, SignedNormalized, 16).rgba(11, 11, 0, 0).block(4, 4),
    d("ETC2_RGB8_PUNCHTHROUGH_ALPHA1", Compressed, B::Rgba, UnsignedNormalized, 8).rgba(8, 8, 8, 1).block(4, 4),
    d("ETC2_SRGB8_PUNCHTHROUGH_ALPHA1", Compressed, B::Rgba, UnsignedNormalized, 8).rgba(8, 8, 8, 1).srgb().block(4, 4),
    d("A_SNORM8", Array, B::Alpha, SignedNormalized, 1).la(0, 8),
    d("L_SNORM8", Array, B::Luminance, SignedNormalized, 1).la(8, 0),
    d("L8A8_SNORM", Packed, B::LuminanceAlpha, SignedNormalized, 2).la(8, 8),
    d("I_SNORM8", Array, B::Intensity, SignedNormalized, 1).i(8),
    d("A_SNORM16", Array, B::Alpha, SignedNormalized, 2).la(0, 16),
    d("L_SNORM16", Array, B::Luminance, SignedNormalized, 2).la(16, 0),
    d("LA_SNORM16", Array, B::LuminanceAlpha, SignedNormalized, 4).la(16, 16),
    d("I_SNORM16", Array, B::Intensity, SignedNormalized, 2).i(16),
    // Packed small-float color.
    d("R9G9B9E5_FLOAT", Packed, B::Rgb, SharedExponentFloat, 4).rgba(9, 9, 9, 0).e(5),
    d("R11G11B10_FLOAT", Packed, B::Rgb, Float, 4).rgba(11, 11, 10, 0),
    d("Z_FLOAT32", Array, B::Depth, Float, 4).zs(32, 0),
    d("Z32_FLOAT_S8X24_UINT", Packed, B::DepthStencil, Float, 8).zs(32, 8).pad(24),
    d("B10G10R10A2_UINT", Packed, B::Rgba, UnsignedInt, 4).rgba(10, 10, 10, 2),
    d("R10G10B10A2_UINT", Packed, B::Rgba, UnsignedInt, 4).rgba(10, 10, 10, 2),
    d("B4G4R4X4_UNORM", Packed, B::Rgb, UnsignedNormalized, 2).rgba(4, 4, 4, 0).pad(4),
    d("B5G5R5X1_UNORM", Packed, B::Rgb, UnsignedNormalized, 2).rgba(5, 5, 5, 0).pad(1),
    d("R8G8B8X8_SNORM", Packed, B::Rgb, SignedNormalized, 4).rgba(8, 8, 8, 0).pad(8),
    d("R8G8B8X8_SRGB", Packed, B::Rgb, UnsignedNormalized, 4).rgba(8, 8, 8, 0).pad(8).srgb(),
    d("RGBX_UINT8", Array, B::Rgb, UnsignedInt, 4).rgba(8, 8, 8, 0).pad(8),
    d("RGBX_SINT8", Array, B::Rgb, SignedInt, 4).rgba(8, 8, 8, 0).pad(8),
    d("B10G10R10X2_UNORM", Packed, B::Rgb, UnsignedNormalized, 4).rgba(10, 10, 10, 0).pad(2),
    d("RGBX_UNORM16", Array, B::Rgb, UnsignedNormalized, 8).rgba(16, 16, 16, 0).pad(16),
    d("RGBX_SNORM16", Array, B::Rgb, SignedNormalized, 8).rgba(16, 16, 16, 0).pad(16),
    d("RGBX_FLOAT16", Array, B::Rgb, Float, 8).rgba(16, 16, 16, 0).pad(16),
    d("RGBX_UINT16", Array, B::Rgb, UnsignedInt, 8).rgba(16, 16, 16, 0).pad(16),
    d("RGBX_SINT16", Array, B::Rgb, SignedInt, 8).rgba(16, 16, 16, 0).pad(16),
    d("RGBX_FLOAT32", Array, B::Rgb, Float, 16).rgba(32, 32, 32, 0).pad(32),
    d("RGBX_UINT32", Array, B::Rgb, UnsignedInt, 16).rgba(32, 32, 32, 0).pad(32),
    d("RGBX_SINT32", Array, B::Rgb, SignedInt, 16).rgba(32, 32, 32, 0).pad(32),
    d("R10G10B10A2_UNORM", Packed, B::Rgba, UnsignedNormalized, 4).rgba(10, 10, 10, 2),
    d("G8R8_SNORM", Packed, B::Rg, SignedNormalized, 2).rgba(8, 8, 0, 0),
    d("G16R16_SNORM", Packed, B::Rg, SignedNormalized, 4).rgba(16, 16, 0, 0),
];

/// Compile-time structural validation of the table. A bad row is a build
/// error, not a runtime surprise.
const fn check_table(table: &[FormatDescriptor; FORMAT_COUNT]) {
    // Row 0 is the sentinel; everything else must be internally consistent.
    let mut i = 1;
    while i < FORMAT_COUNT {
        let row = &table[i];
        match row.layout {
            FormatLayout::Array | FormatLayout::Packed => {
                assert!(row.block_width == 1 && row.block_height == 1);
                assert!(row.bytes_per_block as u32 <= MAX_ELEMENT_BYTES);
                assert!(row.total_channel_bits() == row.bytes_per_block as u32 * 8);
            }
            FormatLayout::Compressed => {
                assert!(row.block_width > 1 || row.block_height > 1);
                assert!(row.bytes_per_block > 0);
            }
        }
        i += 1;
    }
}

const _: () = check_table(&FORMAT_DESCRIPTORS);

/// Runtime self-check of the descriptor table.
///
/// Re-runs the structural checks plus the string-level ones the compile-time
/// pass cannot express (name uniqueness, sRGB naming agreement). Pure reads,
/// idempotent, safe to call from any thread.
///
/// # Panics
///
/// Panics on the first inconsistent row. A failure here means the crate
/// itself is broken, so this asserts rather than returning an error.
pub fn validate_tables() {
    check_table(&FORMAT_DESCRIPTORS);
    let mut i = 1;
    while i < FORMAT_COUNT {
        let row = &FORMAT_DESCRIPTORS[i];
        assert!(!row.name.is_empty());
        assert_eq!(
            row.name.contains("SRGB"),
            row.encoding == ColorEncoding::NonLinear,
            "sRGB marking of {} disagrees with its name",
            row.name
        );
        let mut j = i + 1;
        while j < FORMAT_COUNT {
            assert_ne!(row.name, FORMAT_DESCRIPTORS[j].name, "duplicate row name");
            j += 1;
        }
        i += 1;
    }
}
