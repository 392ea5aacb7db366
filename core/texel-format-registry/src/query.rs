//! Property accessors on [`Format`].
//!
//! Every method here is a pure read of the descriptor table; none allocates
//! and all are safe to call concurrently. They share `descriptor()`'s
//! contract: passing [`Format::None`] is a caller bug and asserts.

use crate::descriptor::{BaseComposition, ChannelRole, ColorEncoding, FormatLayout, StorageClass};
use crate::format::Format;

impl Format {
    /// Bytes per storage unit: per texel for Array/Packed formats, per block
    /// for compressed ones.
    #[inline]
    pub fn bytes_per_block(self) -> u32 {
        self.descriptor().bytes_per_block as u32
    }

    /// Bit width of one channel role, 0 when the format lacks it.
    ///
    /// Compressed formats report nominal (decoded) widths.
    #[inline]
    pub fn channel_bits(self, role: ChannelRole) -> u8 {
        self.descriptor().channel_bits(role)
    }

    /// Largest bit width among the format's component channels.
    #[inline]
    pub fn max_channel_bits(self) -> u8 {
        self.descriptor().max_channel_bits()
    }

    /// Count of component channels (padding and shared exponent excluded).
    #[inline]
    pub fn num_components(self) -> u32 {
        self.descriptor().num_components()
    }

    /// Numeric encoding of the channels.
    #[inline]
    pub fn storage_class(self) -> StorageClass {
        self.descriptor().storage
    }

    /// Logical channel composition.
    #[inline]
    pub fn base_composition(self) -> BaseComposition {
        self.descriptor().base
    }

    /// Linear vs sRGB-encoded color.
    #[inline]
    pub fn color_encoding(self) -> ColorEncoding {
        self.descriptor().encoding
    }

    /// Block footprint in texels; `(1, 1)` for everything non-compressed.
    #[inline]
    pub fn block_dimensions(self) -> (u8, u8) {
        let desc = self.descriptor();
        (desc.block_width, desc.block_height)
    }

    /// True for block-encoded formats.
    #[inline]
    pub fn is_compressed(self) -> bool {
        self.descriptor().layout == FormatLayout::Compressed
    }

    /// True when depth and stencil share one packed element.
    ///
    /// Depth-only formats with padding bits (`Z24_UNORM_X8_UINT`) are not
    /// packed depth/stencil: the stencil byte is filler, not a channel.
    #[inline]
    pub fn is_packed_depth_stencil(self) -> bool {
        self.descriptor().base == BaseComposition::DepthStencil
    }

    /// True for non-normalized integer *color* formats.
    ///
    /// Depth and stencil formats answer false even when their storage class
    /// is integral; render paths treat them separately.
    pub fn is_integer_color(self) -> bool {
        let desc = self.descriptor();
        let integral = matches!(
            desc.storage,
            StorageClass::UnsignedInt | StorageClass::SignedInt
        );
        integral
            && !matches!(
                desc.base,
                BaseComposition::Depth | BaseComposition::Stencil | BaseComposition::DepthStencil
            )
    }

    /// True when every component is stored unsigned.
    ///
    /// Shared-exponent color counts as unsigned (its mantissas carry no sign
    /// bit), as do the opaque YCbCr packings. Note the asymmetry with plain
    /// float formats: `R9G9B9E5Float` answers true here and false from
    /// [`is_signed`](Format::is_signed), while `R11G11B10Float` (also
    /// sign-bit-free in storage) is classified as `Float` and answers the
    /// opposite.
    pub fn is_unsigned(self) -> bool {
        matches!(
            self.descriptor().storage,
            StorageClass::UnsignedNormalized
                | StorageClass::UnsignedInt
                | StorageClass::SharedExponentFloat
                | StorageClass::PackedSpecial
        )
    }

    /// True when components can represent negative values.
    ///
    /// Float formats answer true; shared-exponent color does not, since its
    /// mantissas store no sign bit and decode to non-negative values only.
    pub fn is_signed(self) -> bool {
        matches!(
            self.descriptor().storage,
            StorageClass::SignedNormalized | StorageClass::SignedInt | StorageClass::Float
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(Format::A8B8G8R8Unorm, 4)]
    #[case(Format::BgrUnorm8, 3)]
    #[case(Format::B5G6R5Unorm, 2)]
    #[case(Format::L4A4Unorm, 1)]
    #[case(Format::RgbaFloat32, 16)]
    #[case(Format::RgbDxt1, 8)]
    #[case(Format::RgbaDxt5, 16)]
    #[case(Format::RgbFxt1, 16)]
    #[case(Format::Z32FloatS8X24Uint, 8)]
    fn bytes_per_block(#[case] format: Format, #[case] expected: u32) {
        assert_eq!(format.bytes_per_block(), expected);
    }

    #[rstest]
    #[case(Format::B5G6R5Unorm, ChannelRole::Green, 6)]
    #[case(Format::B5G6R5Unorm, ChannelRole::Alpha, 0)]
    #[case(Format::A1B5G5R5Unorm, ChannelRole::Alpha, 1)]
    #[case(Format::S8UintZ24Unorm, ChannelRole::Depth, 24)]
    #[case(Format::S8UintZ24Unorm, ChannelRole::Stencil, 8)]
    #[case(Format::Z24UnormX8Uint, ChannelRole::Stencil, 0)]
    #[case(Format::Z24UnormX8Uint, ChannelRole::Padding, 8)]
    #[case(Format::R9G9B9E5Float, ChannelRole::SharedExponent, 5)]
    #[case(Format::Ycbcr, ChannelRole::Luma, 8)]
    #[case(Format::Dudv8, ChannelRole::ChromaV, 8)]
    #[case(Format::Etc2R11Eac, ChannelRole::Red, 11)]
    fn channel_bits(#[case] format: Format, #[case] role: ChannelRole, #[case] expected: u8) {
        assert_eq!(format.channel_bits(role), expected);
    }

    #[test]
    fn absent_roles_report_zero_everywhere() {
        for f in valid_formats() {
            let mut total: u32 = 0;
            for role in ChannelRole::all_values() {
                total += f.channel_bits(*role) as u32;
            }
            assert_eq!(total, f.descriptor().total_channel_bits(), "{f:?}");
        }
    }

    #[rstest]
    #[case(Format::B5G6R5Unorm, 6)]
    #[case(Format::R11G11B10Float, 11)]
    #[case(Format::Z32FloatS8X24Uint, 32)]
    #[case(Format::L4A4Unorm, 4)]
    fn max_channel_bits(#[case] format: Format, #[case] expected: u8) {
        assert_eq!(format.max_channel_bits(), expected);
    }

    #[rstest]
    #[case(Format::RUnorm8, 1)]
    #[case(Format::L8A8Unorm, 2)]
    #[case(Format::BgrUnorm8, 3)]
    #[case(Format::RgbaDxt5, 4)]
    #[case(Format::R9G9B9E5Float, 3)]
    #[case(Format::Ycbcr, 2)]
    #[case(Format::Dudv8, 2)]
    #[case(Format::Z24UnormX8Uint, 1)]
    #[case(Format::Z32FloatS8X24Uint, 2)]
    fn num_components(#[case] format: Format, #[case] expected: u32) {
        assert_eq!(format.num_components(), expected);
    }

    #[test]
    fn compression_implies_multi_texel_blocks() {
        for f in valid_formats() {
            let (w, h) = f.block_dimensions();
            assert_eq!(f.is_compressed(), w > 1 || h > 1, "{f:?}");
        }
    }

    #[test]
    fn packed_depth_stencil_needs_both_channels() {
        for f in valid_formats() {
            let expected = f.channel_bits(ChannelRole::Depth) > 0
                && f.channel_bits(ChannelRole::Stencil) > 0;
            assert_eq!(f.is_packed_depth_stencil(), expected, "{f:?}");
        }
        assert!(Format::S8UintZ24Unorm.is_packed_depth_stencil());
        assert!(Format::Z32FloatS8X24Uint.is_packed_depth_stencil());
        assert!(!Format::Z24UnormX8Uint.is_packed_depth_stencil());
        assert!(!Format::ZFloat32.is_packed_depth_stencil());
        assert!(!Format::SUint8.is_packed_depth_stencil());
    }

    #[test]
    fn stencil_is_not_integer_color() {
        assert!(Format::RgbaUint32.is_integer_color());
        assert!(Format::RSint8.is_integer_color());
        assert!(!Format::SUint8.is_integer_color());
        assert!(!Format::RgbaUnorm16.is_integer_color());
    }

    #[test]
    fn signedness_partitions_the_catalog() {
        for f in valid_formats() {
            assert_ne!(f.is_signed(), f.is_unsigned(), "{f:?}");
        }
        assert!(Format::R9G9B9E5Float.is_unsigned());
        assert!(Format::R11G11B10Float.is_signed());
        assert!(Format::Ycbcr.is_unsigned());
        assert!(Format::Dudv8.is_signed());
    }

    #[rstest]
    #[case(Format::BgrSrgb8, ColorEncoding::NonLinear)]
    #[case(Format::BgrUnorm8, ColorEncoding::Linear)]
    #[case(Format::Etc2Srgb8, ColorEncoding::NonLinear)]
    fn color_encoding(#[case] format: Format, #[case] expected: ColorEncoding) {
        assert_eq!(format.color_encoding(), expected);
    }

    #[rstest]
    #[case(Format::RgbDxt1, (4, 4))]
    #[case(Format::RgbFxt1, (8, 4))]
    #[case(Format::RgbaFloat32, (1, 1))]
    fn block_dimensions(#[case] format: Format, #[case] expected: (u8, u8)) {
        assert_eq!(format.block_dimensions(), expected);
    }

    #[test]
    #[should_panic(expected = "sentinel")]
    fn queries_reject_the_sentinel() {
        let _ = Format::None.bytes_per_block();
    }
}
