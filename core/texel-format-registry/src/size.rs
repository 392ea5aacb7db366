//! Image size and row stride math.
//!
//! All three entry points share one algorithm: round each dimension up to
//! whole blocks, then multiply block counts by the block byte size. For
//! Array and Packed formats the block is 1x1, so the same code path yields
//! plain `width * bytes_per_texel` arithmetic. Partial blocks at the right
//! and bottom edges of compressed images are stored as whole blocks and are
//! counted as such.

use crate::error::FormatError;
use crate::format::Format;
use likely_stable::unlikely;

/// Total byte size of a `width` x `height` x `depth` image.
///
/// Any zero dimension yields zero bytes. The multiply runs in 128-bit
/// arithmetic internally; a request whose true size exceeds `u64` is a
/// caller bug (no real surface is that large) and asserts rather than
/// wrapping.
///
/// # Panics
///
/// Panics for [`Format::None`] and for sizes past `u64::MAX`.
pub fn image_size(format: Format, width: u32, height: u32, depth: u32) -> u64 {
    let total = image_size_u128(format, width, height, depth);
    assert!(
        total <= u64::MAX as u128,
        "image size overflows u64: {}x{}x{} {}",
        width,
        height,
        depth,
        format
    );
    total as u64
}

/// 32-bit bounded variant of [`image_size`] for callers whose storage
/// interface caps allocations at 4 GiB.
///
/// Overflow is reported as [`FormatError::SizeOverflow`] instead of
/// asserting; the error carries the true size (saturated to `u64::MAX`).
pub fn image_size_checked(
    format: Format,
    width: u32,
    height: u32,
    depth: u32,
) -> Result<u32, FormatError> {
    let total = image_size_u128(format, width, height, depth);
    if unlikely(total > u32::MAX as u128) {
        return Err(FormatError::SizeOverflow {
            actual: u64::try_from(total).unwrap_or(u64::MAX),
        });
    }
    Ok(total as u32)
}

/// Byte stride from one block row to the next.
///
/// For non-compressed formats this is the byte width of one texel row; for
/// compressed formats it is the byte width of one row of blocks, partial
/// blocks rounded up. Always satisfies
/// `row_stride(f, w) * ceil(h / bh) * d == image_size(f, w, h, d)`.
pub fn row_stride(format: Format, width: u32) -> u64 {
    let desc = format.descriptor();
    let blocks_x = (width as u64).div_ceil(desc.block_width as u64);
    // <= 2^32 blocks of <= 255 bytes; cannot overflow u64.
    blocks_x * desc.bytes_per_block as u64
}

fn image_size_u128(format: Format, width: u32, height: u32, depth: u32) -> u128 {
    let desc = format.descriptor();
    let blocks_x = (width as u128).div_ceil(desc.block_width as u128);
    let blocks_y = (height as u128).div_ceil(desc.block_height as u128);
    blocks_x * desc.bytes_per_block as u128 * blocks_y * depth as u128
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(Format::R8G8B8A8Unorm, 64, 64, 1, 64 * 64 * 4)]
    #[case(Format::BgrUnorm8, 7, 3, 1, 7 * 3 * 3)]
    #[case(Format::RgbaFloat32, 16, 16, 4, 16 * 16 * 4 * 16)]
    #[case(Format::ZUnorm16, 1920, 1080, 1, 1920 * 1080 * 2)]
    fn uncompressed_sizes_are_exact(
        #[case] format: Format,
        #[case] w: u32,
        #[case] h: u32,
        #[case] d: u32,
        #[case] expected: u64,
    ) {
        assert_eq!(image_size(format, w, h, d), expected);
    }

    // Partial blocks round up: a 1x1 DXT1 image still occupies one 8-byte
    // block, and 5 texels of width span two blocks.
    #[rstest]
    #[case(Format::RgbDxt1, 1, 1, 1, 8)]
    #[case(Format::RgbDxt1, 4, 4, 1, 8)]
    #[case(Format::RgbDxt1, 5, 4, 1, 16)]
    #[case(Format::RgbDxt1, 5, 5, 1, 32)]
    #[case(Format::RgbaDxt5, 8, 8, 1, 4 * 16)]
    #[case(Format::RgbFxt1, 8, 4, 1, 16)]
    #[case(Format::RgbFxt1, 9, 4, 1, 32)]
    #[case(Format::Etc2Rgba8Eac, 16, 16, 2, 16 * 16 * 2)]
    fn compressed_sizes_round_up_to_blocks(
        #[case] format: Format,
        #[case] w: u32,
        #[case] h: u32,
        #[case] d: u32,
        #[case] expected: u64,
    ) {
        assert_eq!(image_size(format, w, h, d), expected);
    }

    #[test]
    fn zero_dimensions_yield_zero_bytes() {
        for f in valid_formats() {
            assert_eq!(image_size(f, 0, 16, 16), 0, "{f:?}");
            assert_eq!(image_size(f, 16, 0, 16), 0, "{f:?}");
            assert_eq!(image_size(f, 16, 16, 0), 0, "{f:?}");
            assert_eq!(row_stride(f, 0), 0, "{f:?}");
        }
    }

    #[test]
    fn row_stride_decomposes_image_size() {
        let dims = [(1u32, 1u32), (3, 5), (4, 4), (5, 4), (640, 480), (63, 63)];
        for f in valid_formats() {
            let (_, bh) = f.block_dimensions();
            for (w, h) in dims {
                let rows = (h as u64).div_ceil(bh as u64);
                for d in [1u32, 3] {
                    assert_eq!(
                        row_stride(f, w) * rows * d as u64,
                        image_size(f, w, h, d),
                        "{f:?} {w}x{h}x{d}"
                    );
                }
            }
        }
    }

    #[test]
    fn checked_variant_agrees_below_the_limit() {
        assert_eq!(
            image_size_checked(Format::R8G8B8A8Unorm, 4096, 4096, 1),
            Ok(4096 * 4096 * 4)
        );
        assert_eq!(image_size_checked(Format::RgbDxt1, 0, 4, 1), Ok(0));
    }

    #[test]
    fn checked_variant_signals_overflow() {
        // 65536 * 65536 * 4 bytes = 16 GiB, well past the u32 limit.
        let err = image_size_checked(Format::R8G8B8A8Unorm, 65536, 65536, 1).unwrap_err();
        assert_eq!(
            err,
            crate::FormatError::SizeOverflow {
                actual: 65536 * 65536 * 4
            }
        );
    }

    #[test]
    fn wide_path_handles_giant_images() {
        // Exceeds u32 but fits u64 comfortably.
        assert_eq!(
            image_size(Format::RgbaFloat32, 100_000, 100_000, 1),
            100_000 * 100_000 * 16
        );
    }

    #[test]
    #[should_panic(expected = "overflows u64")]
    fn absurd_requests_assert() {
        let _ = image_size(Format::RgbaFloat32, u32::MAX, u32::MAX, u32::MAX);
    }
}
