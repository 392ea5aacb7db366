use crate::commands::parse_format;
use crate::error::CliError;
use argh::FromArgs;
use texel_format_registry::{image_size, image_size_checked, row_stride, Format};

#[derive(FromArgs, Debug)]
/// Compute the byte size and row stride of an image
#[argh(subcommand, name = "size")]
pub struct SizeCmd {
    /// format name (case-insensitive) or raw ordinal
    #[argh(positional, from_str_fn(parse_format))]
    pub format: Format,

    /// image width in texels
    #[argh(positional)]
    pub width: u32,

    /// image height in texels
    #[argh(positional)]
    pub height: u32,

    /// image depth in texels (default 1)
    #[argh(option, default = "1")]
    pub depth: u32,

    /// enforce the 4 GiB allocation bound and fail on overflow
    #[argh(switch)]
    pub limit32: bool,
}

pub fn handle_size_command(cmd: SizeCmd) -> Result<(), CliError> {
    let total = if cmd.limit32 {
        image_size_checked(cmd.format, cmd.width, cmd.height, cmd.depth)? as u64
    } else {
        image_size(cmd.format, cmd.width, cmd.height, cmd.depth)
    };
    println!(
        "{} {}x{}x{}: {} bytes ({} bytes per block row)",
        cmd.format.name(),
        cmd.width,
        cmd.height,
        cmd.depth,
        total,
        row_stride(cmd.format, cmd.width),
    );
    Ok(())
}
