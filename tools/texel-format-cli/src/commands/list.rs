use crate::error::CliError;
use argh::FromArgs;
use texel_format_registry::{ColorEncoding, Format};

#[derive(FromArgs, Debug)]
/// List the catalog: one line per format with ordinal, name and block size
#[argh(subcommand, name = "list")]
pub struct ListCmd {
    /// only show block-compressed formats
    #[argh(switch)]
    pub compressed: bool,

    /// only show sRGB-encoded formats
    #[argh(switch)]
    pub srgb: bool,
}

pub fn handle_list_command(cmd: ListCmd) -> Result<(), CliError> {
    for format in Format::all_values().iter().copied() {
        if format == Format::None {
            continue;
        }
        if cmd.compressed && !format.is_compressed() {
            continue;
        }
        if cmd.srgb && format.color_encoding() != ColorEncoding::NonLinear {
            continue;
        }
        let (bw, bh) = format.block_dimensions();
        println!(
            "{:>3}  {:<32} {:?}  {}x{}x{}B",
            format as u32,
            format.name(),
            format.storage_class(),
            bw,
            bh,
            format.bytes_per_block(),
        );
    }
    Ok(())
}
