use crate::commands::parse_format;
use crate::error::CliError;
use argh::FromArgs;
use texel_format_registry::{ChannelRole, Format};

#[derive(FromArgs, Debug)]
/// Dump one format's full descriptor and its related formats
#[argh(subcommand, name = "info")]
pub struct InfoCmd {
    /// format name (case-insensitive) or raw ordinal
    #[argh(positional, from_str_fn(parse_format))]
    pub format: Format,
}

pub fn handle_info_command(cmd: InfoCmd) -> Result<(), CliError> {
    let format = cmd.format;
    let desc = format.descriptor();

    println!("{} (ordinal {})", format.name(), format as u32);
    println!("  layout:          {:?}", desc.layout);
    println!("  base:            {:?}", desc.base);
    println!("  storage:         {:?}", desc.storage);
    println!("  encoding:        {:?}", desc.encoding);
    let (bw, bh) = format.block_dimensions();
    println!("  block:           {bw}x{bh}, {} bytes", format.bytes_per_block());
    println!("  components:      {}", format.num_components());

    print!("  channel bits:   ");
    for role in ChannelRole::all_values() {
        let bits = format.channel_bits(*role);
        if bits > 0 {
            print!(" {role:?}={bits}");
        }
    }
    println!();

    let mut flags = Vec::new();
    if format.is_compressed() {
        flags.push("compressed");
    }
    if format.is_packed_depth_stencil() {
        flags.push("packed-depth-stencil");
    }
    if format.is_integer_color() {
        flags.push("integer-color");
    }
    flags.push(if format.is_signed() { "signed" } else { "unsigned" });
    println!("  flags:           {}", flags.join(", "));

    let linear = format.srgb_to_linear();
    if linear != format {
        println!("  linear twin:     {}", linear.name());
    }
    let uncompressed = format.uncompressed_equivalent();
    if uncompressed != format {
        println!("  decodes into:    {}", uncompressed.name());
    }
    let (transfer_type, comps) = format.transfer_type_and_comps();
    println!("  transfer:        {transfer_type:?} x{comps}");
    Ok(())
}
