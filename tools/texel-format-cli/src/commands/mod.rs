pub(crate) mod info;
pub(crate) mod list;
pub(crate) mod size;

use texel_format_registry::Format;

/// Parses a catalog entry from a CLI argument: either a canonical name
/// (case-insensitive, e.g. `rgba_dxt5`) or a raw ordinal.
pub(crate) fn parse_format(value: &str) -> Result<Format, String> {
    let found = if let Ok(ordinal) = value.parse::<u32>() {
        Format::from_index(ordinal)
    } else {
        let upper = value.to_ascii_uppercase();
        Format::all_values()
            .iter()
            .copied()
            .find(|f| f.name() == upper)
    };
    found
        .filter(|f| *f != Format::None)
        .ok_or_else(|| format!("{value:?} does not name a pixel format (try `list`)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_ordinals() {
        assert_eq!(parse_format("RGBA_DXT5"), Ok(Format::RgbaDxt5));
        assert_eq!(parse_format("rgba_dxt5"), Ok(Format::RgbaDxt5));
        assert_eq!(
            parse_format(&(Format::ZFloat32 as u32).to_string()),
            Ok(Format::ZFloat32)
        );
    }

    #[test]
    fn rejects_the_sentinel_and_garbage() {
        assert!(parse_format("NONE").is_err());
        assert!(parse_format("0").is_err());
        assert!(parse_format("999999").is_err());
        assert!(parse_format("R8G8B8A9_UNORM").is_err());
    }
}
