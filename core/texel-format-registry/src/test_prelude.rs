//! Shared helpers for the unit tests in this crate.

pub use crate::descriptor::{
    BaseComposition, ChannelRole, ColorEncoding, FormatLayout, StorageClass,
};
pub use crate::format::Format;

/// All real catalog entries, sentinel excluded.
pub fn valid_formats() -> impl Iterator<Item = Format> {
    Format::all_values()
        .iter()
        .copied()
        .filter(|f| *f != Format::None)
}
