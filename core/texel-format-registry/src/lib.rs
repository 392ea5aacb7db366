#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
pub mod test_prelude;

pub mod descriptor;
pub mod error;
pub mod format;
pub mod query;
pub mod relationship;
pub mod size;

pub use descriptor::{
    validate_tables, BaseComposition, ChannelRole, ColorEncoding, FormatDescriptor, FormatLayout,
    StorageClass, MAX_ELEMENT_BYTES,
};
pub use error::FormatError;
pub use format::Format;
pub use relationship::{TransferFormat, TransferType};
pub use size::{image_size, image_size_checked, row_stride};
