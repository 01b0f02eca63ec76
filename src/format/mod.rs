//! Region persistence: wire format, storage backends and save/restore flow.

mod error;
mod regions;
mod store;
mod sync;

pub use error::{FormatError, StoreError};
pub use regions::{
    NodeEntry, RegionEntry, decode_region, decode_regions, encode_region, encode_regions,
};
pub use store::{FileStore, MemoryStore, RegionStore};
pub use sync::SyncController;
