pub mod catalog;
pub mod common;
pub mod entry;

pub use crate::domain::error::SchemaViolation;
pub use catalog::{Catalog, CatalogBuilder};
pub use common::{EntryName, ManifestPath};
pub use entry::{
    CatalogEntry, CliCommands, ComponentEntry, EntryDraft, EntryMeta, ExampleEntry, FileDraft,
    FileManifestItem, Renderable,
};
