pub mod catalog;
pub mod snapshot;

pub use catalog::CatalogStore;
pub use snapshot::CatalogSnapshot;
