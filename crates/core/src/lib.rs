pub mod catalog;
pub mod config;
pub mod fetcher;
pub mod pipeline;
pub mod product;
pub mod refresh;
pub mod store;
pub mod testing;

pub use catalog::Catalog;
pub use config::{load_config, load_config_from_str, Config, ConfigError, StoreConfig};
pub use fetcher::{FetchError, ProductFetcher};
pub use pipeline::{DateRange, FilterSpec, Page, SearchField, SortOption, SortSpec, PAGE_SIZE};
pub use product::{default_taxonomy, CategorySpec, PricingTier, Product, Taxonomy};
pub use refresh::{RefreshConfig, RefreshOrchestrator, RefreshState, RefreshStatus};
pub use store::{
    FileMedium, MemoryMedium, Snapshot, SnapshotStore, StorageMedium, SNAPSHOT_VERSION,
};
