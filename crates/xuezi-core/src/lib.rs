pub mod audio;
pub mod catalog;
pub mod language;
pub mod search;

pub use audio::{AudioError, AudioPlayer, AudioStatus};
pub use catalog::{Catalog, CatalogError, CatalogLoader};
pub use language::{IdentityFolder, RomanizationFolder};
pub use search::{MatchField, SearchEngine, results_heading};
