pub mod hsk;
pub mod loader;
pub mod romanization;
pub mod tones;

pub use loader::JsonCatalogLoader;
pub use romanization::{PinyinFolder, strip_tone_marks};
