use std::sync::Arc;

use tokio::sync::RwLock;
use xuezi_config::Config;
use xuezi_core::{Catalog, SearchEngine};
use xuezi_lang_chinese::{JsonCatalogLoader, PinyinFolder};

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub catalog: Catalog,
    pub search: SearchEngine<PinyinFolder>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let catalog = JsonCatalogLoader::load_with_additional(
            config.catalog.embedded,
            &config.catalog.additional_paths,
        );
        tracing::info!("Catalog ready with {} words", catalog.len());

        Self {
            config: Arc::new(RwLock::new(config)),
            catalog,
            search: SearchEngine::new(PinyinFolder::new()),
        }
    }
}
