//! `catalog.toml`-backed catalog repository.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use snapp_core::repository::CatalogRepository;
use snapp_core::vaycover::Vaycover;
use snapp_core::{Catalog, Result, SnappError};

use crate::dto::CatalogFileV1;
use crate::paths::SnappPaths;
use crate::storage::AtomicTomlFile;

/// Reads and writes the catalog as a single versioned TOML file.
///
/// A missing or blank file yields the built-in catalog, so a fresh install
/// works without any setup.
#[derive(Clone)]
pub struct TomlCatalogRepository {
    file: Arc<AtomicTomlFile<CatalogFileV1>>,
}

impl TomlCatalogRepository {
    /// Repository over `catalog.toml` in the config directory, or under
    /// `base_path` when given.
    pub fn new(base_path: Option<&Path>) -> Result<Self> {
        let path = SnappPaths::new(base_path).catalog_file()?;
        Ok(Self::at(path))
    }

    pub fn at(path: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicTomlFile::new(path)),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    fn load_blocking(file: &AtomicTomlFile<CatalogFileV1>) -> Result<Catalog> {
        let catalog = match file.load()? {
            Some(dto) => {
                let catalog = dto.into_domain()?;
                catalog.validate()?;
                info!(path = %file.path().display(), "Loaded catalog file");
                catalog
            }
            None => {
                warn!(path = %file.path().display(), "No catalog file, using built-in catalog");
                Catalog::builtin()
            }
        };
        Ok(catalog)
    }

    /// Records one more squad member for a vaycover under the file lock and
    /// returns the updated vaycover together with any rewards just unlocked.
    ///
    /// The first join materializes the full catalog on disk.
    pub async fn join_vaycover(&self, id: &str) -> Result<(Vaycover, Vec<String>)> {
        let file = Arc::clone(&self.file);
        let id = id.to_string();
        run_blocking(move || {
            file.update(
                || CatalogFileV1::from_domain(&Catalog::builtin()),
                |dto| {
                    let mut catalog = dto.clone().into_domain()?;
                    catalog.validate()?;
                    let mut vaycovers = catalog.vaycovers.vaycovers().to_vec();
                    let vaycover = vaycovers
                        .iter_mut()
                        .find(|v| v.id == id)
                        .ok_or_else(|| SnappError::not_found("vaycover", id.clone()))?;
                    let unlocked = vaycover.record_join();
                    let updated = vaycover.clone();
                    catalog.vaycovers = snapp_core::vaycover::VaycoverCatalog::new(vaycovers);
                    *dto = CatalogFileV1::from_domain(&catalog);
                    info!(
                        vaycover = %updated.id,
                        squad_progress = updated.squad_progress,
                        unlocked = unlocked.len(),
                        "Recorded squad join"
                    );
                    Ok((updated, unlocked))
                },
            )
        })
        .await
    }
}

#[async_trait::async_trait]
impl CatalogRepository for TomlCatalogRepository {
    async fn load(&self) -> Result<Catalog> {
        let file = Arc::clone(&self.file);
        let catalog = run_blocking(move || Self::load_blocking(&file)).await?;
        catalog.log_loaded("toml");
        Ok(catalog)
    }

    async fn save(&self, catalog: &Catalog) -> Result<()> {
        catalog.validate()?;
        let file = Arc::clone(&self.file);
        let dto = CatalogFileV1::from_domain(catalog);
        run_blocking(move || file.save(&dto)).await?;
        info!(path = %self.path().display(), "Saved catalog file");
        Ok(())
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| SnappError::internal(format!("blocking task failed: {e}")))?
}
