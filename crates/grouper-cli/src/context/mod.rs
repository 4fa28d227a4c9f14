//! Shared state resolved once per invocation: configuration, the snapshot
//! store and which scheme the command operates on.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use grouper_config::GrouperConfig;
use grouper_core::Scheme;
use grouper_engine::{EngineOptions, SchemeService};
use grouper_snapshot::{SnapshotStore, read_file, write_file};

use crate::cli::GlobalFlags;

/// Where the working scheme is read from and written back to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemeSource {
    File(PathBuf),
    Named(String),
}

impl SchemeSource {
    fn from_flags(flags: &GlobalFlags) -> Option<Self> {
        flags
            .scheme
            .clone()
            .map(Self::File)
            .or_else(|| flags.name.clone().map(Self::Named))
    }
}

pub struct AppContext {
    pub config: GrouperConfig,
    pub store: SnapshotStore,
    source: Option<SchemeSource>,
}

impl AppContext {
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = GrouperConfig::load_with_dotenv().context("failed to load configuration")?;
        Ok(Self::with_config(config, flags))
    }

    pub fn with_config(config: GrouperConfig, flags: &GlobalFlags) -> Self {
        let store = SnapshotStore::new(config.storage.snapshot_dir());
        Self {
            config,
            store,
            source: SchemeSource::from_flags(flags),
        }
    }

    pub fn engine_options(&self) -> EngineOptions {
        self.config.assignment.engine_options()
    }

    fn source(&self) -> anyhow::Result<&SchemeSource> {
        self.source.as_ref().context(
            "no scheme selected: pass --scheme <path> or --name <snapshot>",
        )
    }

    pub fn exists(&self) -> anyhow::Result<bool> {
        Ok(match self.source()? {
            SchemeSource::File(path) => path.exists(),
            SchemeSource::Named(name) => self.store.path_for(name)?.exists(),
        })
    }

    pub fn load(&self) -> anyhow::Result<Scheme> {
        let scheme = match self.source()? {
            SchemeSource::File(path) => read_file(path)
                .with_context(|| format!("failed to read scheme {}", path.display()))?,
            SchemeSource::Named(name) => self
                .store
                .load(name)
                .with_context(|| format!("failed to load snapshot '{name}'"))?,
        };
        Ok(scheme)
    }

    /// Load the working scheme and hand it to the engine, which validates it.
    pub fn open_service(&self, options: EngineOptions) -> anyhow::Result<SchemeService> {
        let (service, _report) = SchemeService::open(self.load()?, options)?;
        Ok(service)
    }

    pub fn save(&self, scheme: &Scheme) -> anyhow::Result<PathBuf> {
        match self.source()? {
            SchemeSource::File(path) => {
                ensure_parent(path)?;
                write_file(path, scheme)
                    .with_context(|| format!("failed to write scheme {}", path.display()))?;
                Ok(path.clone())
            }
            SchemeSource::Named(name) => Ok(self.store.save(name, scheme)?),
        }
    }

    pub fn ensure_absent(&self) -> anyhow::Result<()> {
        if self.exists()? {
            bail!("scheme already exists; pass --force to overwrite");
        }
        Ok(())
    }
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(())
}
