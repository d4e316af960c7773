use std::borrow::Cow;
use std::path::{Path, PathBuf};

use symcheck_catalogue::Catalogue;

/// Environment variable naming a catalogue file, read when `--catalogue`
/// is not given.
pub const CATALOGUE_ENV: &str = "SYMCHECK_CATALOGUE";

/// Where the active catalogue comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueSource {
    Builtin,
    File(PathBuf),
}

impl CatalogueSource {
    pub fn from_flag(path: Option<&Path>) -> Self {
        match path {
            Some(p) => CatalogueSource::File(p.to_path_buf()),
            None => CatalogueSource::Builtin,
        }
    }

    pub fn load(&self) -> eyre::Result<Cow<'static, Catalogue>> {
        match self {
            CatalogueSource::Builtin => {
                tracing::debug!("using built-in catalogue");
                Ok(Cow::Borrowed(Catalogue::builtin()))
            }
            CatalogueSource::File(path) => {
                let catalogue = symcheck_catalogue::file::load_catalogue(path).map_err(|e| {
                    eyre::eyre!("failed to load catalogue at {}: {e}", path.display())
                })?;
                Ok(Cow::Owned(catalogue))
            }
        }
    }
}
