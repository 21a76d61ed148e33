//! Static illustrative images keyed by action.

use anyhow::{Context, Result};
use image::DynamicImage;
use std::path::PathBuf;

/// Read-only lookup of an image asset by key (e.g. `switch_on_light.jpg`).
pub trait AssetStore {
    fn load(&self, key: &str) -> Result<DynamicImage>;
}

/// Assets stored as files under a single directory.
#[derive(Clone, Debug)]
pub struct DirAssetStore {
    root: PathBuf,
}

impl DirAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl AssetStore for DirAssetStore {
    fn load(&self, key: &str) -> Result<DynamicImage> {
        let path = self.path_for(key);
        log::debug!("assets: loading {}", path.display());
        image::open(&path).with_context(|| format!("load asset {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_existing_asset() -> Result<()> {
        let dir = tempfile::tempdir()?;
        image::RgbImage::new(4, 3).save(dir.path().join("unknown.png"))?;

        let store = DirAssetStore::new(dir.path());
        let img = store.load("unknown.png")?;
        assert_eq!((img.width(), img.height()), (4, 3));
        Ok(())
    }

    #[test]
    fn missing_asset_names_the_path() {
        let store = DirAssetStore::new("/nonexistent/luis");
        let err = store.load("switch_on_toaster.jpg").unwrap_err();
        assert!(format!("{err:#}").contains("switch_on_toaster.jpg"));
    }
}
