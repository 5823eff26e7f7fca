//! JSON file persistence for a user profile snapshot.
//!
//! Writes go to a sibling `.tmp` file first and are renamed into place, so
//! a crash mid-write never leaves a truncated profile behind.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    domain::{Category, LimitEntity, Wallet},
    storage::Result,
};

const PROFILE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Serializable snapshot of everything the engine reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub wallets: Vec<Wallet>,
    #[serde(default)]
    pub limits: Vec<LimitEntity>,
}

#[derive(Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(default_root);
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn profile_path(&self, name: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_name(name), PROFILE_EXTENSION))
    }

    /// Loads a named profile, or an empty one if it was never saved.
    pub fn load(&self, name: &str) -> Result<Profile> {
        let path = self.profile_path(name);
        if !path.exists() {
            return Ok(Profile::default());
        }
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, name: &str, profile: &Profile) -> Result<PathBuf> {
        let path = self.profile_path(name);
        let json = serde_json::to_string_pretty(profile)?;
        write_atomic(&path, &json)?;
        tracing::debug!(profile = name, path = %path.display(), "profile saved");
        Ok(path)
    }
}

fn default_root() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("progress_core")
}

fn canonical_name(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace(' ', "_")
}

fn write_atomic(path: &Path, data: &str) -> std::io::Result<()> {
    let tmp_path = path.with_extension(TMP_SUFFIX);
    {
        let mut file = File::create(&tmp_path)?;
        file.write_all(data.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_are_filesystem_friendly() {
        assert_eq!(canonical_name("  My Profile "), "my_profile");
    }

    #[test]
    fn missing_profile_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(Some(dir.path().to_path_buf())).unwrap();
        let profile = store.load("never-saved").unwrap();
        assert!(profile.limits.is_empty());
    }
}
