use super::Profile;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

const APP_DIR: &str = "liquid-ui";
const PROFILES_FILE: &str = "profiles.json";

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// The profile collection on disk, as one pretty-printed JSON array.
///
/// Every call goes to the file; nothing is cached. There is no locking, so
/// two overlapping load-modify-save sequences lose one of the updates.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Store at `~/.config/liquid-ui/profiles.json` (or the platform equivalent).
    pub fn user() -> Result<Self> {
        Self::default_path().map(Self::new)
    }

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            Error::persistence(PROFILES_FILE, "could not determine user config directory")
        })?;
        Ok(dir.join(APP_DIR).join(PROFILES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all profiles. A missing file is an empty collection.
    pub fn load(&self) -> Result<Vec<Profile>> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("{} does not exist yet", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(Error::persistence(
                    &self.path,
                    format!("read failed: {}", e),
                ));
            }
        };

        serde_json::from_str(&data)
            .map_err(|e| Error::persistence(&self.path, format!("parse failed: {}", e)))
    }

    /// Replace the file with `profiles`.
    ///
    /// Content goes to a sibling temp file first and is renamed over the
    /// target, so readers never see a half-written collection. Non-finite
    /// temperatures are rejected before anything is written.
    pub fn save(&self, profiles: &[Profile]) -> Result<()> {
        check_finite(profiles)?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| {
                Error::persistence(
                    &self.path,
                    format!("failed to create {}: {}", dir.display(), e),
                )
            })?;
        }

        let data = serde_json::to_string_pretty(profiles)
            .map_err(|e| Error::persistence(&self.path, format!("serialize failed: {}", e)))?;

        let tmp = self.tmp_path();
        if let Err(e) = std::fs::write(&tmp, data) {
            let _ = std::fs::remove_file(&tmp);
            return Err(Error::persistence(&self.path, format!("write failed: {}", e)));
        }
        if let Err(e) = std::fs::rename(&tmp, &self.path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(Error::persistence(&self.path, format!("rename failed: {}", e)));
        }

        log::info!(
            "saved {} profile(s) to {}",
            profiles.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Load, transform and save in one go. Not atomic against other writers.
    pub fn update<F>(&self, f: F) -> Result<Vec<Profile>>
    where
        F: FnOnce(Vec<Profile>) -> Vec<Profile>,
    {
        let profiles = f(self.load()?);
        self.save(&profiles)?;
        Ok(profiles)
    }

    fn tmp_path(&self) -> PathBuf {
        let n = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| PROFILES_FILE.to_string());
        self.path
            .with_file_name(format!(".{}.{}.{}.tmp", name, std::process::id(), n))
    }
}

fn check_finite(profiles: &[Profile]) -> Result<()> {
    for profile in profiles {
        if let Some(i) = profile
            .points
            .iter()
            .position(|p| !p.temperature.is_finite())
        {
            return Err(Error::Validation(format!(
                "profile '{}': point {} has non-finite temperature",
                profile.name,
                i + 1
            )));
        }
    }
    Ok(())
}
