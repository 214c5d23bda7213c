//! Atomic TOML file access: temp file + fsync + rename, with an exclusive
//! lock around read-modify-write updates.

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};
use snapp_core::{Result, SnappError};

/// A handle to a TOML file that is never observed half-written.
///
/// - Writes go to a sibling temp file, are fsynced, then renamed over the target
/// - [`update`](Self::update) holds an exclusive lock for the whole load-modify-save
pub struct AtomicTomlFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicTomlFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and parses the file.
    ///
    /// Returns `Ok(None)` when the file is missing or blank.
    pub fn load(&self) -> Result<Option<T>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = toml::from_str(&content)?;
        Ok(Some(data))
    }

    /// Serializes `data` and atomically replaces the file with it.
    pub fn save(&self, data: &T) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let toml_string = toml::to_string_pretty(data)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(toml_string.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Locked read-modify-write.
    ///
    /// `default_value` stands in for a missing file. The file is only
    /// rewritten when `f` succeeds; its return value is passed through.
    pub fn update<R, F>(&self, default_value: impl FnOnce() -> T, f: F) -> Result<R>
    where
        F: FnOnce(&mut T) -> Result<R>,
    {
        let _lock = FileLock::acquire(&self.path)?;

        let mut data = match self.load()? {
            Some(data) => data,
            None => default_value(),
        };
        let result = f(&mut data)?;
        self.save(&data)?;
        Ok(result)
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| SnappError::io("Path has no parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| SnappError::io("Path has no file name"))?;
        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

/// Exclusive lock on a sibling `.lock` file, released on drop.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| SnappError::io(format!("Failed to acquire lock: {e}")))?;
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Counter {
        name: String,
        count: u32,
    }

    fn counter() -> Counter {
        Counter {
            name: "squad".to_string(),
            count: 0,
        }
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<Counter>::new(temp_dir.path().join("counter.toml"));

        file.save(&Counter { name: "squad".to_string(), count: 42 }).unwrap();
        let loaded = file.load().unwrap().unwrap();
        assert_eq!(loaded.count, 42);
        assert!(!temp_dir.path().join(".counter.toml.tmp").exists());
    }

    #[test]
    fn test_missing_and_blank_files_load_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("counter.toml");
        let file = AtomicTomlFile::<Counter>::new(path.clone());
        assert!(file.load().unwrap().is_none());

        fs::write(&path, "  \n").unwrap();
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_update_creates_then_increments() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<Counter>::new(temp_dir.path().join("counter.toml"));

        let first = file
            .update(counter, |c| {
                c.count += 10;
                Ok(c.count)
            })
            .unwrap();
        assert_eq!(first, 10);

        file.update(counter, |c| {
            c.count += 5;
            Ok(())
        })
        .unwrap();
        assert_eq!(file.load().unwrap().unwrap().count, 15);
        assert!(!temp_dir.path().join("counter.lock").exists());
    }

    #[test]
    fn test_failed_update_leaves_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<Counter>::new(temp_dir.path().join("counter.toml"));
        file.save(&counter()).unwrap();

        let result: Result<()> = file.update(counter, |c| {
            c.count = 99;
            Err(SnappError::invalid_input("nope"))
        });
        assert!(result.is_err());
        assert_eq!(file.load().unwrap().unwrap().count, 0);
    }

    #[test]
    fn test_malformed_file_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("counter.toml");
        fs::write(&path, "name = [unterminated").unwrap();
        let err = AtomicTomlFile::<Counter>::new(path).load().unwrap_err();
        assert!(err.is_serialization());
    }
}
