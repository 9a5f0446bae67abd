//! Small-file persistence helpers
//!
//! Features:
//! - Atomic replace (write tmp sibling, then rename over the target)
//! - JSON load with fallback: missing or corrupt files are logged, not raised

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Sibling temp path used while writing `path`
fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace `path` with `contents` so readers never observe a half-written file
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}

/// Read and parse a JSON file; `None` if it is missing or unreadable
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("{} not found", path.display());
            return None;
        }
        Err(e) => {
            log::warn!("Failed to read {}: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring corrupt {}: {}", path.display(), e);
            None
        }
    }
}

/// Serialize `value` as pretty JSON and write it atomically
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    write_atomic(path, json.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        n: u32,
    }

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("flappy-persist-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_tmp_path_is_sibling() {
        let p = Path::new("/a/b/highscore.txt");
        assert_eq!(tmp_path(p), PathBuf::from("/a/b/highscore.txt.tmp"));
    }

    #[test]
    fn test_write_atomic_replaces() {
        let path = scratch("atomic.txt");
        write_atomic(&path, b"1").unwrap();
        write_atomic(&path, b"22").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "22");
        assert!(!tmp_path(&path).exists());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_json_round_trip_and_fallbacks() {
        let path = scratch("sample.json");
        save_json(&path, &Sample { n: 7 }).unwrap();
        assert_eq!(load_json::<Sample>(&path), Some(Sample { n: 7 }));

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_json::<Sample>(&path), None);

        let _ = fs::remove_file(&path);
        assert_eq!(load_json::<Sample>(&path), None);
    }
}
