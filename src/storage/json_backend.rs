use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::errors::Result;

use super::KeyValueStore;

const FILE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed store keeping one JSON document per key.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Resolves the file holding `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_name(key), FILE_EXTENSION))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&path)?;
        debug!(path = %path.display(), "loaded document");
        Ok(Some(data))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp = tmp_path(&path);
        write_staged(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        debug!(path = %path.display(), "saved document");
        Ok(())
    }
}

/// Maps a key to a file stem, one-to-one: ASCII letters, digits, `_` and `-`
/// pass through and every other byte becomes `%XX`.
fn canonical_name(name: &str) -> String {
    if name.is_empty() {
        return "%".into();
    }
    let mut stem = String::with_capacity(name.len());
    for byte in name.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'-' => stem.push(char::from(byte)),
            other => stem.push_str(&format!("%{:02X}", other)),
        }
    }
    stem
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    tmp.set_extension(format!("{}.{}", FILE_EXTENSION, TMP_SUFFIX));
    tmp
}

fn write_staged(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data")).unwrap();
        assert_eq!(store.get("accounting_transactions").unwrap(), None);
    }

    #[test]
    fn values_survive_reopening_the_directory() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("data");
        JsonFileStore::new(&root)
            .unwrap()
            .set("accounting_categories", r#"["Food"]"#)
            .unwrap();

        let reopened = JsonFileStore::new(&root).unwrap();
        assert_eq!(
            reopened.get("accounting_categories").unwrap().as_deref(),
            Some(r#"["Food"]"#)
        );
        assert!(root.join("accounting_categories.json").exists());
        assert!(!root.join("accounting_categories.json.tmp").exists());
    }

    #[test]
    fn keys_are_sanitized_into_file_names() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();
        let path = store.path_for("../Escape Me");
        assert_eq!(path.parent(), Some(dir.path()));
        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some("%2E%2E%2FEscape%20Me.json")
        );
        assert_eq!(
            store.path_for("accounting_transactions").file_name(),
            Some(std::ffi::OsStr::new("accounting_transactions.json"))
        );
    }

    #[test]
    fn distinct_keys_never_share_a_file() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();
        let keys = ["Ledger", "ledger", "a b", "a_b", "", "%"];
        let mut paths: Vec<_> = keys.iter().map(|key| store.path_for(key)).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), keys.len());

        store.set("a b", "[1]").unwrap();
        store.set("a_b", "[2]").unwrap();
        assert_eq!(store.get("a b").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.get("a_b").unwrap().as_deref(), Some("[2]"));
    }
}
