use crate::core::loader;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum FileStatus {
    Present { bytes: u64 },
    Missing,
    Unreadable { message: String },
    NotAFile,
    InvalidJson { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileCheck {
    pub path: String,
    pub status: FileStatus,
}

impl FileCheck {
    pub fn is_ok(&self) -> bool {
        matches!(self.status, FileStatus::Present { .. })
    }
}

impl fmt::Display for FileCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            FileStatus::Present { bytes } => write!(f, "{}: present ({} bytes)", self.path, bytes),
            FileStatus::Missing => write!(f, "{}: missing", self.path),
            FileStatus::Unreadable { message } => write!(f, "{}: unreadable: {}", self.path, message),
            FileStatus::NotAFile => write!(f, "{}: not a regular file", self.path),
            FileStatus::InvalidJson { message } => {
                write!(f, "{}: invalid JSON: {}", self.path, message)
            }
        }
    }
}

/// Checks a prerequisite file exists. With `parse_json` the content must
/// also be well-formed JSON.
pub fn check_file(path: &str, parse_json: bool) -> FileCheck {
    let status = match std::fs::metadata(Path::new(path)) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileStatus::Missing,
        Err(e) => FileStatus::Unreadable {
            message: e.to_string(),
        },
        Ok(meta) if !meta.is_file() => FileStatus::NotAFile,
        Ok(meta) if !parse_json => FileStatus::Present { bytes: meta.len() },
        Ok(meta) => match std::fs::read(path) {
            Err(e) => FileStatus::InvalidJson {
                message: e.to_string(),
            },
            Ok(bytes) => match serde_json::from_slice::<serde_json::Value>(&bytes) {
                Ok(_) => FileStatus::Present { bytes: meta.len() },
                Err(e) => FileStatus::InvalidJson {
                    message: e.to_string(),
                },
            },
        },
    };

    FileCheck {
        path: path.to_string(),
        status,
    }
}

pub fn check_files<I, P>(paths: I, parse_json: bool) -> Vec<FileCheck>
where
    I: IntoIterator<Item = P>,
    P: AsRef<str>,
{
    paths
        .into_iter()
        .map(|path| check_file(path.as_ref(), parse_json))
        .collect()
}

/// Number of entries in a result file, using the same shape rules as the
/// filter's input.
pub async fn count_entries<S: Storage>(storage: &S, path: &str) -> Result<usize> {
    let entries = loader::load_entries(storage, path).await?;
    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::LocalStorage;
    use crate::utils::error::FilterError;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_check_present_and_missing() {
        let temp_dir = TempDir::new().unwrap();
        let present = write(&temp_dir, "users.json", "[]");
        let missing = temp_dir.path().join("gone.json");
        let missing = missing.to_str().unwrap();

        let checks = check_files([present.as_str(), missing], false);
        assert_eq!(checks[0].status, FileStatus::Present { bytes: 2 });
        assert!(checks[0].is_ok());
        assert_eq!(checks[1].status, FileStatus::Missing);
        assert!(checks[1].to_string().ends_with("gone.json: missing"));
    }

    #[test]
    fn test_lookup_failure_other_than_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let file = write(&temp_dir, "users.json", "[]");

        // A regular file used as a directory fails with ENOTDIR, not ENOENT.
        let check = check_file(&format!("{}/nested.json", file), false);
        assert!(matches!(check.status, FileStatus::Unreadable { .. }), "{:?}", check);
        assert!(!check.is_ok());
        assert!(check.to_string().contains("unreadable"));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let check = check_file(temp_dir.path().to_str().unwrap(), false);
        assert_eq!(check.status, FileStatus::NotAFile);
        assert!(!check.is_ok());
    }

    #[test]
    fn test_parse_json_flag() {
        let temp_dir = TempDir::new().unwrap();
        let broken = write(&temp_dir, "broken.json", "{\"age\": ");

        assert!(check_file(&broken, false).is_ok());
        let check = check_file(&broken, true);
        assert!(matches!(check.status, FileStatus::InvalidJson { .. }));
    }

    #[tokio::test]
    async fn test_count_entries_shapes() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());
        write(&temp_dir, "array.json", r#"[{"a":1},{"a":2},{"a":3}]"#);
        write(&temp_dir, "wrapped.json", r#"{"users":[{"a":1}]}"#);
        write(&temp_dir, "single.json", r#"{"a":1}"#);
        write(&temp_dir, "empty.json", "[]");

        assert_eq!(count_entries(&storage, "array.json").await.unwrap(), 3);
        assert_eq!(count_entries(&storage, "wrapped.json").await.unwrap(), 1);
        assert_eq!(count_entries(&storage, "single.json").await.unwrap(), 1);
        assert_eq!(count_entries(&storage, "empty.json").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_count_entries_errors() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());
        write(&temp_dir, "scalar.json", "7");

        assert!(matches!(
            count_entries(&storage, "missing.json").await,
            Err(FilterError::FileNotFound { .. })
        ));
        assert!(matches!(
            count_entries(&storage, "scalar.json").await,
            Err(FilterError::UnsupportedStructure { .. })
        ));
    }
}
