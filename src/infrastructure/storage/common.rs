use std::io::Write;
use std::path::{Component, Path, PathBuf};

use crate::application::ports::link_store::{StoreError, StoreResult};

pub const MARKDOWN_EXTENSION: &str = ".md";

/// Accepts a bare `*.md` base name. Anything that could escape the collection
/// directory (separators, `..`, absolute or prefixed paths) is rejected.
pub fn validate_filename(name: &str) -> StoreResult<&str> {
    if name.trim().is_empty() {
        return Err(StoreError::Validation("filename is required".into()));
    }
    if name.contains(['/', '\\', '\0']) || name.contains("..") {
        return Err(StoreError::Validation(format!("invalid filename '{}'", name)));
    }
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => {}
        _ => return Err(StoreError::Validation(format!("invalid filename '{}'", name))),
    }
    if name.len() <= MARKDOWN_EXTENSION.len() || !name.ends_with(MARKDOWN_EXTENSION) {
        return Err(StoreError::Validation(format!(
            "filename '{}' must end with {}",
            name, MARKDOWN_EXTENSION
        )));
    }
    Ok(name)
}

pub fn is_markdown_name(name: &str) -> bool {
    validate_filename(name).is_ok()
}

/// Replaces `path` with `contents` via a temp file in the same directory and
/// a rename, so readers never observe a partial write.
pub async fn write_atomic(path: PathBuf, contents: String) -> StoreResult<()> {
    let target = path.clone();
    tokio::task::spawn_blocking(move || write_atomic_blocking(&target, contents.as_bytes()))
        .await
        .map_err(|e| StoreError::io(path, std::io::Error::other(e)))?
}

fn write_atomic_blocking(path: &Path, bytes: &[u8]) -> StoreResult<()> {
    let dir = path
        .parent()
        .ok_or_else(|| StoreError::Validation(format!("no parent directory for {:?}", path)))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
    tmp.write_all(bytes)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| StoreError::io(tmp.path(), e))?;

    match std::fs::metadata(path) {
        Ok(meta) => tmp
            .as_file()
            .set_permissions(meta.permissions())
            .map_err(|e| StoreError::io(path, e))?,
        Err(_) => set_default_permissions(tmp.as_file()).map_err(|e| StoreError::io(path, e))?,
    }

    tmp.persist(path).map_err(|e| StoreError::io(path, e.error))?;
    Ok(())
}

#[cfg(unix)]
fn set_default_permissions(file: &std::fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_file: &std::fs::File) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn accepts_plain_markdown_names() {
        for name in ["links.md", "My Links.md", ".hidden.md", "v1.2-notes.md"] {
            assert_eq!(validate_filename(name).unwrap(), name);
        }
    }

    #[test]
    fn rejects_traversal_and_nesting() {
        for name in [
            "",
            "   ",
            "../etc/passwd.md",
            "..md",
            "a/b.md",
            "a\\b.md",
            "/abs.md",
            "..",
            "nul\0.md",
        ] {
            assert!(
                matches!(validate_filename(name), Err(StoreError::Validation(_))),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_other_extensions() {
        assert!(validate_filename("notes.txt").is_err());
        assert!(validate_filename(".md").is_err());
        assert!(validate_filename("README").is_err());
    }

    #[tokio::test]
    async fn atomic_write_creates_and_replaces() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.md");

        write_atomic(path.clone(), "first".into()).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first");

        write_atomic(path.clone(), "second".into()).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");

        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn atomic_write_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.md");
        std::fs::write(&path, "x").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640)).unwrap();

        write_atomic(path.clone(), "y".into()).await.unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);

        let fresh = dir.path().join("b.md");
        write_atomic(fresh.clone(), String::new()).await.unwrap();
        let mode = std::fs::metadata(&fresh).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }
}
