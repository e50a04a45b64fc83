use std::path::Path;
use walkdir::WalkDir;

/// Recursively delete a file or directory tree.
///
/// A missing path is a successful no-op. Symbolic links are removed as
/// links, never followed, so a link pointing outside the tree cannot drag
/// foreign files into the deletion. Directory children are deleted
/// fail-fast: the first error aborts the walk and leaves later siblings in
/// place.
pub fn delete_tree(path: &Path) -> Result<(), std::io::Error> {
    let meta = match std::fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    if !meta.is_dir() {
        return std::fs::remove_file(path);
    }

    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        delete_tree(&entry.path())?;
    }
    std::fs::remove_dir(path)
}

/// Delete a directory tree and recreate the empty root, so subsequent
/// writes to the location succeed.
pub fn clear_dir(path: &Path) -> Result<(), std::io::Error> {
    delete_tree(path)?;
    std::fs::create_dir_all(path)
}

/// Compute total size of a directory recursively. Missing paths count as 0.
pub fn tree_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}

/// Get size of a file or directory.
pub fn entry_size(path: &Path) -> u64 {
    if path.is_dir() {
        tree_size(path)
    } else {
        path.metadata().map(|m| m.len()).unwrap_or(0)
    }
}

/// Format byte count as human-readable string.
pub fn format_size(bytes: u64) -> String {
    if bytes >= 1_073_741_824 {
        format!("{:.2} GB", bytes as f64 / 1_073_741_824.0)
    } else if bytes >= 1_048_576 {
        format!("{:.2} MB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1_024 {
        format!("{:.2} KB", bytes as f64 / 1_024.0)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn delete_missing_path_is_a_no_op() {
        let tmp = TempDir::new().unwrap();
        let ghost = tmp.path().join("never-created");
        assert!(delete_tree(&ghost).is_ok());
        assert!(!ghost.exists());
    }

    #[test]
    fn delete_populated_tree_removes_everything() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("cache");
        std::fs::create_dir_all(root.join("a/b")).unwrap();
        std::fs::write(root.join("top.bin"), b"xxxx").unwrap();
        std::fs::write(root.join("a/one.bin"), b"yy").unwrap();
        std::fs::write(root.join("a/b/two.bin"), b"z").unwrap();

        delete_tree(&root).unwrap();
        assert!(!root.exists());
        assert_eq!(tree_size(&root), 0);
    }

    #[test]
    fn delete_plain_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("single.tmp");
        std::fs::write(&file, b"data").unwrap();
        delete_tree(&file).unwrap();
        assert!(!file.exists());
    }

    #[cfg(unix)]
    #[test]
    fn symlink_target_survives_deletion() {
        let tmp = TempDir::new().unwrap();
        let outside = tmp.path().join("outside");
        std::fs::create_dir(&outside).unwrap();
        std::fs::write(outside.join("keep.txt"), b"keep me").unwrap();

        let root = tmp.path().join("cache");
        std::fs::create_dir(&root).unwrap();
        std::os::unix::fs::symlink(&outside, root.join("link")).unwrap();

        delete_tree(&root).unwrap();
        assert!(!root.exists());
        assert!(outside.join("keep.txt").exists());
    }

    #[test]
    fn clear_dir_leaves_empty_root() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("cache");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(root.join("stale.bin"), b"stale").unwrap();

        clear_dir(&root).unwrap();
        assert!(root.exists());
        assert_eq!(std::fs::read_dir(&root).unwrap().count(), 0);
    }

    #[test]
    fn tree_size_sums_all_files() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("sized");
        std::fs::create_dir_all(root.join("sub")).unwrap();
        std::fs::write(root.join("ten.bin"), vec![0u8; 10]).unwrap();
        std::fs::write(root.join("twenty.bin"), vec![0u8; 20]).unwrap();
        std::fs::write(root.join("sub/thirty.bin"), vec![0u8; 30]).unwrap();

        assert_eq!(tree_size(&root), 60);
    }

    #[test]
    fn tree_size_of_missing_path_is_zero() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(tree_size(&tmp.path().join("nope")), 0);
    }
}
