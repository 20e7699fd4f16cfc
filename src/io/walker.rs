use crate::errors::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Files with fewer lines than this hold no more than a single row and are skipped.
const MIN_LINES: usize = 2;

/// Collects candidate input files below a directory.
pub struct FileWalker {
    root: PathBuf,
    exclude: Vec<PathBuf>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            exclude: vec![],
        }
    }

    /// Never yield these paths (e.g. the report file itself).
    pub fn with_excluded(mut self, paths: Vec<PathBuf>) -> Self {
        self.exclude = paths;
        self
    }

    /// Every regular file under the root, recursively, in path order.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(&self.root).to_path_buf();
                match e.into_io_error() {
                    Some(io) => Error::file_system("cannot walk directory", path, io),
                    None => Error::Configuration(format!(
                        "filesystem loop detected under {}",
                        path.display()
                    )),
                }
            })?;
            let path = entry.path();

            // `is_file` follows symlinks, so linked inputs are analyzed too.
            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        if self.exclude.iter().any(|ex| same_file(ex, path)) {
            return false;
        }
        match count_lines(path) {
            Ok(lines) => lines >= MIN_LINES,
            Err(e) => {
                log::warn!("Skipping unreadable file {}: {}", path.display(), e);
                false
            }
        }
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

pub fn count_lines(path: &Path) -> Result<usize> {
    let content = std::fs::read_to_string(path)?;
    Ok(content.lines().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn counts_lines_with_and_without_trailing_newline() {
        let dir = TempDir::new().unwrap();
        assert_eq!(count_lines(&write(dir.path(), "a", "x\ny\n")).unwrap(), 2);
        assert_eq!(count_lines(&write(dir.path(), "b", "x\ny")).unwrap(), 2);
        assert_eq!(count_lines(&write(dir.path(), "c", "")).unwrap(), 0);
    }

    #[test]
    fn walks_recursively_and_skips_single_line_files() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "b/hien_two", "a\tb\tc\nd\te\tf\n");
        write(dir.path(), "a/csen_two", "a\tb\tc\nd\te\tf\n");
        write(dir.path(), "fren_one", "a\tb\tc\n");

        let files = FileWalker::new(dir.path().to_path_buf()).walk().unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["csen_two", "hien_two"]);
    }

    #[test]
    fn excluded_paths_are_skipped() {
        let dir = TempDir::new().unwrap();
        let report = write(dir.path(), "translation_stats.csv", "h\nrow\n");
        write(dir.path(), "hien_x", "a\tb\tc\nd\te\tf\n");

        let files = FileWalker::new(dir.path().to_path_buf())
            .with_excluded(vec![report])
            .walk()
            .unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("hien_x"));
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_inputs_are_followed() {
        let dir = TempDir::new().unwrap();
        let target = write(dir.path(), "data/hien_real", "a\tb\tc\nd\te\tf\n");
        std::fs::create_dir_all(dir.path().join("runs")).unwrap();
        let link = dir.path().join("runs/hien_link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let files = FileWalker::new(dir.path().join("runs")).walk().unwrap();
        assert_eq!(files, vec![link]);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlinks_are_ignored() {
        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("hien_gone")).unwrap();
        assert!(FileWalker::new(dir.path().to_path_buf()).walk().unwrap().is_empty());
    }
}
