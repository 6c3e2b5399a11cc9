use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A text file discovered under a corpus root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFile {
    pub path: PathBuf,
    /// Path relative to the corpus root
    pub relative: PathBuf,
}

/// Scan `root` recursively for `.txt` files.
///
/// Hidden files and directories (leading `.`) are skipped. Results are
/// sorted by path so batch output is stable across runs.
pub fn scan_corpus(root: &Path) -> Vec<TextFile> {
    let mut results = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }
        let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        results.push(TextFile {
            path: path.to_path_buf(),
            relative,
        });
    }

    log::debug!("found {} text file(s) under {}", results.len(), root.display());
    results
}

// The root itself is never treated as hidden.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "令和五年三月二日").unwrap();
    }

    #[test]
    fn test_scan_corpus_finds_nested_txt() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.txt");
        touch(dir.path(), "a/c.txt");
        touch(dir.path(), "a/d.md");

        let files = scan_corpus(dir.path());
        let rel: Vec<_> = files.iter().map(|f| f.relative.clone()).collect();
        assert_eq!(rel, vec![PathBuf::from("a/c.txt"), PathBuf::from("b.txt")]);
        assert!(files.iter().all(|f| f.path.starts_with(dir.path())));
    }

    #[test]
    fn test_scan_corpus_skips_hidden() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), ".hidden.txt");
        touch(dir.path(), ".git/x.txt");
        touch(dir.path(), "visible.txt");

        let files = scan_corpus(dir.path());
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative, PathBuf::from("visible.txt"));
    }

    #[test]
    fn test_scan_corpus_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_corpus(&dir.path().join("nope")).is_empty());
    }
}
