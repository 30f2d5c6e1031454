use crate::{Error, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Only load files with one of these extensions (no leading dot). Empty loads everything.
    pub extensions: Vec<String>,
}

impl LoadOptions {
    fn accepts(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) => self.extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)),
            None => false,
        }
    }
}

/// Read every regular file directly inside `dir`, sorted by file name.
pub fn load_files<P: AsRef<Path>>(dir: P, options: &LoadOptions) -> Result<Vec<SourceFile>> {
    let dir = dir.as_ref();
    let access = |path: &Path, source: std::io::Error| Error::CorpusAccess {
        path: path.to_path_buf(),
        source,
    };

    let meta = fs::metadata(dir).map_err(|e| access(dir, e))?;
    if !meta.is_dir() {
        return Err(access(dir, std::io::Error::other("not a directory")));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("filesystem loop"));
            Error::CorpusAccess { path, source }
        })?;
        let path = entry.path();
        if !entry.file_type().is_file() || !options.accepts(path) {
            continue;
        }
        let text = fs::read_to_string(path).map_err(|e| access(path, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        files.push(SourceFile { name, text });
    }
    tracing::info!(dir = %dir.display(), num_files = files.len(), "loaded corpus");
    Ok(files)
}
