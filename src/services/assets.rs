use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

pub const PUBLIC_DIR: &str = "public";

/// Locates front-end files under a configured root.
///
/// Order: `<root>/<name>`, `<root>/public/<name>`, then (if enabled) a walk
/// of `<root>` sorted by file name so the first match is stable.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    root: PathBuf,
    recursive: bool,
}

impl AssetResolver {
    pub fn new(root: impl Into<PathBuf>, recursive: bool) -> Self {
        Self {
            root: root.into(),
            recursive,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, filename: &str) -> Option<PathBuf> {
        let direct = self.root.join(filename);
        if direct.is_file() {
            return Some(direct);
        }

        let public = self.root.join(PUBLIC_DIR).join(filename);
        if public.is_file() {
            return Some(public);
        }

        if !self.recursive {
            return None;
        }

        let found = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
            .filter_map(Result::ok)
            .find(|e| e.file_type().is_file() && e.file_name() == filename)
            .map(DirEntry::into_path);

        if let Some(path) = &found {
            debug!("asset {} found at {}", filename, path.display());
        }
        found
    }

    /// `<root>/public` when it exists, for the `/static` mount.
    pub fn public_dir(&self) -> Option<PathBuf> {
        let dir = self.root.join(PUBLIC_DIR);
        dir.is_dir().then_some(dir)
    }

    /// Names of the entries directly under the root, sorted.
    pub fn list_root(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("cannot list {}: {}", self.root.display(), err);
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Regular files directly under the root, sorted.
    pub fn list_root_files(&self) -> Vec<String> {
        self.list_root()
            .into_iter()
            .filter(|name| self.root.join(name).is_file())
            .collect()
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}
