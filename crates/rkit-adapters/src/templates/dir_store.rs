//! Filesystem template store.
//!
//! Loads template trees from a directory laid out as one sub-directory per
//! tree, named after [`TemplateTreeId::dir_name`]:
//!
//! ```text
//! templates/
//!   base/
//!     public/index.html
//!     src/index.tsx
//!     ...
//!   components-mui/
//!   router/
//!   ...
//! ```
//!
//! Every file under a tree directory becomes a template file with its path
//! relative to that directory. Content is read eagerly on `get`, so edits
//! to the directory are picked up per run without restarting anything.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use rkit_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{TemplateSource, TemplateTree, TemplateTreeId},
    error::RkitResult,
};

/// Template store backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Tree ids for which this directory provides content. Used to warn
    /// about incomplete overrides at startup.
    pub fn available(&self) -> Vec<TemplateTreeId> {
        TemplateTreeId::ALL
            .into_iter()
            .filter(|id| self.root.join(id.dir_name()).is_dir())
            .collect()
    }
}

impl TemplateStore for DirStore {
    fn get(&self, id: TemplateTreeId) -> RkitResult<TemplateTree> {
        let dir = self.root.join(id.dir_name());
        if !dir.is_dir() {
            return Err(ApplicationError::MissingTemplate { tree: id }.into());
        }

        let mut tree = TemplateTree::new(id);
        for entry in WalkDir::new(&dir).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: dir.clone(),
                reason: format!("Failed to walk template directory: {e}"),
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let relative = path
                .strip_prefix(&dir)
                .map_err(|e| ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: format!("Path outside template directory: {e}"),
                })?;

            let content = match std::fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    // binary or unreadable files are skipped, not fatal
                    warn!(path = %path.display(), error = %e, "skipping unreadable template file");
                    continue;
                }
            };

            debug!(tree = %id, file = %relative.display(), "loaded template file");
            tree = tree.with_file(relative, TemplateSource::Owned(content));
        }

        tree.validate()?;
        Ok(tree)
    }
}
