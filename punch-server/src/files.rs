//! Static file lookup under a root directory

use std::path::{Component, Path, PathBuf};

use crate::error::ServeError;
use crate::http::{strip_query, Response};
use crate::mime::content_type_for;

/// Files served from one root directory
pub struct StaticFiles {
    root: PathBuf,
}

impl StaticFiles {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a request target to a path under the root.
    /// `/` is `/index.html`. Dot segments are normalized the way a URL
    /// parser does, so `..` stops at the root instead of leaving it.
    pub fn resolve(&self, target: &str) -> Result<PathBuf, ServeError> {
        let path = strip_query(target);
        let path = if path == "/" { "/index.html" } else { path };

        let mut parts = Vec::new();
        for component in Path::new(path.trim_start_matches('/')).components() {
            match component {
                Component::Normal(part) => parts.push(part),
                Component::ParentDir => {
                    parts.pop();
                }
                Component::CurDir => {}
                Component::RootDir | Component::Prefix(_) => {
                    return Err(ServeError::NotFound(PathBuf::from(path)));
                }
            }
        }

        let mut resolved = self.root.clone();
        resolved.extend(parts);
        Ok(resolved)
    }

    /// Read the file for `target`
    pub async fn read(&self, target: &str) -> Result<(PathBuf, Vec<u8>), ServeError> {
        let path = self.resolve(target)?;
        match tokio::fs::read(&path).await {
            Ok(data) => Ok((path, data)),
            Err(err) => Err(ServeError::from_io(path, err)),
        }
    }

    /// Full response for `target`; failures become 404 / 500 pages
    pub async fn serve(&self, target: &str) -> Response {
        match self.read(target).await {
            Ok((path, data)) => {
                log::info!("Request: {} -> {}", target, path.display());
                Response::ok(content_type_for(&path), data)
            }
            Err(err) => {
                match &err {
                    ServeError::Read { .. } => log::error!("Request: {} -> {}", target, err),
                    _ => log::warn!("Request: {} -> {}", target, err),
                }
                Response::from_error(&err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_root_to_index() {
        let files = StaticFiles::new("/srv/site");
        assert_eq!(files.resolve("/").unwrap(), PathBuf::from("/srv/site/index.html"));
        assert_eq!(files.resolve("/?cache=0").unwrap(), PathBuf::from("/srv/site/index.html"));
    }

    #[test]
    fn test_resolve_nested() {
        let files = StaticFiles::new("/srv/site");
        assert_eq!(files.resolve("/pkg/./punch_web.js").unwrap(), PathBuf::from("/srv/site/pkg/punch_web.js"));
    }

    #[test]
    fn test_resolve_parent_dirs_stay_under_root() {
        let files = StaticFiles::new("/srv/site");
        assert_eq!(files.resolve("/pkg/../index.html").unwrap(), PathBuf::from("/srv/site/index.html"));
        assert_eq!(files.resolve("/../secret.txt").unwrap(), PathBuf::from("/srv/site/secret.txt"));
        assert_eq!(files.resolve("/pkg/../../etc/passwd").unwrap(), PathBuf::from("/srv/site/etc/passwd"));
    }
}
