use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use intake_core::SelectedFile;
use uuid::Uuid;

/// What a live preview URL points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSource {
    pub path: PathBuf,
    pub mime_type: String,
}

/// Allocates transient preview URLs of the form `{base}/{uuid}`.
///
/// Cloning is cheap; clones share the same table of live URLs.
#[derive(Clone)]
pub struct PreviewRegistry {
    base: Arc<str>,
    live: Arc<Mutex<HashMap<Uuid, PreviewSource>>>,
}

impl fmt::Debug for PreviewRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewRegistry")
            .field("base", &self.base)
            .field("live", &self.live_count())
            .finish()
    }
}

impl PreviewRegistry {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: Arc::from(base.trim_end_matches('/')),
            live: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    // A poisoned lock only means another holder panicked mid-insert/remove;
    // the map itself is still consistent.
    fn table(&self) -> MutexGuard<'_, HashMap<Uuid, PreviewSource>> {
        self.live.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Allocate a preview URL for `file` without reading its content.
    pub fn allocate(&self, file: &SelectedFile) -> PreviewUrl {
        let id = Uuid::new_v4();
        self.table().insert(
            id,
            PreviewSource {
                path: file.path.clone(),
                mime_type: file.mime_type.clone(),
            },
        );
        tracing::trace!(%id, name = %file.name, "Allocated preview URL");

        PreviewUrl {
            id,
            url: format!("{}/{}", self.base, id),
            registry: self.clone(),
        }
    }

    pub fn resolve(&self, id: Uuid) -> Option<PreviewSource> {
        self.table().get(&id).cloned()
    }

    /// Resolve a full preview URL previously handed out by this registry.
    pub fn resolve_url(&self, url: &str) -> Option<PreviewSource> {
        let id = url
            .strip_prefix(&*self.base)?
            .strip_prefix('/')?
            .parse::<Uuid>()
            .ok()?;
        self.resolve(id)
    }

    /// Number of URLs currently alive
    pub fn live_count(&self) -> usize {
        self.table().len()
    }

    fn revoke(&self, id: Uuid) {
        if self.table().remove(&id).is_some() {
            tracing::trace!(%id, "Revoked preview URL");
        }
    }
}

/// Scoped preview URL. The URL stays resolvable exactly as long as this handle lives.
pub struct PreviewUrl {
    id: Uuid,
    url: String,
    registry: PreviewRegistry,
}

impl PreviewUrl {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl fmt::Debug for PreviewUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PreviewUrl").field(&self.url).finish()
    }
}

impl fmt::Display for PreviewUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Drop for PreviewUrl {
    fn drop(&mut self) {
        self.registry.revoke(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> SelectedFile {
        SelectedFile::new(name, 10, "image/png", format!("/tmp/{name}"))
    }

    #[test]
    fn allocate_builds_url_under_base() {
        let registry = PreviewRegistry::new("/previews/");
        let url = registry.allocate(&image("a.png"));
        assert_eq!(url.as_str(), format!("/previews/{}", url.id()));
        assert_eq!(registry.live_count(), 1);
    }

    #[test]
    fn resolve_returns_source_while_alive() {
        let registry = PreviewRegistry::new("/previews");
        let url = registry.allocate(&image("a.png"));

        let source = registry.resolve(url.id()).unwrap();
        assert_eq!(source.path, PathBuf::from("/tmp/a.png"));
        assert_eq!(source.mime_type, "image/png");
        assert_eq!(registry.resolve_url(url.as_str()), Some(source));
    }

    #[test]
    fn drop_revokes() {
        let registry = PreviewRegistry::new("/previews");
        let url = registry.allocate(&image("a.png"));
        let id = url.id();
        let full = url.to_string();

        drop(url);

        assert!(registry.resolve(id).is_none());
        assert!(registry.resolve_url(&full).is_none());
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn resolve_url_rejects_foreign_urls() {
        let registry = PreviewRegistry::new("/previews");
        let _url = registry.allocate(&image("a.png"));
        assert!(registry.resolve_url("/other/123").is_none());
        assert!(registry.resolve_url("/previews/not-a-uuid").is_none());
    }

    #[test]
    fn clones_share_the_table() {
        let registry = PreviewRegistry::new("/previews");
        let clone = registry.clone();
        let url = clone.allocate(&image("a.png"));
        assert!(registry.resolve(url.id()).is_some());
    }
}
