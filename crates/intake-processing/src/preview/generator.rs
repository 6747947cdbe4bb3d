use std::io;

use intake_core::{IntakeError, IntakeResult, MediaKind, SelectedFile};

use super::{PreviewEntry, PreviewRegistry};
use crate::text::{decode_text, truncate_chars};

/// Derives the preview list for a selection.
#[derive(Debug, Clone)]
pub struct PreviewGenerator {
    registry: PreviewRegistry,
    snippet_chars: usize,
}

impl PreviewGenerator {
    pub fn new(registry: PreviewRegistry, snippet_chars: usize) -> Self {
        Self {
            registry,
            snippet_chars,
        }
    }

    pub fn registry(&self) -> &PreviewRegistry {
        &self.registry
    }

    /// Build one preview per file, in selection order.
    ///
    /// Text files are read one at a time; each read completes before the next
    /// file is looked at. On failure every URL allocated so far is revoked.
    pub async fn generate(&self, files: &[SelectedFile]) -> IntakeResult<Vec<PreviewEntry>> {
        let mut previews = Vec::with_capacity(files.len());

        for file in files {
            let name = file.name.clone();
            let entry = match file.kind() {
                MediaKind::Image => PreviewEntry::Image {
                    name,
                    preview_url: self.registry.allocate(file),
                },
                MediaKind::Text => PreviewEntry::Text {
                    name,
                    text_snippet: self.read_snippet(file).await?,
                },
                MediaKind::Other => PreviewEntry::Opaque { name },
            };
            previews.push(entry);
        }

        tracing::debug!(count = previews.len(), "Generated previews");
        Ok(previews)
    }

    async fn read_snippet(&self, file: &SelectedFile) -> IntakeResult<String> {
        let bytes = tokio::fs::read(file.path()).await.map_err(|e| {
            IntakeError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", file.path().display(), e),
            ))
        })?;
        let text = decode_text(&bytes);
        Ok(truncate_chars(&text, self.snippet_chars).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn generator(registry: &PreviewRegistry) -> PreviewGenerator {
        PreviewGenerator::new(registry.clone(), 200)
    }

    fn write(dir: &Path, name: &str, mime: &str, content: &[u8]) -> SelectedFile {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        SelectedFile::new(name, content.len() as u64, mime, path)
    }

    #[tokio::test]
    async fn image_and_text_example() {
        let dir = tempfile::tempdir().unwrap();
        let registry = PreviewRegistry::new("/previews");
        let files = vec![
            write(dir.path(), "a.png", "image/png", &[0x89, b'P', b'N', b'G']),
            write(dir.path(), "b.txt", "text/plain", b"hello"),
        ];

        let previews = generator(&registry).generate(&files).await.unwrap();

        assert_eq!(previews.len(), 2);
        assert_eq!(previews[0].name(), "a.png");
        assert!(!previews[0].preview_url().unwrap().is_empty());
        assert!(previews[0].text_snippet().is_none());
        assert_eq!(previews[1].name(), "b.txt");
        assert_eq!(previews[1].text_snippet(), Some("hello"));
        assert!(previews[1].preview_url().is_none());
    }

    #[tokio::test]
    async fn text_snippet_is_prefix_of_content() {
        let dir = tempfile::tempdir().unwrap();
        let registry = PreviewRegistry::new("/previews");
        let content: String = (0..500).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
        let files = vec![
            write(dir.path(), "long.txt", "text/plain", content.as_bytes()),
            write(dir.path(), "short.csv", "text/csv", b"a,b\n1,2"),
        ];

        let previews = generator(&registry).generate(&files).await.unwrap();

        let long = previews[0].text_snippet().unwrap();
        assert_eq!(long.chars().count(), 200);
        assert_eq!(long, &content[..200]);
        assert_eq!(previews[1].text_snippet(), Some("a,b\n1,2"));
    }

    #[tokio::test]
    async fn other_types_carry_name_only() {
        let dir = tempfile::tempdir().unwrap();
        let registry = PreviewRegistry::new("/previews");
        let files = vec![
            write(dir.path(), "doc.pdf", "application/pdf", b"%PDF"),
            write(dir.path(), "blob", "", b"???"),
        ];

        let previews = generator(&registry).generate(&files).await.unwrap();

        for entry in &previews {
            assert!(entry.preview_url().is_none());
            assert!(entry.text_snippet().is_none());
        }
        assert_eq!(previews[1].name(), "blob");
        assert_eq!(registry.live_count(), 0);
    }

    #[tokio::test]
    async fn images_are_not_read() {
        let registry = PreviewRegistry::new("/previews");
        let files = vec![SelectedFile::new(
            "ghost.png",
            0,
            "image/png",
            "/definitely/not/here.png",
        )];

        let previews = generator(&registry).generate(&files).await.unwrap();
        assert!(previews[0].preview_url().is_some());
    }

    #[tokio::test]
    async fn order_and_length_follow_input() {
        let dir = tempfile::tempdir().unwrap();
        let registry = PreviewRegistry::new("/previews");
        let files: Vec<SelectedFile> = (0..12)
            .map(|i| match i % 3 {
                0 => write(dir.path(), &format!("{i}.png"), "image/png", b"x"),
                1 => write(dir.path(), &format!("{i}.txt"), "text/plain", b"t"),
                _ => write(dir.path(), &format!("{i}.zip"), "application/zip", b"z"),
            })
            .collect();

        let previews = generator(&registry).generate(&files).await.unwrap();

        let names: Vec<&str> = previews.iter().map(|p| p.name()).collect();
        let expected: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, expected);
        assert_eq!(registry.live_count(), 4);
    }

    #[tokio::test]
    async fn failed_read_revokes_allocated_urls() {
        let dir = tempfile::tempdir().unwrap();
        let registry = PreviewRegistry::new("/previews");
        let files = vec![
            write(dir.path(), "a.png", "image/png", b"x"),
            SelectedFile::new("gone.txt", 3, "text/plain", dir.path().join("gone.txt")),
        ];

        let err = generator(&registry).generate(&files).await.unwrap_err();

        assert!(matches!(err, IntakeError::Io(_)));
        assert_eq!(registry.live_count(), 0);
    }

    #[tokio::test]
    async fn invalid_utf8_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let registry = PreviewRegistry::new("/previews");
        let files = vec![write(dir.path(), "bad.txt", "text/plain", b"ok\xFF")];

        let previews = generator(&registry).generate(&files).await.unwrap();
        assert_eq!(previews[0].text_snippet(), Some("ok\u{FFFD}"));
    }
}
