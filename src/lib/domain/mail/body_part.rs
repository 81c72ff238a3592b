//! Message body parts

use std::{fmt, fs, path::Path};

use lettre::message::{header::ContentType, Attachment, SinglePart};
use uuid::Uuid;

use crate::domain::mail::errors::MailError;

/// Links an inline image part to its `<img src="cid:...">` reference
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContentId(String);

impl ContentId {
    /// Generate a fresh, process-unique content identifier
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// The identifier without angle brackets
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An HTML fragment referencing this identifier
    pub fn img_tag(&self) -> String {
        format!("<img src=\"cid:{}\">", self.0)
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One constituent piece of a multi-part message
#[derive(Clone, Debug, PartialEq)]
pub enum BodyPart {
    /// `text/plain`
    PlainText(String),

    /// `text/html`
    Html(String),

    /// An image displayed inline, referenced from HTML by its content ID
    InlineImage {
        /// The content identifier
        content_id: ContentId,

        /// The MIME type guessed from the file extension
        content_type: ContentType,

        /// The image bytes
        bytes: Vec<u8>,
    },

    /// A file attachment
    Attachment {
        /// The filename presented to the recipient
        filename: String,

        /// The MIME type guessed from the file extension
        content_type: ContentType,

        /// The file bytes
        bytes: Vec<u8>,
    },
}

impl BodyPart {
    /// Read an inline image from disk
    pub fn inline_image(path: &Path, content_id: ContentId) -> Result<Self, MailError> {
        let bytes = read(path)?;

        Ok(Self::InlineImage {
            content_id,
            content_type: content_type_for(path)?,
            bytes,
        })
    }

    /// Read an attachment from disk, named after the last path component
    pub fn attachment(path: &Path) -> Result<Self, MailError> {
        let bytes = read(path)?;

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::Attachment {
            filename,
            content_type: content_type_for(path)?,
            bytes,
        })
    }

    /// Render this part as a MIME single part
    pub fn to_single_part(&self) -> SinglePart {
        match self {
            Self::PlainText(text) => SinglePart::plain(text.clone()),
            Self::Html(html) => SinglePart::html(html.clone()),
            Self::InlineImage {
                content_id,
                content_type,
                bytes,
            } => Attachment::new_inline(content_id.to_string())
                .body(bytes.clone(), content_type.clone()),
            Self::Attachment {
                filename,
                content_type,
                bytes,
            } => Attachment::new(filename.clone()).body(bytes.clone(), content_type.clone()),
        }
    }
}

fn read(path: &Path) -> Result<Vec<u8>, MailError> {
    fs::read(path).map_err(|source| MailError::ResourceUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

// Only parses the literals below.
fn content_type_for(path: &Path) -> anyhow::Result<ContentType> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let mime = match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("json") => "application/json",
        Some("txt") => "text/plain",
        Some("csv") => "text/csv",
        Some("htm" | "html") => "text/html",
        _ => "application/octet-stream",
    };

    Ok(ContentType::parse(mime)?)
}

#[cfg(test)]
mod tests {
    use std::{io::Write, path::PathBuf};

    use tempfile::TempDir;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_generated_content_ids_are_unique() {
        let first = ContentId::generate();
        let second = ContentId::generate();

        assert_ne!(first, second);
    }

    #[test]
    fn test_img_tag_references_content_id() {
        let id = ContentId::generate();

        assert_eq!(id.img_tag(), format!("<img src=\"cid:{}\">", id.as_str()));
    }

    #[test]
    fn test_content_type_from_extension() -> TestResult {
        assert_eq!(
            content_type_for(Path::new("logo.PNG"))?,
            ContentType::parse("image/png")?
        );
        assert_eq!(
            content_type_for(Path::new("photo.jpeg"))?,
            ContentType::parse("image/jpeg")?
        );
        assert_eq!(
            content_type_for(Path::new("report.pdf"))?,
            ContentType::parse("application/pdf")?
        );

        Ok(())
    }

    #[test]
    fn test_every_known_extension_parses() {
        for name in [
            "a.png", "a.jpg", "a.jpeg", "a.gif", "a.webp", "a.bmp", "a.svg", "a.pdf", "a.zip",
            "a.json", "a.txt", "a.csv", "a.htm", "a.html",
        ] {
            assert!(content_type_for(Path::new(name)).is_ok(), "{}", name);
        }
    }

    #[test]
    fn test_unknown_extension_is_octet_stream() -> TestResult {
        assert_eq!(
            content_type_for(Path::new("Makefile"))?,
            ContentType::parse("application/octet-stream")?
        );

        Ok(())
    }

    #[test]
    fn test_attachment_is_named_after_file() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("notes.txt");
        fs::File::create(&path)?.write_all(b"remember the milk")?;

        let part = BodyPart::attachment(&path)?;

        match part {
            BodyPart::Attachment {
                filename, bytes, ..
            } => {
                assert_eq!(filename, "notes.txt");
                assert_eq!(bytes, b"remember the milk".to_vec());
            }
            _ => panic!("expected BodyPart::Attachment"),
        }

        Ok(())
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let result = BodyPart::attachment(&PathBuf::from("missing.txt"));

        assert!(matches!(
            result,
            Err(MailError::ResourceUnavailable { path, .. }) if path == PathBuf::from("missing.txt")
        ));
    }

    #[test]
    fn test_inline_image_keeps_content_id() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("logo.png");
        fs::write(&path, [0x89, b'P', b'N', b'G'])?;

        let id = ContentId::generate();
        let part = BodyPart::inline_image(&path, id.clone())?;

        assert!(matches!(
            part,
            BodyPart::InlineImage { content_id, .. } if content_id == id
        ));

        Ok(())
    }
}
