//! Uploaded images and the names they are stored under.

/// Image formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
}

impl ImageKind {
    /// Resolve a declared media type against the allow-list.
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        match media_type.trim().to_ascii_lowercase().as_str() {
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }

    pub fn media_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}

/// A single file received with a create or update request.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub original_name: String,
    pub media_type: String,
    pub data: Vec<u8>,
}

impl ImageUpload {
    pub fn new(
        original_name: impl Into<String>,
        media_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            original_name: original_name.into(),
            media_type: media_type.into(),
            data,
        }
    }
}

/// Derive the stored name for an upload.
///
/// The original name is lower-cased and every character outside
/// `[a-z0-9._-]` becomes `-`, followed by `-<millis>.<ext>`. The result is a
/// single URL path segment needing no escaping. The original extension is
/// kept as part of the name: `"My Photo.PNG"` becomes
/// `my-photo.png-<millis>.png`.
pub fn stored_file_name(original_name: &str, kind: ImageKind, timestamp_millis: i64) -> String {
    let name: String = original_name
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '.' | '_' | '-' => c,
            _ => '-',
        })
        .collect();

    format!("{}-{}.{}", name, timestamp_millis, kind.extension())
}

/// Compose the public URL of a stored image from the request origin.
pub fn image_url(origin: &str, file_name: &str) -> String {
    format!("{}/images/{}", origin.trim_end_matches('/'), file_name)
}
