/// Extension (lowercase, no dot) to MIME type.
///
/// Kept sorted by extension so lookups can binary search.
pub const MIME_TYPES: &[(&str, &str)] = &[
    ("3gp", "video/3gpp"),
    ("aac", "audio/aac"),
    ("aif", "audio/x-aiff"),
    ("aiff", "audio/x-aiff"),
    ("arw", "image/x-sony-arw"),
    ("avi", "video/x-msvideo"),
    ("avif", "image/avif"),
    ("bmp", "image/bmp"),
    ("cr2", "image/x-canon-cr2"),
    ("css", "text/css"),
    ("csv", "text/csv"),
    ("dng", "image/x-adobe-dng"),
    ("doc", "application/msword"),
    ("flac", "audio/flac"),
    ("gif", "image/gif"),
    ("gz", "application/gzip"),
    ("heic", "image/heic"),
    ("heif", "image/heif"),
    ("htm", "text/html"),
    ("html", "text/html"),
    ("ico", "image/vnd.microsoft.icon"),
    ("jpe", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("js", "text/javascript"),
    ("json", "application/json"),
    ("m4a", "audio/mp4"),
    ("m4v", "video/x-m4v"),
    ("md", "text/markdown"),
    ("mid", "audio/midi"),
    ("midi", "audio/midi"),
    ("mkv", "video/x-matroska"),
    ("mov", "video/quicktime"),
    ("mp3", "audio/mpeg"),
    ("mp4", "video/mp4"),
    ("mpeg", "video/mpeg"),
    ("mpg", "video/mpeg"),
    ("nef", "image/x-nikon-nef"),
    ("oga", "audio/ogg"),
    ("ogg", "audio/ogg"),
    ("ogv", "video/ogg"),
    ("opus", "audio/opus"),
    ("pdf", "application/pdf"),
    ("png", "image/png"),
    ("psd", "image/vnd.adobe.photoshop"),
    ("svg", "image/svg+xml"),
    ("tar", "application/x-tar"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("ts", "video/mp2t"),
    ("txt", "text/plain"),
    ("wav", "audio/x-wav"),
    ("webm", "video/webm"),
    ("webp", "image/webp"),
    ("wmv", "video/x-ms-wmv"),
    ("xml", "application/xml"),
    ("zip", "application/zip"),
];

fn lookup(ext: &str) -> Option<&'static str> {
    MIME_TYPES
        .binary_search_by(|(k, _)| (*k).cmp(ext))
        .ok()
        .map(|i| MIME_TYPES[i].1)
}

/// Guess a MIME type from an extension, with or without its leading dot.
/// Tries the extension as given, then lowercased.
pub fn guess_mime_type(extension: &str) -> Option<&'static str> {
    let ext = extension.strip_prefix('.').unwrap_or(extension);
    if ext.is_empty() {
        return None;
    }
    lookup(ext).or_else(|| lookup(&ext.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_lowercase() {
        for pair in MIME_TYPES.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{:?} out of order", pair);
        }
        for (ext, _) in MIME_TYPES {
            assert_eq!(*ext, ext.to_ascii_lowercase());
        }
    }

    #[test]
    fn guess_mime_type_cases() {
        let cases: &[(&str, Option<&str>)] = &[
            (".jpg", Some("image/jpeg")),
            ("JPG", Some("image/jpeg")),
            (".Mp4", Some("video/mp4")),
            (".flac", Some("audio/flac")),
            (".unknownext", None),
            (".", None),
            ("", None),
        ];

        for (ext, expected) in cases {
            assert_eq!(guess_mime_type(ext), *expected, "extension {:?}", ext);
        }
    }
}
