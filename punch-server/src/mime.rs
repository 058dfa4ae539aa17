//! Content type inference from the file extension

use std::path::Path;

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Content type for `path`; extension match is exact (case-sensitive)
pub fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html",
        Some("js") => "text/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",
        Some("wasm") => "application/wasm",
        _ => DEFAULT_CONTENT_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(content_type_for(Path::new("/site/index.html")), "text/html");
        assert_eq!(content_type_for(Path::new("pkg/punch_web.js")), "text/javascript");
        assert_eq!(content_type_for(Path::new("favicon.ico")), "image/x-icon");
        assert_eq!(content_type_for(Path::new("photo.jpg")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("pkg/punch_web_bg.wasm")), "application/wasm");
    }

    #[test]
    fn test_fallback() {
        assert_eq!(content_type_for(Path::new("notes.txt")), DEFAULT_CONTENT_TYPE);
        assert_eq!(content_type_for(Path::new("Makefile")), DEFAULT_CONTENT_TYPE);
        assert_eq!(content_type_for(Path::new("photo.jpeg")), DEFAULT_CONTENT_TYPE);
        assert_eq!(content_type_for(Path::new("INDEX.HTML")), DEFAULT_CONTENT_TYPE);
    }
}
