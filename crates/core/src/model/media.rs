//! Resolution of scenario media references.

/// Shown in place of a scenario image that fails to load.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/600x400?text=Imagen+No+Encontrada";

/// Resolve a scenario `mediaSrc` against the configured base path.
///
/// - empty references stay empty
/// - `http`-prefixed references are absolute and returned verbatim
/// - anything else loses one leading `/` and is appended to `base_path`
#[must_use]
pub fn resolve_media_src(src: &str, base_path: &str) -> String {
    if src.is_empty() {
        return String::new();
    }
    if src.starts_with("http") {
        return src.to_string();
    }

    let clean = src.strip_prefix('/').unwrap_or(src);
    if base_path.is_empty() || base_path.ends_with('/') {
        format!("{base_path}{clean}")
    } else {
        format!("{base_path}/{clean}")
    }
}
