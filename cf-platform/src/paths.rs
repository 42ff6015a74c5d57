//! Path helpers for resolving files referenced from other files.

/// Resolve `rel` against the directory part of `base`.
///
/// Everything after the last `/` in `base` is replaced by `rel`. A `base`
/// with no directory part yields `rel` unchanged.
pub fn relative_file_path(base: &str, rel: &str) -> String {
    match base.rfind('/') {
        Some(i) => {
            let mut path = String::with_capacity(i + 1 + rel.len());
            path.push_str(&base[..=i]);
            path.push_str(rel);
            path
        }
        None => rel.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_file_component() {
        assert_eq!(relative_file_path("art/trees/oak.cfdg", "leaf.cfdg"), "art/trees/leaf.cfdg");
        assert_eq!(relative_file_path("/abs/main.cfdg", "i.cfdg"), "/abs/i.cfdg");
    }

    #[test]
    fn test_bare_base_returns_rel() {
        assert_eq!(relative_file_path("main.cfdg", "include.cfdg"), "include.cfdg");
    }

    #[test]
    fn test_trailing_slash_base() {
        assert_eq!(relative_file_path("art/", "x.cfdg"), "art/x.cfdg");
    }
}
