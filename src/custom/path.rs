/// Normalize a path to forward slashes and clean it lexically.
///
/// Repeated separators collapse, `.` segments disappear, `..` cancels the
/// segment before it and trailing separators are dropped. A path that cleans
/// away to nothing, the empty string included, becomes `"."`.
pub fn fix_path(path: &str) -> String {
    let slashed = path.replace('\\', "/");
    let rooted = slashed.starts_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in slashed.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                // `..` at the root is the root
                _ if rooted => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if rooted {
        format!("/{}", joined)
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Compute the virtual path of a discovered file.
///
/// With a non-empty `base`, the first occurrence of `base` in the real path is
/// replaced by `prefix` (both normalized). A path that does not contain `base`
/// passes through unchanged. With an empty `base` the normalized real path is
/// returned and `prefix` is not applied.
pub fn map_path(real: &str, base: &str, prefix: &str) -> String {
    let fixed = fix_path(real);
    if base.is_empty() {
        return fixed;
    }

    let mapped = fixed.replacen(&fix_path(base), &fix_path(prefix), 1);
    fix_path(&mapped)
}
