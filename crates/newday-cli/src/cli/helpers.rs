use std::path::Path;

/// Render `path` relative to the project root when it lives under it.
pub fn display_rel(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

pub fn mark(present: bool) -> &'static str {
    if present {
        "yes"
    } else {
        "-"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_root_prefix() {
        assert_eq!(
            display_rel(Path::new("/work"), Path::new("/work/puzzles/5")),
            "puzzles/5"
        );
        assert_eq!(
            display_rel(Path::new("."), Path::new("./src/puzzles/day5.rs")),
            "src/puzzles/day5.rs"
        );
    }

    #[test]
    fn leaves_foreign_paths_alone() {
        assert_eq!(
            display_rel(Path::new("/work"), Path::new("/elsewhere/x")),
            "/elsewhere/x"
        );
    }
}
