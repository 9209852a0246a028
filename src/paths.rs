//! Path helpers for script-supplied file names.

use std::env;
use std::path::{Component, Path, PathBuf};

/// Normalize a user-supplied path string.
///
/// Trims whitespace and one pair of surrounding double quotes, expands a
/// leading `~` to `$HOME`, and drops redundant separators and `.` segments.
/// `..` is kept since resolving it would need the filesystem. Returns an
/// empty string for blank input.
pub fn clean_path(raw: &str) -> String {
    let mut s = raw.trim();
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        s = s[1..s.len() - 1].trim();
    }
    if s.is_empty() {
        return String::new();
    }

    let expanded = expand_home(s);

    let mut out = PathBuf::new();
    for comp in expanded.components() {
        match comp {
            Component::CurDir => {}
            other => out.push(other.as_os_str()),
        }
    }

    if out.as_os_str().is_empty() {
        // Input was only `.` segments.
        return ".".to_string();
    }
    out.to_string_lossy().into_owned()
}

fn expand_home(s: &str) -> PathBuf {
    let rest = if s == "~" {
        Some("")
    } else {
        s.strip_prefix("~/")
    };

    match (rest, env::var_os("HOME")) {
        (Some(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => PathBuf::from(s),
    }
}

pub fn is_relative_path(path: &str) -> bool {
    Path::new(path).is_relative()
}

/// Join a relative `cleaned` path onto `base`; absolute paths pass through.
pub fn resolve_path(cleaned: &str, base: &Path) -> PathBuf {
    if is_relative_path(cleaned) {
        base.join(cleaned)
    } else {
        PathBuf::from(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_env::{EnvGuard, env_lock};

    #[test]
    fn clean_path_blank_inputs_are_empty() {
        assert_eq!(clean_path(""), "");
        assert_eq!(clean_path("   "), "");
        assert_eq!(clean_path("\"\""), "");
        assert_eq!(clean_path(" \"  \" "), "");
    }

    #[test]
    fn clean_path_trims_and_unquotes() {
        assert_eq!(clean_path("  music/theme.ogg \n"), "music/theme.ogg");
        assert_eq!(clean_path("\"/srv/my music/a.mp3\""), "/srv/my music/a.mp3");
    }

    #[test]
    fn clean_path_collapses_separators_and_dot_segments() {
        assert_eq!(clean_path("/srv//music/./a.mp3"), "/srv/music/a.mp3");
        assert_eq!(clean_path("./sounds/a.ogg"), "sounds/a.ogg");
        assert_eq!(clean_path("sounds/"), "sounds");
        assert_eq!(clean_path("."), ".");
    }

    #[test]
    fn clean_path_keeps_parent_segments() {
        assert_eq!(clean_path("../shared/a.ogg"), "../shared/a.ogg");
    }

    #[test]
    fn clean_path_expands_home() {
        let _lock = env_lock();
        let _g = EnvGuard::set("HOME", "/home/player");
        assert_eq!(clean_path("~/music/a.ogg"), "/home/player/music/a.ogg");
        assert_eq!(clean_path("~"), "/home/player");
        assert_eq!(clean_path("~other/a.ogg"), "~other/a.ogg");
    }

    #[test]
    fn relative_and_absolute_detection() {
        assert!(is_relative_path("a.ogg"));
        assert!(is_relative_path("sub/a.ogg"));
        assert!(!is_relative_path("/a.ogg"));
    }

    #[test]
    fn resolve_path_joins_only_relative() {
        let base = Path::new("/srv/layout");
        assert_eq!(resolve_path("a.ogg", base), Path::new("/srv/layout/a.ogg"));
        assert_eq!(resolve_path("/x/a.ogg", base), Path::new("/x/a.ogg"));
    }
}
