//! Paths inside the Zellij plugin sandbox.

use std::path::PathBuf;

/// File name of the span export inside [`get_data_dir`].
pub const TRACE_FILE_NAME: &str = "rolodex-otlp.json";

/// Directory for plugin-owned files: `/host/.local/share/zellij/rolodex`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("rolodex")
}

/// Where exported spans are written.
#[must_use]
pub fn trace_file_path() -> PathBuf {
    get_data_dir().join(TRACE_FILE_NAME)
}

/// Rewrites a leading `~` to the sandbox home mount.
///
/// `~user/...` forms are left alone.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_home_prefix_only() {
        assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
        assert_eq!(expand_tilde("~bob/theme.toml"), "~bob/theme.toml");
        assert_eq!(expand_tilde("themes/~/x"), "themes/~/x");
    }

    #[test]
    fn trace_file_lives_in_data_dir() {
        assert_eq!(
            trace_file_path(),
            PathBuf::from("/host/.local/share/zellij/rolodex/rolodex-otlp.json")
        );
    }
}
