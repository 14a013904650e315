//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from the current directory
///
/// Returns the path to the config file if found
///
/// # Example
/// ```text
/// /home/user/notes/trips/2024/  ← cwd
/// /home/user/notes/mdx-map.toml ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Walk up from `start` looking for `config_name`.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_parent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("trips").join("2024");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("mdx-map.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("mdx-map.toml")).unwrap();
        assert_eq!(found, dir.path().join("mdx-map.toml"));
    }

    #[test]
    fn test_find_config_prefers_nearest() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("trips");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("mdx-map.toml"), "").unwrap();
        fs::write(nested.join("mdx-map.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("mdx-map.toml")).unwrap();
        assert_eq!(found, nested.join("mdx-map.toml"));
    }

    #[test]
    fn test_find_config_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        assert_eq!(find_config_file_from(dir.path(), &path), None);

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file_from(Path::new("/"), &path), Some(path));
    }
}
