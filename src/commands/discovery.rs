//! Discover apps and their actions from the scripts folder.
//!
//! Layout: `{scripts_dir}/{app}/{action}.sh`. Listings are sorted by name so
//! table row order does not depend on the filesystem.

use std::fs;
use std::io;
use std::path::Path;

/// App names: the sub-directories of `scripts_dir`
pub fn list_apps(scripts_dir: &Path) -> io::Result<Vec<String>> {
    let mut apps = Vec::new();

    for entry in fs::read_dir(scripts_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        if let Some(name) = visible_name(&entry.file_name()) {
            apps.push(name);
        }
    }

    apps.sort();
    Ok(apps)
}

/// Action names of an app: its script files without extension
pub fn list_actions(scripts_dir: &Path, app: &str) -> io::Result<Vec<String>> {
    let mut actions = Vec::new();

    for entry in fs::read_dir(scripts_dir.join(app))? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        let Some(stem) = path.file_stem().and_then(visible_name) else {
            continue;
        };
        actions.push(stem);
    }

    actions.sort();
    Ok(actions)
}

/// UTF-8 name that is not a dotfile
fn visible_name(name: &std::ffi::OsStr) -> Option<String> {
    name.to_str()
        .filter(|s| !s.is_empty() && !s.starts_with('.'))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_discovery_is_sorted_and_skips_dotfiles() {
        let dir = tempfile::tempdir().unwrap();
        let gmail = dir.path().join("Gmail");
        fs::create_dir_all(&gmail).unwrap();
        fs::create_dir_all(dir.path().join("Dropbox")).unwrap();
        fs::write(dir.path().join("README"), "").unwrap();
        fs::write(gmail.join("Gmail_send.sh"), "").unwrap();
        fs::write(gmail.join("Gmail_open_inbox.sh"), "").unwrap();
        fs::write(gmail.join(".swp"), "").unwrap();

        assert_eq!(list_apps(dir.path()).unwrap(), vec!["Dropbox", "Gmail"]);
        assert_eq!(
            list_actions(dir.path(), "Gmail").unwrap(),
            vec!["Gmail_open_inbox", "Gmail_send"]
        );
        assert!(list_actions(dir.path(), "Dropbox").unwrap().is_empty());
    }
}
