use std::path::{Path, PathBuf};

/// Expand a leading `~` to the home directory; everything else is kept verbatim.
///
/// Non-UTF-8 paths are returned unchanged.
pub fn expand_user(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}
