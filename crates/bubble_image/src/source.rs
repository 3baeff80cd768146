//! Image sources

use std::fmt;
use std::path::{Path, PathBuf};

/// Where an item image comes from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    /// A file on disk
    File(PathBuf),
    /// Encoded bytes already in memory
    Bytes(Vec<u8>),
}

impl ImageSource {
    /// Resolve a catalog image URL against an asset directory
    ///
    /// Absolute paths are used as is.
    pub fn resolve(assets_dir: &Path, url: &str) -> Self {
        let path = Path::new(url);
        if path.is_absolute() {
            ImageSource::File(path.to_path_buf())
        } else {
            ImageSource::File(assets_dir.join(path))
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::File(path) => write!(f, "{}", path.display()),
            ImageSource::Bytes(data) => write!(f, "<{} bytes>", data.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative() {
        let source = ImageSource::resolve(Path::new("assets"), "magic_library.png");
        assert_eq!(
            source,
            ImageSource::File(PathBuf::from("assets/magic_library.png"))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ImageSource::Bytes(vec![0; 3]).to_string(), "<3 bytes>");
    }
}
