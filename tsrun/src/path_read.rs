use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// The contents of a file, together with its path.
pub struct PathRead {
    pub path: PathBuf,
    pub text: String,
}

impl PathRead {
    /// Read the whole file, where the path "-" denotes stdin.
    pub fn new(path: &Path) -> io::Result<Self> {
        let text = if path == Path::new("-") {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        } else {
            std::fs::read_to_string(path)?
        };
        log::info!("Read {} bytes from {}", text.len(), path.display());
        let path = path.to_path_buf();
        Ok(Self { path, text })
    }

    /// Return stdin if no files given, else lazily read the files.
    pub fn from_pathbufs(files: &[PathBuf]) -> Box<dyn Iterator<Item = io::Result<Self>> + '_> {
        if files.is_empty() {
            Box::new(std::iter::once(Self::new(Path::new("-"))))
        } else {
            Box::new(files.iter().map(|file| Self::new(file)))
        }
    }
}
