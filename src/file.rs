use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

/// Content of a layout file read into memory
#[derive(Debug, Clone)]
pub struct FileContent {
    /// Path the file was read from
    pub path: String,
    /// File content as valid UTF-8 string
    pub content: String,
    /// Byte length of the content
    pub len: usize,
    /// BLAKE3 hash of the content (hex-encoded)
    pub checksum: String,
}

/// Error types for file operations
#[derive(Debug)]
pub enum FileError {
    NotFound(String),
    IoError(String),
    InvalidUtf8(String),
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileError::NotFound(p) => write!(f, "File not found: {}", p),
            FileError::IoError(e) => write!(f, "I/O error: {}", e),
            FileError::InvalidUtf8(p) => write!(f, "Invalid UTF-8 in file: {}", p),
        }
    }
}

impl std::error::Error for FileError {}

impl From<io::Error> for FileError {
    fn from(err: io::Error) -> Self {
        FileError::IoError(err.to_string())
    }
}

/// Hex-encoded BLAKE3 hash of a text buffer
pub fn checksum(content: &str) -> String {
    blake3::hash(content.as_bytes()).to_hex().to_string()
}

/// Read a file from disk with UTF-8 validation
///
/// # Returns
/// * `Ok(FileContent)` - File content with metadata
/// * `Err(FileError)` - File not found, I/O error, or invalid UTF-8
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<FileContent, FileError> {
    let path_ref = path.as_ref();

    let bytes = fs::read(path_ref).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => FileError::NotFound(path_ref.display().to_string()),
        _ => FileError::from(err),
    })?;

    let content = String::from_utf8(bytes)
        .map_err(|_| FileError::InvalidUtf8(path_ref.display().to_string()))?;

    let len = content.len();
    let checksum = checksum(&content);
    debug!(path = %path_ref.display(), len, %checksum, "read file");

    Ok(FileContent {
        path: path_ref.display().to_string(),
        content,
        len,
        checksum,
    })
}

/// Overwrite a file with new content in a single write
///
/// There is no backup; a failure mid-write can leave the file truncated.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<(), FileError> {
    let path_ref = path.as_ref();
    fs::write(path_ref, content.as_bytes())?;
    debug!(path = %path_ref.display(), len = content.len(), "wrote file");
    Ok(())
}
