use std::fs;
use std::io;
use std::path::Path;

/// Read a file, returning `Ok(None)` when it does not exist.
///
/// Any other failure (permissions, path is a directory) is returned as-is.
pub fn read_if_exists(path: &Path) -> io::Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// True when the content holds nothing but whitespace.
pub fn is_blank(content: &[u8]) -> bool {
    content.iter().all(u8::is_ascii_whitespace)
}

/// Create or truncate `path` and write `content`.
pub fn write_file(path: &Path, content: &[u8]) -> io::Result<()> {
    fs::write(path, content)
}
