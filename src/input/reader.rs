use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::ViewScrollError;

const STDIN_NAME: &str = "<stdin>";

/// Read text from stdin or a file
pub struct InputReader;

impl InputReader {
    /// Read text from stdin or file path
    ///
    /// # Arguments
    /// * `path` - Optional file path. If None, reads from stdin.
    ///
    /// # Returns
    /// * `Ok(String)` - Non-empty UTF-8 text
    /// * `Err(ViewScrollError)` - If the text is empty, not UTF-8, or IO fails
    pub fn read_text(path: Option<&Path>) -> Result<String, ViewScrollError> {
        let (bytes, source) = match path {
            Some(file_path) => (fs::read(file_path)?, file_path.to_path_buf()),
            None => {
                let mut buffer = Vec::new();
                io::stdin().read_to_end(&mut buffer)?;
                (buffer, PathBuf::from(STDIN_NAME))
            }
        };

        Self::decode(bytes, source)
    }

    /// Display name for the title bar
    pub fn source_name(path: Option<&Path>) -> String {
        path.and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| STDIN_NAME.to_string())
    }

    fn decode(bytes: Vec<u8>, source: PathBuf) -> Result<String, ViewScrollError> {
        let text = String::from_utf8(bytes).map_err(|_| ViewScrollError::InvalidUtf8(source))?;

        if text.trim().is_empty() {
            return Err(ViewScrollError::EmptyInput);
        }

        Ok(text)
    }
}
