use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewScrollError {
    #[error("Invalid scroll step: block increment {block} must be >= unit increment {unit} >= 0")]
    InvalidScrollStep { block: i32, unit: i32 },

    #[error("Input is not valid UTF-8: {}", .0.display())]
    InvalidUtf8(PathBuf),

    #[error("Input is empty, nothing to view")]
    EmptyInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
