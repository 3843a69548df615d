//! File system side of site generation: mirroring static assets and
//! turning markdown pages into HTML files through a template.

mod pages;
mod static_files;

pub use pages::{
    CONTENT_PLACEHOLDER, TITLE_PLACEHOLDER, generate_page, generate_pages_recursive,
    render_template, scan_markdown_files,
};
pub use static_files::copy_static;

use std::fs;
use std::path::{Path, PathBuf};

use crate::{html::HtmlError, parsing::NoHeadingFoundError};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid source directory: {0}")]
    InvalidSourceDir(PathBuf),
    #[error("Invalid path: {0}")]
    InvalidPath(#[from] relative_path::FromPathError),
    #[error("No title in {path}: {source}")]
    NoHeading {
        path: PathBuf,
        source: NoHeadingFoundError,
    },
    #[error("Failed to render {path}: {source}")]
    Html { path: PathBuf, source: HtmlError },
}

/// Read a text file
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file, overwriting it
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}
