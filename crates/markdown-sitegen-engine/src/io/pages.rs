use std::fs;
use std::path::{Path, PathBuf};

use relative_path::{RelativePath, RelativePathBuf};

use super::{IoError, read_file, write_file};
use crate::parsing::{MarkdownOptions, extract_title, markdown_to_html_with};

/// Template placeholder replaced by the page title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
/// Template placeholder replaced by the rendered page body.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Substitutes every title and content placeholder in `template`.
pub fn render_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// Renders one markdown file through the template into `dest`.
///
/// A page without a `# ` title is rejected rather than written untitled.
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    options: &MarkdownOptions,
) -> Result<(), IoError> {
    log::info!(
        "Generating page from {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );

    let markdown = read_file(from)?;
    let template = read_file(template_path)?;

    let title = extract_title(&markdown).map_err(|source| IoError::NoHeading {
        path: from.to_path_buf(),
        source,
    })?;
    let content = markdown_to_html_with(&markdown, options).map_err(|source| IoError::Html {
        path: from.to_path_buf(),
        source,
    })?;

    write_file(dest, &render_template(&template, &title, &content))
}

/// Generates a page for every markdown file under `content_dir`.
///
/// `content/blog/post.md` becomes `dest_dir/blog/post.html`. Returns the
/// written paths in sorted order.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    options: &MarkdownOptions,
) -> Result<Vec<PathBuf>, IoError> {
    let pages = scan_markdown_files(content_dir)?;

    let mut generated = Vec::with_capacity(pages.len());
    for page in pages {
        let dest = page.with_extension("html").to_path(dest_dir);
        generate_page(&page.to_path(content_dir), template_path, &dest, options)?;
        generated.push(dest);
    }
    Ok(generated)
}

/// Markdown files under `content_dir`, relative to it, sorted.
pub fn scan_markdown_files(content_dir: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    if !content_dir.is_dir() {
        return Err(IoError::InvalidSourceDir(content_dir.to_path_buf()));
    }

    let mut files = Vec::new();
    scan_directory_recursive(content_dir, RelativePath::new(""), &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(
    root: &Path,
    dir: &RelativePath,
    files: &mut Vec<RelativePathBuf>,
) -> Result<(), IoError> {
    let entries = fs::read_dir(dir.to_path(root)).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let relative = dir.join(RelativePathBuf::from_path(entry.file_name())?);

        if entry.file_type()?.is_dir() {
            scan_directory_recursive(root, &relative, files)?;
        } else if relative.extension() == Some("md") {
            files.push(relative);
        }
    }

    Ok(())
}
