//! Input discovery: eligible images and the optional README.

use crate::error::Error;
use std::path::{Path, PathBuf};

/// File extensions eligible for conversion, matched case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Fixed name of the optional Markdown front matter. Case-sensitive.
pub const README_NAME: &str = "README.md";

/// Collect the image files directly inside `dir`, sorted by path.
///
/// Only regular files with an allow-listed extension count; subdirectories
/// are not descended into. Errors with [`Error::NoImages`] when nothing
/// eligible is found.
pub fn find_images(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut images = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_image_extension(&path) {
            images.push(path);
        }
    }
    images.sort();

    if images.is_empty() {
        return Err(Error::NoImages(dir.to_path_buf()));
    }
    Ok(images)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| extension.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

/// Path to the directory's README, if one exists.
pub fn readme_path(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(README_NAME);
    path.is_file().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn finds_images_sorted_and_filtered() {
        let tmp = tempfile::tempdir().expect("can create temp dir");
        fs::write(tmp.path().join("b.png"), b"x").expect("can write");
        fs::write(tmp.path().join("a.JPG"), b"x").expect("can write");
        fs::write(tmp.path().join("c.jpeg"), b"x").expect("can write");
        fs::write(tmp.path().join("notes.txt"), b"x").expect("can write");
        fs::write(tmp.path().join("no-extension"), b"x").expect("can write");
        fs::create_dir(tmp.path().join("sub.png")).expect("can create dir");

        let images = find_images(tmp.path()).expect("images exist");
        let names: Vec<_> = images
            .iter()
            .map(|p| p.file_name().and_then(|n| n.to_str()).expect("utf-8 name"))
            .collect();
        assert_eq!(names, vec!["a.JPG", "b.png", "c.jpeg"]);
    }

    #[test]
    fn empty_directory_reports_no_images() {
        let tmp = tempfile::tempdir().expect("can create temp dir");
        fs::write(tmp.path().join("notes.txt"), b"x").expect("can write");

        match find_images(tmp.path()) {
            Err(Error::NoImages(dir)) => assert_eq!(dir, tmp.path()),
            other => panic!("expected NoImages, got {other:?}"),
        }
    }

    #[test]
    fn readme_is_found_only_when_present() {
        let tmp = tempfile::tempdir().expect("can create temp dir");
        assert!(readme_path(tmp.path()).is_none());

        fs::write(tmp.path().join(README_NAME), b"# hi").expect("can write");
        assert_eq!(readme_path(tmp.path()), Some(tmp.path().join(README_NAME)));
    }
}
