use crate::error::Error;
use glob::Pattern;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error};
use walkdir::WalkDir;

/// An image found on disk. `name` is the file name with the extension
/// stripped, resolution suffix intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub path: PathBuf,
}

/// Recursively collect every `*.<extension>` file under `root`, skipping
/// anything matching an ignore glob. Sorted by name, then path.
pub fn scan_images(
    root: &Path,
    extension: &str,
    ignore_globs: &[String],
) -> Result<Vec<ImageFile>, Error> {
    ensure_directory(root)?;

    let ignore_patterns = compile_patterns(ignore_globs);
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            !ignore_patterns
                .iter()
                .any(|pattern| pattern.matches_path(entry.path()))
        });

    let mut images = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|err| Error::Unreadable {
            path: err.path().unwrap_or(root).to_path_buf(),
            source: err.into(),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(name) = stem_with_extension(entry.path(), extension) {
            images.push(ImageFile {
                name,
                path: entry.into_path(),
            });
        }
    }

    images.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));
    debug!("Found {} image files under {}", images.len(), root.display());
    Ok(images)
}

/// Collect source files directly inside `root` whose extension is one of
/// `extensions`. Subdirectories are not searched.
pub fn scan_sources(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, Error> {
    ensure_directory(root)?;

    let entries = fs::read_dir(root).map_err(|source| Error::Unreadable {
        path: root.to_path_buf(),
        source,
    })?;

    let mut sources = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|source| Error::Unreadable {
            path: root.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(OsStr::to_str)
            .map_or(false, |ext| extensions.iter().any(|e| e == ext));
        if matches {
            sources.push(path);
        }
    }

    sources.sort();
    debug!("Found {} source files in {}", sources.len(), root.display());
    Ok(sources)
}

fn ensure_directory(root: &Path) -> Result<(), Error> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(Error::DirectoryNotFound(root.to_path_buf()))
    }
}

fn compile_patterns(globs: &[String]) -> Vec<Pattern> {
    globs
        .iter()
        .filter_map(|glob| match Pattern::new(glob) {
            Ok(p) => Some(p),
            Err(e) => {
                error!("Invalid glob pattern '{}': {}", glob, e);
                None
            }
        })
        .collect()
}

fn stem_with_extension(path: &Path, extension: &str) -> Option<String> {
    if path.extension().and_then(OsStr::to_str) != Some(extension) {
        return None;
    }
    path.file_stem()
        .and_then(OsStr::to_str)
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_scan_images_is_recursive() {
        let tmp = tempdir().unwrap();
        let nested = tmp.path().join("Resources").join("Icons");
        fs::create_dir_all(&nested).unwrap();
        fs::write(tmp.path().join("logo.png"), b"x").unwrap();
        fs::write(nested.join("icon@2x.png"), b"xx").unwrap();
        fs::write(nested.join("notes.txt"), b"not an image").unwrap();

        let images = scan_images(tmp.path(), "png", &[]).unwrap();
        let names: Vec<&str> = images.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["icon@2x", "logo"]);
    }

    #[test]
    fn test_scan_images_honours_ignore_patterns() {
        let tmp = tempdir().unwrap();
        let pods = tmp.path().join("Pods");
        fs::create_dir_all(&pods).unwrap();
        fs::write(pods.join("vendor.png"), b"x").unwrap();
        fs::write(tmp.path().join("mine.png"), b"x").unwrap();

        let images = scan_images(tmp.path(), "png", &["**/Pods/**".to_string()]).unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].name, "mine");
    }

    #[test]
    fn test_scan_sources_is_top_level_only() {
        let tmp = tempdir().unwrap();
        let sub = tmp.path().join("Classes");
        fs::create_dir_all(&sub).unwrap();
        fs::write(tmp.path().join("AppDelegate.m"), "").unwrap();
        fs::write(tmp.path().join("AppDelegate.h"), "").unwrap();
        fs::write(tmp.path().join("MainWindow.xib"), "").unwrap();
        fs::write(tmp.path().join("README.md"), "").unwrap();
        fs::write(sub.join("Hidden.m"), "").unwrap();

        let exts = vec!["xib".to_string(), "h".to_string(), "m".to_string()];
        let sources = scan_sources(tmp.path(), &exts).unwrap();
        let names: Vec<String> = sources
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["AppDelegate.h", "AppDelegate.m", "MainWindow.xib"]);
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let tmp = tempdir().unwrap();
        let missing = tmp.path().join("nope");
        assert!(matches!(
            scan_images(&missing, "png", &[]),
            Err(Error::DirectoryNotFound(_))
        ));
        assert!(matches!(
            scan_sources(&missing, &[]),
            Err(Error::DirectoryNotFound(_))
        ));
    }
}
