use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::ZipArchive;

/// Error unless a file (or any other entry) already exists at `path`.
pub fn require_path_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }
    Ok(())
}

/// Lower-cased file extension of `path`, or an empty string if there is none.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Extracts the given `.zip` file to the target directory.
pub fn extract_zip(zip_path: &Path, dest_dir: &Path) -> Result<()> {
    let file = fs::File::open(zip_path)
        .with_context(|| format!("failed to open {}", zip_path.display()))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("failed to read zip archive {}", zip_path.display()))?;

    archive
        .extract(dest_dir)
        .with_context(|| format!("failed to extract {} to {}", zip_path.display(), dest_dir.display()))?;

    Ok(())
}

/// Find the first file under `dir` with the given (lower-case) extension, in sorted path order.
pub fn find_first_with_extension(dir: &Path, ext: &str) -> Option<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .find(|path| extension_of(path) == ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(extension_of(Path::new("a/B.SHP")), "shp");
        assert_eq!(extension_of(Path::new("a/b.GeoJSON")), "geojson");
        assert_eq!(extension_of(Path::new("noext")), "");
    }

    #[test]
    fn missing_path_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(require_path_exists(dir.path()).is_ok());
        assert!(require_path_exists(&dir.path().join("nope.shp")).is_err());
    }

    #[test]
    fn finds_first_shp_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("b/zeta.shp"), b"").unwrap();
        fs::write(dir.path().join("a.SHP"), b"").unwrap();
        fs::write(dir.path().join("readme.txt"), b"").unwrap();

        let found = find_first_with_extension(dir.path(), "shp").unwrap();
        assert_eq!(found.file_name().unwrap(), "a.SHP");
        assert!(find_first_with_extension(dir.path(), "geojson").is_none());
    }
}
