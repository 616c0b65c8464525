use std::path::Path;

use anyhow::{bail, Result};

use crate::{common, geom::Features};

impl Features {
    /// Load features from a vector dataset, choosing the reader by file extension:
    /// `.shp`, `.zip` (zipped shapefile bundle), `.geojson` or `.json`.
    pub fn read_from_path(path: &Path) -> Result<Self> {
        let features = match common::extension_of(path).as_str() {
            "shp" => common::read_from_shapefile(path)?,
            "zip" => common::read_from_zipped_shapefile(path)?,
            "geojson" | "json" => common::read_from_geojson(path)?,
            other => bail!("Unsupported vector format {:?}: {}", other, path.display()),
        };

        log::info!("loaded {} features from {}", features.len(), path.display());
        Ok(features)
    }

    /// Load features and reproject them to WGS84, assuming `assume_epsg`
    /// for sources that declare no CRS.
    pub fn load_wgs84(path: &Path, assume_epsg: Option<u32>) -> Result<Self> {
        Self::read_from_path(path)?
            .or_assume_epsg(assume_epsg)
            .to_wgs84()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        let err = Features::read_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported vector format"));
    }

    #[test]
    fn geojson_loads_in_wgs84() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("areas.GeoJSON");
        std::fs::write(&path, r#"{"type": "Point", "coordinates": [10.0, 20.0]}"#).unwrap();

        let features = Features::load_wgs84(&path, None).unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features.epsg(), Some(crate::geom::WGS84));
    }
}
