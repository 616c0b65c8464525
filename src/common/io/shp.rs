use std::path::Path;

use anyhow::{Context, Result, anyhow};
use shapefile::{Shape, ShapeReader};

use crate::{common, geom::Features};

/// Reads all shapes from a given `.shp` file path, with the CRS from its `.prj` sidecar.
pub fn read_from_shapefile(path: &Path) -> Result<Features> {
    let mut reader = ShapeReader::from_path(path)
        .with_context(|| format!("Failed to open shapefile: {}", path.display()))?;

    let mut shapes: Vec<Shape> = Vec::new();
    for result in reader.iter_shapes() {
        shapes.push(result.with_context(|| format!("Error reading shape in {}", path.display()))?);
    }

    let geoms = shapes.into_iter()
        .map(common::shape_to_geometry)
        .collect();

    Ok(Features::new(geoms, common::epsg_from_shapefile(path)))
}

/// Extract a zipped shapefile bundle to a temporary directory and read its first `.shp`.
pub fn read_from_zipped_shapefile(path: &Path) -> Result<Features> {
    let dir = tempfile::tempdir().context("Failed to create temporary directory")?;
    common::extract_zip(path, dir.path())?;

    let shp_path = common::find_first_with_extension(dir.path(), "shp")
        .ok_or_else(|| anyhow!("No .shp file found in archive: {}", path.display()))?;
    log::debug!("reading {} from {}", shp_path.display(), path.display());

    read_from_shapefile(&shp_path)
}
