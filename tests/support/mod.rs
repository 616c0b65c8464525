#![allow(dead_code)]

use std::{cell::Cell, fs, io::Write, path::{Path, PathBuf}};

use shapefile as shp;
use urbanmap::{Figure, Viewer};

/// Viewer that only counts how often it was asked to show a figure.
#[derive(Default)]
pub struct CountingViewer {
    pub shown: Cell<usize>,
}

impl Viewer for CountingViewer {
    fn show(&self, _figure: &Figure) -> anyhow::Result<()> {
        self.shown.set(self.shown.get() + 1);
        Ok(())
    }
}

/// GeoJSON square ring with lower-left corner (x, y).
fn square_ring(x: f64, y: f64, size: f64) -> String {
    format!(
        "[[{x},{y}],[{x1},{y}],[{x1},{y1}],[{x},{y1}],[{x},{y}]]",
        x1 = x + size,
        y1 = y + size,
    )
}

/// GeoJSON Polygon geometry.
pub fn polygon(x: f64, y: f64, size: f64) -> String {
    format!(r#"{{"type":"Polygon","coordinates":[{}]}}"#, square_ring(x, y, size))
}

/// GeoJSON MultiPolygon geometry with two parts.
pub fn multipolygon(x: f64, y: f64) -> String {
    format!(
        r#"{{"type":"MultiPolygon","coordinates":[[{}],[{}]]}}"#,
        square_ring(x, y, 1.0),
        square_ring(x + 5.0, y + 5.0, 1.0),
    )
}

/// GeoJSON Point geometry.
pub fn point(x: f64, y: f64) -> String {
    format!(r#"{{"type":"Point","coordinates":[{x},{y}]}}"#)
}

/// Write a FeatureCollection with the given geometries (`None` for null geometry).
pub fn write_geojson(dir: &Path, name: &str, geometries: &[Option<String>]) -> PathBuf {
    let features = geometries.iter()
        .map(|geom| format!(
            r#"{{"type":"Feature","properties":{{}},"geometry":{}}}"#,
            geom.as_deref().unwrap_or("null"),
        ))
        .collect::<Vec<_>>()
        .join(",");

    let path = dir.join(name);
    fs::write(&path, format!(r#"{{"type":"FeatureCollection","features":[{features}]}}"#)).unwrap();
    path
}

fn square_points(x: f64, y: f64, size: f64) -> Vec<shp::Point> {
    [(x, y), (x, y + size), (x + size, y + size), (x + size, y), (x, y)]
        .into_iter()
        .map(|(x, y)| shp::Point::new(x, y))
        .collect()
}

/// Shapefile polygon with one exterior square ring (clockwise on disk).
pub fn shp_square(x: f64, y: f64, size: f64) -> shp::Polygon {
    shp::Polygon::new(shp::PolygonRing::Outer(square_points(x, y, size)))
}

/// Shapefile polygon whose only ring is counter-clockwise on disk.
pub fn shp_ccw_square(x: f64, y: f64, size: f64) -> shp::Polygon {
    shp::Polygon::new(shp::PolygonRing::Inner(square_points(x, y, size)))
}

/// Write polygons to `path` along with its `.shx` index.
pub fn write_polygon_shp(path: &Path, polygons: &[shp::Polygon]) {
    shp::ShapeWriter::from_path(path).unwrap().write_shapes(polygons).unwrap();
}

/// Zip the given files (by file name) into `zip_path`.
pub fn write_zip(zip_path: &Path, files: &[&Path]) {
    let mut zip = zip::ZipWriter::new(fs::File::create(zip_path).unwrap());
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored);
    for file in files {
        let name = file.file_name().unwrap().to_string_lossy().to_string();
        zip.start_file(name, options).unwrap();
        zip.write_all(&fs::read(file).unwrap()).unwrap();
    }
    zip.finish().unwrap();
}
