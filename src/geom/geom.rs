use std::collections::BTreeMap;

use geo::{Centroid, Geometry, Point};

/// EPSG code of geographic WGS84 (lon/lat degrees).
pub const WGS84: u32 = 4326;

/// Features represents an ordered collection of (possibly missing) geometries
/// sharing one coordinate reference system.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Features {
    geoms: Vec<Option<Geometry<f64>>>,
    epsg: Option<u32>, // EPSG code, if known
}

impl Features {
    /// Construct a Features object from geometries in file order.
    pub fn new(geoms: Vec<Option<Geometry<f64>>>, epsg: Option<u32>) -> Self {
        Self { geoms, epsg }
    }

    /// Get the number of features, including those without geometry.
    #[inline] pub fn len(&self) -> usize { self.geoms.len() }

    /// Check if there are no features.
    #[inline] pub fn is_empty(&self) -> bool { self.geoms.is_empty() }

    /// Get a reference to the list of geometries.
    #[inline] pub fn geometries(&self) -> &[Option<Geometry<f64>>] { &self.geoms }

    /// Get the EPSG code, if the source declared one.
    #[inline] pub fn epsg(&self) -> Option<u32> { self.epsg }

    /// Use `epsg` when the source did not declare a CRS.
    pub fn or_assume_epsg(mut self, epsg: Option<u32>) -> Self {
        self.epsg = self.epsg.or(epsg);
        self
    }

    /// Compute the centroid of every feature (`None` for missing or empty geometry).
    pub fn centroids(&self) -> Vec<Option<Point<f64>>> {
        self.geoms.iter()
            .map(|geom| geom.as_ref().and_then(|g| g.centroid()))
            .collect()
    }

    /// Mean longitude and latitude of all available centroids.
    pub fn mean_centroid(&self) -> Option<Point<f64>> {
        let (sum, count) = self.centroids().into_iter()
            .flatten()
            .filter(|p| p.x().is_finite() && p.y().is_finite())
            .fold((Point::new(0.0, 0.0), 0usize), |(sum, n), p| (sum + p, n + 1));

        (count > 0).then(|| sum / count as f64)
    }

    /// Count features by geometry type name ("Null" for missing geometry).
    pub fn geometry_mix(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for geom in &self.geoms {
            *counts.entry(geometry_type(geom.as_ref())).or_default() += 1;
        }
        counts
    }
}

/// Simple-features type name of a geometry.
pub fn geometry_type(geom: Option<&Geometry<f64>>) -> &'static str {
    match geom {
        None => "Null",
        Some(Geometry::Point(_)) => "Point",
        Some(Geometry::Line(_)) => "Line",
        Some(Geometry::LineString(_)) => "LineString",
        Some(Geometry::Polygon(_)) => "Polygon",
        Some(Geometry::MultiPoint(_)) => "MultiPoint",
        Some(Geometry::MultiLineString(_)) => "MultiLineString",
        Some(Geometry::MultiPolygon(_)) => "MultiPolygon",
        Some(Geometry::GeometryCollection(_)) => "GeometryCollection",
        Some(Geometry::Rect(_)) => "Rect",
        Some(Geometry::Triangle(_)) => "Triangle",
    }
}
