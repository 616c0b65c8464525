use std::path::PathBuf;

use crate::map::{DEFAULT_TITLE, DEFAULT_ZOOM};

/// Default file name for saved maps.
pub const DEFAULT_OUTPUT: &str = "urban_transformation_map.html";

/// Which geometry types become traces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PolygonPolicy {
    /// Only `Polygon` features are drawn; everything else is skipped silently.
    #[default]
    PolygonsOnly,
    /// `MultiPolygon` features are drawn too, one trace per feature with one ring per part.
    IncludeMultiPolygons,
}

/// Settings for building and saving a map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub polygon_policy: PolygonPolicy,
    /// EPSG code for datasets that do not declare a CRS.
    pub assume_epsg: Option<u32>,
    pub zoom: f64,
    pub title: String,
    pub default_output: PathBuf,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            polygon_policy: PolygonPolicy::default(),
            assume_epsg: None,
            zoom: DEFAULT_ZOOM,
            title: DEFAULT_TITLE.to_string(),
            default_output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}
