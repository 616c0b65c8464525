use geo::Point;
use serde_json::{json, Value};

pub const DEFAULT_TITLE: &str = "Urban Transformation Interactive Map";
pub const DEFAULT_ZOOM: f64 = 10.0;
pub const MAP_STYLE: &str = "open-street-map";
pub const HEIGHT_PX: u32 = 800;
pub const TOP_MARGIN_PX: u32 = 50;

/// Map layout: title, center/zoom of the base tiles, canvas size and legend.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub title: String,
    /// Lon/lat map center; `None` lets the browser runtime pick its default view.
    pub center: Option<Point<f64>>,
    pub zoom: f64,
    pub map_style: String,
    pub height: u32,
    pub margin_top: u32,
    pub show_legend: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            center: None,
            zoom: DEFAULT_ZOOM,
            map_style: MAP_STYLE.to_string(),
            height: HEIGHT_PX,
            margin_top: TOP_MARGIN_PX,
            show_legend: true,
        }
    }
}

impl Layout {
    /// Plotly layout object.
    pub fn to_json(&self) -> Value {
        let mut mapbox = json!({ "style": self.map_style, "zoom": self.zoom });
        if let Some(center) = self.center {
            mapbox["center"] = json!({ "lat": center.y(), "lon": center.x() });
        }

        json!({
            "title": { "text": self.title },
            "mapbox": mapbox,
            "showlegend": self.show_legend,
            "height": self.height,
            "margin": { "r": 0, "t": self.margin_top, "l": 0, "b": 0 },
        })
    }
}
