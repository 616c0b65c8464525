use std::path::Path;

use anyhow::Result;
use geo::Geometry;

use crate::{
    geom::Features,
    map::{Figure, Layout, MapOptions, PolygonPolicy, Role, Trace},
};

/// Build one trace per drawable feature, in file order. The trace index is the
/// feature's position in the file, so skipped features leave gaps in the numbering.
pub fn build_traces(features: &Features, role: Role, policy: PolygonPolicy) -> Vec<Trace> {
    let traces = features.geometries().iter().enumerate()
        .filter_map(|(idx, geom)| {
            let rings = match (geom.as_ref()?, policy) {
                (Geometry::Polygon(poly), _) => vec![poly.exterior().0.clone()],
                (Geometry::MultiPolygon(mp), PolygonPolicy::IncludeMultiPolygons) => {
                    mp.0.iter().map(|poly| poly.exterior().0.clone()).collect()
                }
                _ => return None,
            };
            // Empty polygons have nothing to draw.
            let rings = rings.into_iter().filter(|ring| !ring.is_empty()).collect::<Vec<_>>();
            if rings.is_empty() { return None }
            Some(Trace::new(role, idx, rings))
        })
        .collect::<Vec<_>>();

    let skipped = features.len() - traces.len();
    if skipped > 0 {
        log::debug!("{}: skipped {skipped} of {} features", role.label(), features.len());
    }

    traces
}

impl Figure {
    /// Overlay historical (red) and current (blue) features. The map is centered
    /// on the mean centroid of the historical features only.
    pub fn from_features(historical: &Features, current: &Features, options: &MapOptions) -> Self {
        let mut figure = Figure::new();

        for trace in build_traces(historical, Role::Historical, options.polygon_policy) {
            figure.add_trace(trace);
        }
        for trace in build_traces(current, Role::Current, options.polygon_policy) {
            figure.add_trace(trace);
        }

        figure.set_layout(Layout {
            title: options.title.clone(),
            center: historical.mean_centroid(),
            zoom: options.zoom,
            ..Layout::default()
        });

        figure
    }
}

/// Load both datasets, reproject them to WGS84 and compose the overlay figure.
/// Any load or reprojection failure aborts without a figure.
pub fn create_interactive_map(historical_path: &Path, current_path: &Path, options: &MapOptions) -> Result<Figure> {
    let historical = Features::load_wgs84(historical_path, options.assume_epsg)?;
    let current = Features::load_wgs84(current_path, options.assume_epsg)?;

    let figure = Figure::from_features(&historical, &current, options);
    log::info!(
        "built {} historical and {} current traces",
        figure.traces_of(Role::Historical).count(),
        figure.traces_of(Role::Current).count(),
    );

    Ok(figure)
}
