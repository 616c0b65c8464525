use anyhow::{anyhow, bail, Context, Result};
use geo::{Coord, Geometry, MapCoords};
use proj4rs::{proj::Proj as Proj4, transform::transform};

use crate::geom::{Features, WGS84};

/// PROJ.4 definition for a supported EPSG code.
pub(crate) fn proj4_for_epsg(epsg: u32) -> Result<String> {
    let proj_string = match epsg {
        4326 => "+proj=longlat +datum=WGS84 +no_defs".to_string(),
        4269 => "+proj=longlat +datum=NAD83 +no_defs".to_string(),
        4258 | 4283 => "+proj=longlat +ellps=GRS80 +towgs84=0,0,0,0,0,0,0 +no_defs".to_string(),
        3857 | 3785 | 900913 => {
            "+proj=merc +a=6378137 +b=6378137 +lat_ts=0 +lon_0=0 +x_0=0 +y_0=0 +k=1 +units=m +no_defs".to_string()
        }
        27700 => concat!(
            "+proj=tmerc +lat_0=49 +lon_0=-2 +k=0.9996012717 +x_0=400000 +y_0=-100000 +ellps=airy ",
            "+towgs84=446.448,-125.157,542.06,0.15,0.247,0.842,-20.489 +units=m +no_defs",
        ).to_string(),
        2154 => concat!(
            "+proj=lcc +lat_0=46.5 +lon_0=3 +lat_1=49 +lat_2=44 +x_0=700000 +y_0=6600000 ",
            "+ellps=GRS80 +towgs84=0,0,0,0,0,0,0 +units=m +no_defs",
        ).to_string(),
        3035 => concat!(
            "+proj=laea +lat_0=52 +lon_0=10 +x_0=4321000 +y_0=3210000 ",
            "+ellps=GRS80 +towgs84=0,0,0,0,0,0,0 +units=m +no_defs",
        ).to_string(),
        32601..=32660 => utm_proj4(epsg - 32600, false, "+datum=WGS84"),
        32701..=32760 => utm_proj4(epsg - 32700, true, "+datum=WGS84"),
        26901..=26923 => utm_proj4(epsg - 26900, false, "+datum=NAD83"),
        25828..=25838 => utm_proj4(epsg - 25800, false, "+ellps=GRS80 +towgs84=0,0,0,0,0,0,0"),
        _ => bail!("unsupported coordinate reference system: EPSG:{epsg}"),
    };
    Ok(proj_string)
}

/// Build PROJ.4 string for a UTM zone on the given datum.
#[inline]
fn utm_proj4(zone: u32, south: bool, datum: &str) -> String {
    let south = if south { " +south" } else { "" };
    format!("+proj=utm +zone={zone}{south} {datum} +units=m +no_defs")
}

/// Geographic (lon/lat) definitions take radians in proj4rs.
#[inline]
fn is_geographic(proj_string: &str) -> bool {
    proj_string.starts_with("+proj=longlat")
}

impl Features {
    /// Reproject all geometries to geographic WGS84 (EPSG:4326).
    /// Fails if the CRS is unknown or unsupported, or any coordinate cannot be transformed.
    pub fn to_wgs84(self) -> Result<Self> {
        let epsg = self.epsg()
            .ok_or_else(|| anyhow!("cannot reproject geometries with no coordinate reference system"))?;
        if epsg == WGS84 { return Ok(self) }

        let from_string = proj4_for_epsg(epsg)?;
        let from = Proj4::from_proj_string(&from_string)
            .with_context(|| anyhow!("failed to build source PROJ.4: {from_string}"))?;

        let to_string = proj4_for_epsg(WGS84)?;
        let to = Proj4::from_proj_string(&to_string)
            .with_context(|| anyhow!("failed to build target PROJ.4: {to_string}"))?;

        let geographic_source = is_geographic(&from_string);

        // Map coords: radians or meters in, degrees out.
        let project = |coord: Coord<f64>| -> Result<Coord<f64>> {
            let mut point = if geographic_source {
                (coord.x.to_radians(), coord.y.to_radians(), 0.0)
            } else {
                (coord.x, coord.y, 0.0)
            };
            transform(&from, &to, &mut point)
                .map_err(|e| anyhow!("CRS transform failed for ({}, {}): {e:?}", coord.x, coord.y))?;

            let out = Coord { x: point.0.to_degrees(), y: point.1.to_degrees() };
            if !(out.x.is_finite() && out.y.is_finite()) {
                bail!("CRS transform produced a non-finite coordinate for ({}, {})", coord.x, coord.y);
            }
            Ok(out)
        };

        let geoms = self.geometries().iter()
            .map(|geom| geom.as_ref()
                .map(|g| g.try_map_coords(project))
                .transpose())
            .collect::<Result<Vec<Option<Geometry<f64>>>>>()
            .with_context(|| format!("failed to reproject from EPSG:{epsg} to EPSG:{WGS84}"))?;

        log::info!("reprojected {} features from EPSG:{epsg} to EPSG:{WGS84}", geoms.len());

        Ok(Features::new(geoms, Some(WGS84)))
    }
}
