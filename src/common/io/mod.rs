mod crs;
mod geojson;
mod shp;

pub(crate) use crs::*;
pub(crate) use geojson::*;
pub(crate) use shp::*;
