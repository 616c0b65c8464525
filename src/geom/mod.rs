mod algorithm;
mod geom;
mod read;

pub use geom::{Features, WGS84, geometry_type};
