use std::{fs, path::Path};

use anyhow::{anyhow, bail, Context, Result};
use geo::{Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};
use serde_json::Value;

use crate::{common::epsg_from_crs_urn, geom::{Features, WGS84}};

/// Read a GeoJSON file (FeatureCollection, Feature, or bare geometry) into Features.
pub fn read_from_geojson(path: &Path) -> Result<Features> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read GeoJSON file: {}", path.display()))?;
    read_from_geojson_bytes(&bytes)
        .with_context(|| format!("Failed to parse GeoJSON file: {}", path.display()))
}

/// Read geometries from GeoJSON bytes.
/// Without a legacy `crs` member the coordinates are WGS84 lon/lat.
pub(crate) fn read_from_geojson_bytes(bytes: &[u8]) -> Result<Features> {
    let value: Value = serde_json::from_slice(bytes).context("Failed to parse GeoJSON bytes")?;

    let geoms = match value["type"].as_str() {
        Some("FeatureCollection") => value["features"].as_array()
            .ok_or_else(|| anyhow!("Invalid FeatureCollection: missing features array"))?
            .iter()
            .enumerate()
            .map(|(idx, feature)| parse_feature(feature)
                .with_context(|| format!("Invalid feature at index {idx}")))
            .collect::<Result<Vec<_>>>()?,
        Some("Feature") => vec![parse_feature(&value)?],
        Some(_) => vec![Some(parse_geometry(&value)?)],
        None => bail!("Invalid GeoJSON: missing type member"),
    };

    Ok(Features::new(geoms, Some(parse_crs(&value)?)))
}

/// Parse the legacy named `crs` member, defaulting to WGS84.
fn parse_crs(value: &Value) -> Result<u32> {
    let Some(crs) = value.get("crs").filter(|crs| !crs.is_null()) else { return Ok(WGS84) };

    let name = crs["properties"]["name"].as_str()
        .ok_or_else(|| anyhow!("Unsupported GeoJSON crs member: {crs}"))?;
    epsg_from_crs_urn(name)
        .ok_or_else(|| anyhow!("Unrecognized GeoJSON crs name: {name}"))
}

/// Parse a Feature's geometry member (`null` for no geometry).
fn parse_feature(feature: &Value) -> Result<Option<Geometry<f64>>> {
    if feature["type"].as_str() != Some("Feature") {
        bail!("Invalid Feature: type must be \"Feature\"");
    }
    match feature.get("geometry") {
        None | Some(Value::Null) => Ok(None),
        Some(geometry) => parse_geometry(geometry).map(Some),
    }
}

/// Parse any GeoJSON geometry object into a geo::Geometry.
fn parse_geometry(geometry: &Value) -> Result<Geometry<f64>> {
    let kind = geometry["type"].as_str()
        .ok_or_else(|| anyhow!("Invalid geometry: missing type"))?;

    if kind == "GeometryCollection" {
        let members = geometry["geometries"].as_array()
            .ok_or_else(|| anyhow!("Invalid GeometryCollection: missing geometries"))?
            .iter()
            .map(parse_geometry)
            .collect::<Result<Vec<_>>>()?;
        return Ok(Geometry::GeometryCollection(GeometryCollection(members)));
    }

    let coords = &geometry["coordinates"];
    Ok(match kind {
        "Point" => Geometry::Point(Point(parse_position(coords)?)),
        "MultiPoint" => Geometry::MultiPoint(MultiPoint(
            array(coords, kind)?.iter().map(|c| parse_position(c).map(Point)).collect::<Result<_>>()?
        )),
        "LineString" => Geometry::LineString(parse_line(coords)?),
        "MultiLineString" => Geometry::MultiLineString(MultiLineString(
            array(coords, kind)?.iter().map(parse_line).collect::<Result<_>>()?
        )),
        "Polygon" => Geometry::Polygon(parse_polygon(coords)?),
        "MultiPolygon" => Geometry::MultiPolygon(MultiPolygon(
            array(coords, kind)?.iter().map(parse_polygon).collect::<Result<_>>()?
        )),
        other => bail!("Unsupported geometry type: {other}"),
    })
}

fn array<'a>(value: &'a Value, what: &str) -> Result<&'a Vec<Value>> {
    value.as_array().ok_or_else(|| anyhow!("Invalid {what}: coordinates must be an array"))
}

/// Parse a polygon: first ring exterior, remaining rings holes.
/// Format: [[[x, y], ...], [[x, y], ...], ...]
fn parse_polygon(coords: &Value) -> Result<Polygon<f64>> {
    let mut rings = array(coords, "Polygon")?.iter()
        .map(parse_ring)
        .collect::<Result<Vec<_>>>()?
        .into_iter();

    let exterior = rings.next().unwrap_or_else(|| LineString(vec![]));
    Ok(Polygon::new(exterior, rings.collect()))
}

/// Parse a line. Format: [[x, y], [x, y], ...]
fn parse_line(coords: &Value) -> Result<LineString<f64>> {
    Ok(LineString(
        array(coords, "LineString")?.iter().map(parse_position).collect::<Result<_>>()?
    ))
}

/// Parse a ring (exterior or interior), closing it if needed.
fn parse_ring(coords: &Value) -> Result<LineString<f64>> {
    let mut ring = parse_line(coords)?;

    // Ensure ring is closed (first point == last point)
    if let (Some(&first), Some(&last)) = (ring.0.first(), ring.0.last()) {
        if first != last { ring.0.push(first) }
    }

    Ok(ring)
}

/// Parse a position [x, y, (z)] into a Coord (extra ordinates are dropped).
fn parse_position(coord: &Value) -> Result<Coord<f64>> {
    let pair = coord.as_array()
        .filter(|pair| pair.len() >= 2)
        .ok_or_else(|| anyhow!("Invalid position: expected [x, y], got {coord}"))?;
    let x = pair[0].as_f64()
        .ok_or_else(|| anyhow!("Invalid coordinate: x must be a number"))?;
    let y = pair[1].as_f64()
        .ok_or_else(|| anyhow!("Invalid coordinate: y must be a number"))?;
    Ok(Coord { x, y })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_collection_keeps_order_and_nulls() {
        let bytes = br#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {}, "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}},
                {"type": "Feature", "properties": {}, "geometry": null},
                {"type": "Feature", "properties": {}, "geometry": {"type": "Polygon",
                    "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1]]]}}
            ]
        }"#;

        let features = read_from_geojson_bytes(bytes).unwrap();
        assert_eq!(features.len(), 3);
        assert_eq!(features.epsg(), Some(WGS84));
        assert!(matches!(features.geometries()[0], Some(Geometry::Point(_))));
        assert!(features.geometries()[1].is_none());

        let Some(Geometry::Polygon(poly)) = &features.geometries()[2] else { panic!("expected polygon") };
        assert_eq!(poly.exterior().0.len(), 5, "ring should be closed");
    }

    #[test]
    fn legacy_crs_member_is_honored() {
        let bytes = br#"{
            "type": "FeatureCollection",
            "crs": {"type": "name", "properties": {"name": "urn:ogc:def:crs:EPSG::3857"}},
            "features": []
        }"#;
        assert_eq!(read_from_geojson_bytes(bytes).unwrap().epsg(), Some(3857));
    }

    #[test]
    fn bare_geometry_and_single_feature() {
        let bare = br#"{"type": "MultiPolygon", "coordinates": [[[[0,0],[1,0],[1,1],[0,0]]], [[[5,5],[6,5],[6,6],[5,5]]]]}"#;
        let features = read_from_geojson_bytes(bare).unwrap();
        let Some(Geometry::MultiPolygon(mp)) = &features.geometries()[0] else { panic!("expected multipolygon") };
        assert_eq!(mp.0.len(), 2);

        let single = br#"{"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[0,0],[1,1,7]]}}"#;
        assert!(matches!(read_from_geojson_bytes(single).unwrap().geometries()[0], Some(Geometry::LineString(_))));
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert!(read_from_geojson_bytes(b"not json").is_err());
        assert!(read_from_geojson_bytes(br#"{"features": []}"#).is_err());
        assert!(read_from_geojson_bytes(br#"{"type": "Point", "coordinates": ["a", 1]}"#).is_err());
        assert!(read_from_geojson_bytes(br#"{"type": "Circle", "coordinates": [0, 0]}"#).is_err());
    }
}
