use geo::{Coord, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};
use shapefile as shp;

/// Any shapefile point type; only the planar coordinates are kept.
trait PlanarPoint {
    fn coord(&self) -> Coord<f64>;
}

impl PlanarPoint for shp::Point {
    #[inline] fn coord(&self) -> Coord<f64> { Coord { x: self.x, y: self.y } }
}

impl PlanarPoint for shp::PointM {
    #[inline] fn coord(&self) -> Coord<f64> { Coord { x: self.x, y: self.y } }
}

impl PlanarPoint for shp::PointZ {
    #[inline] fn coord(&self) -> Coord<f64> { Coord { x: self.x, y: self.y } }
}

/// Convert a shapefile shape into a geo geometry. Null shapes, multipatches and
/// shapes with no usable rings or parts yield `None`.
pub fn shape_to_geometry(shape: shp::Shape) -> Option<Geometry<f64>> {
    match shape {
        shp::Shape::Point(p) => Some(point(&p)),
        shp::Shape::PointM(p) => Some(point(&p)),
        shp::Shape::PointZ(p) => Some(point(&p)),
        shp::Shape::Multipoint(mp) => multipoint(mp.points()),
        shp::Shape::MultipointM(mp) => multipoint(mp.points()),
        shp::Shape::MultipointZ(mp) => multipoint(mp.points()),
        shp::Shape::Polyline(pl) => polyline(pl.parts()),
        shp::Shape::PolylineM(pl) => polyline(pl.parts()),
        shp::Shape::PolylineZ(pl) => polyline(pl.parts()),
        shp::Shape::Polygon(p) => polygon(p.rings()),
        shp::Shape::PolygonM(p) => polygon(p.rings()),
        shp::Shape::PolygonZ(p) => polygon(p.rings()),
        _ => None,
    }
}

fn point<P: PlanarPoint>(p: &P) -> Geometry<f64> {
    Geometry::Point(Point(p.coord()))
}

fn multipoint<P: PlanarPoint>(points: &[P]) -> Option<Geometry<f64>> {
    if points.is_empty() { return None }
    Some(Geometry::MultiPoint(MultiPoint(points.iter().map(|p| Point(p.coord())).collect())))
}

fn polyline<P: PlanarPoint>(parts: &[Vec<P>]) -> Option<Geometry<f64>> {
    let mut lines = parts.iter()
        .filter(|part| !part.is_empty())
        .map(|part| LineString(part.iter().map(PlanarPoint::coord).collect()))
        .collect::<Vec<_>>();

    match lines.len() {
        0 => None,
        1 => lines.pop().map(Geometry::LineString),
        _ => Some(Geometry::MultiLineString(MultiLineString(lines))),
    }
}

/// Shapefile rings are grouped into polygons: each exterior (clockwise) ring
/// owns the holes that follow it. A hole with no exterior before it is taken as
/// an exterior itself. One exterior gives a Polygon, several a MultiPolygon.
fn polygon<P: PlanarPoint>(rings: &[shp::PolygonRing<P>]) -> Option<Geometry<f64>> {
    /// Ensure first and last are the same for geo::LineString coords
    fn ensure_closed(coords: &mut Vec<Coord<f64>>) {
        if let (Some(&first), Some(&last)) = (coords.first(), coords.last()) {
            if first != last { coords.push(first) }
        }
    }

    /// Get the signed area of a ring (negative for clockwise)
    fn signed_area(pts: &[Coord<f64>]) -> f64 {
        let mut a = 0.0;
        for w in pts.windows(2) {
            a += w[0].x * w[1].y - w[1].x * w[0].y;
        }
        a / 2.0
    }

    let mut polys: Vec<Polygon<f64>> = Vec::new();
    let mut current_exterior: Option<LineString<f64>> = None;
    let mut current_holes: Vec<LineString<f64>> = Vec::new();

    for ring in rings {
        let mut coords = ring.points().iter().map(PlanarPoint::coord).collect::<Vec<_>>();
        if coords.is_empty() { continue }
        ensure_closed(&mut coords);

        if signed_area(&coords) <= 0.0 || current_exterior.is_none() {
            // flush previous polygon
            if let Some(ext) = current_exterior.take() {
                polys.push(Polygon::new(ext, std::mem::take(&mut current_holes)));
            }
            current_exterior = Some(LineString(coords));
        } else {
            current_holes.push(LineString(coords));
        }
    }
    if let Some(ext) = current_exterior {
        polys.push(Polygon::new(ext, current_holes));
    }

    match polys.len() {
        0 => None,
        1 => polys.pop().map(Geometry::Polygon),
        _ => Some(Geometry::MultiPolygon(MultiPolygon(polys))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> shp::Point { shp::Point { x, y } }

    /// Clockwise square with lower-left corner at (x, y).
    fn cw_square(x: f64, y: f64, size: f64) -> Vec<shp::Point> {
        vec![pt(x, y), pt(x, y + size), pt(x + size, y + size), pt(x + size, y), pt(x, y)]
    }

    #[test]
    fn single_outer_ring_is_polygon() {
        let shape = shp::Polygon::new(shp::PolygonRing::Outer(cw_square(0.0, 0.0, 1.0)));
        let geom = shape_to_geometry(shp::Shape::Polygon(shape)).unwrap();
        let Geometry::Polygon(poly) = geom else { panic!("expected Polygon") };
        assert_eq!(poly.exterior().0.len(), 5);
        assert!(poly.interiors().is_empty());
    }

    #[test]
    fn two_outer_rings_are_multipolygon() {
        let shape = shp::Polygon::with_rings(vec![
            shp::PolygonRing::Outer(cw_square(0.0, 0.0, 1.0)),
            shp::PolygonRing::Outer(cw_square(5.0, 5.0, 1.0)),
        ]);
        let geom = shape_to_geometry(shp::Shape::Polygon(shape)).unwrap();
        let Geometry::MultiPolygon(mp) = geom else { panic!("expected MultiPolygon") };
        assert_eq!(mp.0.len(), 2);
    }

    #[test]
    fn hole_attaches_to_preceding_exterior() {
        let mut hole = cw_square(0.25, 0.25, 0.5);
        hole.reverse();
        let shape = shp::Polygon::with_rings(vec![
            shp::PolygonRing::Outer(cw_square(0.0, 0.0, 1.0)),
            shp::PolygonRing::Inner(hole),
        ]);
        let geom = shape_to_geometry(shp::Shape::Polygon(shape)).unwrap();
        let Geometry::Polygon(poly) = geom else { panic!("expected Polygon") };
        assert_eq!(poly.interiors().len(), 1);
    }

    #[test]
    fn lone_counter_clockwise_ring_is_exterior() {
        let mut ring = cw_square(0.0, 0.0, 1.0);
        ring.reverse();
        let shape = shp::Polygon::new(shp::PolygonRing::Inner(ring));
        let geom = shape_to_geometry(shp::Shape::Polygon(shape)).unwrap();
        let Geometry::Polygon(poly) = geom else { panic!("expected Polygon") };
        assert_eq!(poly.exterior().0.len(), 5);
        assert!(poly.interiors().is_empty());
    }

    #[test]
    fn points_and_lines_convert() {
        let geom = shape_to_geometry(shp::Shape::Point(pt(1.0, 2.0))).unwrap();
        assert_eq!(geom, Geometry::Point(Point::new(1.0, 2.0)));

        let line = shp::Polyline::new(vec![pt(0.0, 0.0), pt(1.0, 1.0)]);
        assert!(matches!(shape_to_geometry(shp::Shape::Polyline(line)), Some(Geometry::LineString(_))));
    }

    #[test]
    fn null_shape_has_no_geometry() {
        assert!(shape_to_geometry(shp::Shape::NullShape).is_none());
    }
}
