use std::{fs, path::Path, sync::LazyLock};

use regex::Regex;

static AUTHORITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(?:AUTHORITY|ID)\[\s*"EPSG"\s*,\s*"?(\d+)"?\s*\]"#).expect("valid regex")
});

static CRS_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*[A-Z]+\[\s*"([^"]+)""#).expect("valid regex")
});

static UTM_ZONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(WGS[_ ]?(?:19)?84|NAD[_ ]?(?:19)?83|ETRS[_ ]?(?:19)?89)[\W_]*UTM[_ ]zone[_ ](\d{1,2})([NS])$")
        .expect("valid regex")
});

static URN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)EPSG(?::(?:[\d.]*:)?|/\d+/)(\d+)\s*$").expect("valid regex")
});

/// Read the EPSG code declared by a shapefile's `.prj` sidecar, if any.
pub fn epsg_from_shapefile(shp_path: &Path) -> Option<u32> {
    let prj_path = ["prj", "PRJ"].iter()
        .map(|ext| shp_path.with_extension(ext))
        .find(|path| path.is_file())?;

    let wkt = fs::read_to_string(&prj_path).ok()?;
    let epsg = epsg_from_wkt(&wkt);
    if epsg.is_none() {
        log::debug!("no recognizable CRS in {}", prj_path.display());
    }
    epsg
}

/// Resolve an EPSG code from WKT: the outermost EPSG authority first,
/// then well-known CRS names (ESRI and OGC spellings).
pub fn epsg_from_wkt(wkt: &str) -> Option<u32> {
    let wkt = wkt.trim();

    // Outermost authority sits directly inside the top-level bracket.
    let outermost = AUTHORITY.captures_iter(wkt)
        .filter(|caps| bracket_depth(&wkt[..caps.get(0).map_or(0, |m| m.start())]) == 1)
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .last();
    if outermost.is_some() { return outermost }

    let name = CRS_NAME.captures(wkt)?.get(1)?.as_str();
    epsg_from_crs_name(name)
}

/// Map a well-known CRS name to its EPSG code.
fn epsg_from_crs_name(name: &str) -> Option<u32> {
    if let Some(caps) = UTM_ZONE.captures(name) {
        let zone = caps[2].parse::<u32>().ok().filter(|z| (1..=60).contains(z))?;
        let north = caps[3].eq_ignore_ascii_case("N");
        let datum = caps[1].to_ascii_uppercase();
        return match (datum.chars().next(), north) {
            (Some('W'), true) => Some(32600 + zone),
            (Some('W'), false) => Some(32700 + zone),
            (Some('N'), true) => Some(26900 + zone),
            (Some('E'), true) => Some(25800 + zone),
            _ => None,
        };
    }

    let normalized = name.to_ascii_uppercase().replace([' ', '-'], "_");
    match normalized.as_str() {
        "GCS_WGS_1984" | "WGS_84" | "WGS84" | "WGS_1984" => Some(4326),
        "GCS_NORTH_AMERICAN_1983" | "NAD83" | "NAD_1983" => Some(4269),
        "GCS_ETRS_1989" | "ETRS89" | "ETRS_1989" => Some(4258),
        "GCS_GDA_1994" | "GDA94" => Some(4283),
        "BRITISH_NATIONAL_GRID" | "OSGB_1936_BRITISH_NATIONAL_GRID" | "OSGB36_/_BRITISH_NATIONAL_GRID" => Some(27700),
        "RGF_1993_LAMBERT_93" | "RGF93_/_LAMBERT_93" | "RGF93_LAMBERT_93" => Some(2154),
        "ETRS_1989_LAEA" | "ETRS89_/_LAEA_EUROPE" | "ETRS89_LAEA_EUROPE" => Some(3035),
        n if n.contains("WEB_MERCATOR") || n.contains("PSEUDO_MERCATOR") => Some(3857),
        _ => None,
    }
}

/// Resolve an EPSG code from a GeoJSON `crs` name such as
/// `urn:ogc:def:crs:EPSG::3857`, `EPSG:3857` or `urn:ogc:def:crs:OGC:1.3:CRS84`.
pub fn epsg_from_crs_urn(name: &str) -> Option<u32> {
    if name.trim().to_ascii_uppercase().ends_with("CRS84") { return Some(4326) }
    URN.captures(name)?.get(1)?.as_str().parse().ok()
}

/// Number of unclosed `[` / `(` before the end of `prefix`.
fn bracket_depth(prefix: &str) -> i32 {
    prefix.chars().fold(0, |depth, c| match c {
        '[' | '(' => depth + 1,
        ']' | ')' => depth - 1,
        _ => depth,
    })
}
