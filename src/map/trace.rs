use geo::Coord;
use serde_json::{json, Value};

/// Which dataset a trace was built from. Color and label are bound to the role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Historical,
    Current,
}

impl Role {
    /// Legend label prefix, e.g. "Historical Area".
    pub fn label(self) -> &'static str {
        match self {
            Role::Historical => "Historical Area",
            Role::Current => "Current Area",
        }
    }

    /// Fill and outline style for traces of this role.
    pub fn style(self) -> TraceStyle {
        match self {
            Role::Historical => TraceStyle { fill_color: "rgba(255,0,0,0.3)", line_color: "red", line_width: 2.0 },
            Role::Current => TraceStyle { fill_color: "rgba(0,0,255,0.3)", line_color: "blue", line_width: 2.0 },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceStyle {
    pub fill_color: &'static str,
    pub line_color: &'static str,
    pub line_width: f64,
}

/// A filled, outlined map overlay for one feature's exterior boundary.
/// Multiple rings are drawn as disjoint parts of the same trace.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    name: String,
    role: Role,
    rings: Vec<Vec<Coord<f64>>>,
}

impl Trace {
    /// Create a trace named "{role label} {index}" from lon/lat rings.
    pub fn new(role: Role, index: usize, rings: Vec<Vec<Coord<f64>>>) -> Self {
        Self { name: format!("{} {}", role.label(), index), role, rings }
    }

    #[inline] pub fn name(&self) -> &str { &self.name }
    #[inline] pub fn role(&self) -> Role { self.role }
    #[inline] pub fn style(&self) -> TraceStyle { self.role.style() }
    #[inline] pub fn rings(&self) -> &[Vec<Coord<f64>>] { &self.rings }

    /// Longitudes, with `None` separating rings.
    pub fn lon(&self) -> Vec<Option<f64>> {
        self.flatten(|c| c.x)
    }

    /// Latitudes, with `None` separating rings.
    pub fn lat(&self) -> Vec<Option<f64>> {
        self.flatten(|c| c.y)
    }

    fn flatten(&self, ordinate: impl Fn(&Coord<f64>) -> f64) -> Vec<Option<f64>> {
        let mut out = Vec::new();
        for (i, ring) in self.rings.iter().enumerate() {
            if i > 0 { out.push(None) }
            out.extend(ring.iter().map(|c| Some(ordinate(c))));
        }
        out
    }

    /// Plotly `scattermapbox` trace object.
    pub fn to_json(&self) -> Value {
        let style = self.style();
        json!({
            "type": "scattermapbox",
            "mode": "lines",
            "name": self.name,
            "lon": self.lon(),
            "lat": self.lat(),
            "fill": "toself",
            "fillcolor": style.fill_color,
            "line": { "color": style.line_color, "width": style.line_width },
        })
    }
}
