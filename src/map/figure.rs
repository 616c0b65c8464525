use serde_json::{json, Value};

use crate::map::{Layout, Role, Trace};

/// An accumulating collection of traces plus one layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
    traces: Vec<Trace>,
    layout: Layout,
}

impl Figure {
    pub fn new() -> Self { Self::default() }

    /// Append a trace after all existing ones.
    pub fn add_trace(&mut self, trace: Trace) {
        self.traces.push(trace);
    }

    /// Replace the layout.
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    #[inline] pub fn traces(&self) -> &[Trace] { &self.traces }
    #[inline] pub fn layout(&self) -> &Layout { &self.layout }

    /// Traces built from the given role, in figure order.
    pub fn traces_of(&self, role: Role) -> impl Iterator<Item = &Trace> {
        self.traces.iter().filter(move |trace| trace.role() == role)
    }

    /// Plotly figure object: `{"data": [...], "layout": {...}}`.
    pub fn to_json(&self) -> Value {
        json!({
            "data": self.traces.iter().map(Trace::to_json).collect::<Vec<_>>(),
            "layout": self.layout.to_json(),
        })
    }
}
