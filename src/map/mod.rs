mod build;
mod figure;
mod io;
mod layout;
mod options;
mod trace;

pub use build::{build_traces, create_interactive_map};
pub use figure::Figure;
pub use io::{BrowserViewer, PLOTLY_CDN, Viewer};
pub use layout::{DEFAULT_TITLE, DEFAULT_ZOOM, Layout};
pub use options::{DEFAULT_OUTPUT, MapOptions, PolygonPolicy};
pub use trace::{Role, Trace, TraceStyle};
