#![doc = "urbanmap public API"]
mod common;
mod geom;
mod map;
mod prompt;
mod session;

#[doc(inline)]
pub use geom::{Features, WGS84, geometry_type};

#[doc(inline)]
pub use map::{
    BrowserViewer, DEFAULT_OUTPUT, Figure, Layout, MapOptions, PLOTLY_CDN, PolygonPolicy, Role, Trace, TraceStyle,
    Viewer, build_traces, create_interactive_map,
};

#[doc(inline)]
pub use prompt::Prompter;

#[doc(inline)]
pub use session::{
    BANNER, CURRENT_PROMPT, HISTORICAL_PROMPT, SAVE_PROMPT, SessionArgs, SessionOutcome, resolve_save_path,
    run_session,
};
