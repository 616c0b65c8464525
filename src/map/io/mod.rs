mod html;
mod show;

pub use html::PLOTLY_CDN;
pub use show::{BrowserViewer, Viewer};
