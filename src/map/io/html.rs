use std::{fs, path::Path};

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};

use crate::map::Figure;

/// Browser-side charting runtime loaded by the exported document.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

impl Figure {
    /// Render the figure as a standalone HTML document.
    pub fn to_html(&self) -> Result<String> {
        let json = serde_json::to_string(&self.to_json())
            .context("Failed to serialize figure to JSON")?;

        // Keep the payload from terminating the surrounding <script> element.
        let payload = json.replace("</", "<\\/");

        // Deterministic element id, so identical figures give identical files.
        let digest = Sha256::digest(json.as_bytes());
        let div_id = format!("map-{}", &hex::encode(digest)[..16]);
        let height = self.layout().height;

        Ok(format!(
r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<title>{title}</title>
<script src="{PLOTLY_CDN}" charset="utf-8"></script>
</head>
<body>
<div id="{div_id}" class="plotly-graph-div" style="height:{height}px; width:100%;"></div>
<script type="text/javascript">
(function() {{
    var figure = {payload};
    Plotly.newPlot("{div_id}", figure.data, figure.layout, {{"responsive": true}});
}})();
</script>
</body>
</html>
"#,
            title = escape_text(&self.layout().title),
        ))
    }

    /// Write the figure as HTML to `path`, overwriting any existing file.
    /// The document is rendered in full before the file is touched.
    pub fn write_html(&self, path: &Path) -> Result<()> {
        let html = self.to_html()?;
        fs::write(path, html)
            .with_context(|| format!("Failed to write HTML map: {}", path.display()))
    }
}

/// Escape text for an HTML text node.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{Layout, Role, Trace};
    use geo::Coord;

    fn figure_with_name(title: &str) -> Figure {
        let mut figure = Figure::new();
        figure.add_trace(Trace::new(Role::Historical, 0, vec![vec![Coord { x: 1.0, y: 2.0 }]]));
        figure.set_layout(Layout { title: title.to_string(), ..Layout::default() });
        figure
    }

    #[test]
    fn html_embeds_figure_and_runtime() {
        let html = figure_with_name("Urban").to_html().unwrap();
        assert!(html.contains(PLOTLY_CDN));
        assert!(html.contains("Plotly.newPlot"));
        assert!(html.contains(r#""name":"Historical Area 0""#));
        assert!(html.contains(r#""style":"open-street-map""#));
        assert!(html.contains("height:800px"));
    }

    #[test]
    fn html_is_deterministic() {
        assert_eq!(figure_with_name("A").to_html().unwrap(), figure_with_name("A").to_html().unwrap());
    }

    #[test]
    fn script_close_tags_are_escaped() {
        let html = figure_with_name("</script><b>").to_html().unwrap();
        assert_eq!(html.matches("</script>").count(), 2, "only the two real script elements close");
        assert!(html.contains("<title>&lt;/script&gt;&lt;b&gt;</title>"));
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.html");
        fs::write(&path, "stale contents").unwrap();

        figure_with_name("Fresh").write_html(&path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.contains("stale contents"));
        assert!(written.contains("<title>Fresh</title>"));
    }
}
