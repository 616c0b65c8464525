use std::{env, io::Write, path::{Path, PathBuf}, process::Command};

use anyhow::{bail, Context, Result};

use crate::map::Figure;

/// Something that can present a finished figure to the user.
pub trait Viewer {
    fn show(&self, figure: &Figure) -> Result<()>;
}

/// Opens the figure in the system web browser via a kept temporary HTML file.
/// `$BROWSER` takes precedence over the platform opener.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserViewer;

impl BrowserViewer {
    /// Write the figure to a temporary HTML file that outlives this process.
    fn write_temp(figure: &Figure) -> Result<PathBuf> {
        let mut file = tempfile::Builder::new()
            .prefix("urbanmap-")
            .suffix(".html")
            .tempfile()
            .context("Failed to create temporary HTML file")?;
        file.write_all(figure.to_html()?.as_bytes())
            .context("Failed to write temporary HTML file")?;

        let (_, path) = file.keep().context("Failed to keep temporary HTML file")?;
        Ok(path)
    }

    fn open(path: &Path) -> Result<()> {
        let mut command = match env::var("BROWSER") {
            Ok(browser) if !browser.trim().is_empty() => Command::new(browser.trim()),
            _ if cfg!(target_os = "macos") => Command::new("open"),
            _ if cfg!(target_os = "windows") => {
                let mut command = Command::new("cmd");
                command.args(["/C", "start", ""]);
                command
            }
            _ => Command::new("xdg-open"),
        };

        let status = command.arg(path).status()
            .with_context(|| format!("Failed to launch browser for {}", path.display()))?;
        if !status.success() {
            bail!("Browser exited with {status} for {}", path.display());
        }
        Ok(())
    }
}

impl Viewer for BrowserViewer {
    fn show(&self, figure: &Figure) -> Result<()> {
        let path = Self::write_temp(figure)?;
        log::info!("opening {} in browser", path.display());
        Self::open(&path)
    }
}
