use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::Result;

use crate::{
    common,
    map::{create_interactive_map, Figure, MapOptions, Viewer},
    prompt::Prompter,
};

pub const BANNER: &str = "Urban Transformation Map Visualizer";
pub const HISTORICAL_PROMPT: &str = "Enter path to historical map shapefile: ";
pub const CURRENT_PROMPT: &str = "Enter path to current map shapefile: ";
pub const SAVE_PROMPT: &str = "Do you want to save the interactive map? (yes/no): ";

/// Inputs and switches for one visualizer run. Paths left as `None` are prompted for.
#[derive(Debug, Clone)]
pub struct SessionArgs {
    pub historical: Option<PathBuf>,
    pub current: Option<PathBuf>,
    /// Save here without asking.
    pub output: Option<PathBuf>,
    pub show: bool,
    pub ask_save: bool,
}

impl Default for SessionArgs {
    fn default() -> Self {
        Self { historical: None, current: None, output: None, show: true, ask_save: true }
    }
}

/// What a run produced.
#[derive(Debug, Default)]
pub struct SessionOutcome {
    /// `None` when map construction failed.
    pub figure: Option<Figure>,
    pub saved_to: Option<PathBuf>,
}

/// Resolve the answer to the save-path prompt; blank selects `default`.
pub fn resolve_save_path(answer: &str, default: &Path) -> PathBuf {
    match answer.trim() {
        "" => default.to_path_buf(),
        path => PathBuf::from(path),
    }
}

/// Run Prompt → Load → Normalize → Build → Layout → [Display] → [Save].
///
/// A failure while building the map is reported on the prompter's output and ends
/// the run without display or save; only I/O failures of the session itself are errors.
pub fn run_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    viewer: &dyn Viewer,
    args: &SessionArgs,
    options: &MapOptions,
) -> Result<SessionOutcome> {
    prompter.say(BANNER)?;

    let historical = match &args.historical {
        Some(path) => { common::require_path_exists(path)?; path.clone() }
        None => prompter.ask_existing_path(HISTORICAL_PROMPT)?,
    };
    let current = match &args.current {
        Some(path) => { common::require_path_exists(path)?; path.clone() }
        None => prompter.ask_existing_path(CURRENT_PROMPT)?,
    };

    let figure = match create_interactive_map(&historical, &current, options) {
        Ok(figure) => figure,
        Err(e) => {
            prompter.say(&format!("An error occurred: {e:#}"))?;
            return Ok(SessionOutcome::default());
        }
    };

    if args.show {
        if let Err(e) = viewer.show(&figure) {
            log::warn!("could not display the map: {e:#}");
        }
    }

    let save_path = match &args.output {
        Some(path) => Some(path.clone()),
        None if args.ask_save && prompter.confirm(SAVE_PROMPT)? => {
            let default = &options.default_output;
            let answer = prompter.ask(&format!(
                "Enter save path (press Enter for default: {}): ", default.display()
            ))?;
            Some(resolve_save_path(&answer, default))
        }
        None => None,
    };

    if let Some(path) = &save_path {
        figure.write_html(path)?;
        prompter.say(&format!("Interactive map saved to {}", path.display()))?;
    }

    Ok(SessionOutcome { figure: Some(figure), saved_to: save_path })
}
