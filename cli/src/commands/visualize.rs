use anyhow::Result;
use urbanmap::{BrowserViewer, MapOptions, PolygonPolicy, Prompter, SessionArgs, run_session};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::VisualizeArgs) -> Result<()> {
    let defaults = MapOptions::default();
    let options = MapOptions {
        polygon_policy: if args.include_multipolygons {
            PolygonPolicy::IncludeMultiPolygons
        } else {
            PolygonPolicy::PolygonsOnly
        },
        assume_epsg: args.assume_epsg,
        zoom: args.zoom.unwrap_or(defaults.zoom),
        ..defaults
    };

    let session = SessionArgs {
        historical: args.historical.clone(),
        current: args.current.clone(),
        output: args.output.clone(),
        show: !args.no_show,
        ask_save: !args.no_save,
    };

    let mut prompter = Prompter::stdio();
    let outcome = run_session(&mut prompter, &BrowserViewer, &session, &options)?;

    if outcome.figure.is_none() {
        log::debug!("map construction failed; display and save skipped");
    }

    Ok(())
}
