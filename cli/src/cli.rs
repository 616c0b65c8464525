use std::path::PathBuf;

/// Urban transformation map CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "urbanmap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Defaults to an interactive `visualize` session
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Overlay historical (red) and current (blue) footprints on a web map
    Visualize(VisualizeArgs),

    /// Print feature count, geometry mix and CRS of a dataset
    Inspect(InspectArgs),
}

#[derive(clap::Args, Debug, Default)]
pub struct VisualizeArgs {
    /// Historical dataset (.shp, .zip, .geojson); prompted for if omitted
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub historical: Option<PathBuf>,

    /// Current dataset (.shp, .zip, .geojson); prompted for if omitted
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub current: Option<PathBuf>,

    /// Save the map to this HTML file without asking
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Do not open the map in a browser
    #[arg(long)]
    pub no_show: bool,

    /// Never ask whether to save the map
    #[arg(long)]
    pub no_save: bool,

    /// Draw MultiPolygon features too (skipped by default)
    #[arg(long)]
    pub include_multipolygons: bool,

    /// EPSG code for datasets that do not declare a CRS
    #[arg(long, value_name = "CODE")]
    pub assume_epsg: Option<u32>,

    /// Map zoom level, defaults to 10
    #[arg(long)]
    pub zoom: Option<f64>,
}

#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    /// Dataset to describe (.shp, .zip, .geojson)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub path: PathBuf,
}
