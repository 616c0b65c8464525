use anyhow::Result;
use urbanmap::Features;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::InspectArgs) -> Result<()> {
    let features = Features::read_from_path(&args.path)?;

    println!("Number of features: {}", features.len());
    match features.epsg() {
        Some(epsg) => println!("CRS: EPSG:{epsg}"),
        None => println!("CRS: unknown"),
    }

    println!("Geometry mix:");
    for (kind, count) in features.geometry_mix() {
        println!("  - {kind}: {count}");
    }

    if let Some(center) = features.mean_centroid() {
        println!("Mean centroid (source CRS): {:.6}, {:.6}", center.x(), center.y());
    }

    Ok(())
}
