use overlay_placement::config::load_config;
use overlay_placement::density::DensityGrid;
use overlay_placement::edges::sobel_edge_field;
use overlay_placement::image::io::{save_density_heatmap, write_json_file};
use overlay_placement::integral::IntegralImage;
use overlay_placement::loader::{analyze_file, load_analysis_raster};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let result = analyze_file(&config.input, &config.placement, &config.loader)?;
    println!(
        "{}: x={:.1}% y={:.1}% confidence={:.3} fallback={} ({:.2} ms)",
        config.input.display(),
        result.x,
        result.y,
        result.confidence,
        result.fallback,
        result.latency_ms
    );

    if let Some(json_out) = &config.output.json_out {
        write_json_file(json_out, &result)?;
        println!("wrote {}", json_out.display());
    }

    if let Some(heatmap_out) = &config.output.heatmap_out {
        // same downscaled raster the analyzer saw
        let raster = load_analysis_raster(&config.input, config.loader.max_analysis_size)?;
        let edges = sobel_edge_field(&raster.as_view());
        let integral = IntegralImage::build(&edges);
        let grid = DensityGrid::compute(&integral, config.placement.grid_size);
        save_density_heatmap(&grid, heatmap_out, 32)?;
        println!("wrote {}", heatmap_out.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: placement_demo <config.json>".to_string()
}
