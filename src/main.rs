use clap::Parser;
use field_paths::mercator::WebMercatorProjection;
use field_paths::{paths, read_polygon, reference, svg};

#[derive(Parser)]
struct Cli {
    /// GeoJSON file holding the field boundary polygon
    path: String,
    /// Row spacing in meters
    #[arg(long, default_value_t = 100.0)]
    row_width: f64,
    /// Write an SVG preview of the field and its rows
    #[arg(long)]
    svg: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Cli::parse();
    let polygon = match read_polygon::read_polygon_file(&args.path) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("warning: no valid polygon: {}", e);
            std::process::exit(1);
        }
    };
    polygon.info();

    let area = match polygon.area() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("warning: no valid polygon: {}", e);
            std::process::exit(1);
        }
    };
    let rows = match paths::generate_paths(&polygon, args.row_width) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("warning: no rows generated: {}", e);
            std::process::exit(1);
        }
    };
    // Both computations validated the ring, so projecting again cannot fail.
    let metric = polygon.mercator().expect("ring already validated");

    println!("    area: {:.2} m2", area);
    println!("geodesic: {:.2} m2 (geo crate)", reference::geodesic_area(&polygon.wgs));
    println!("  planar: {:.2} m2 (geo crate)", reference::planar_area(&metric));
    println!();
    println!("    rows: {} (row width = {} m)", rows.len(), args.row_width);
    println!("  bounds: {}", polygon.wgsbbox());
    println!("  center: {}", polygon.centroid());
    println!("coordinates:");
    for w in &polygon.wgs {
        println!("  {}", w);
    }

    if let Some(file) = &args.svg {
        let proj = WebMercatorProjection::make();
        let mut svg = svg::SVG::init(&field_paths::polygon::metric_bounds(&metric));
        svg.add_polygon(&metric, "none");
        for row in &rows {
            let chain = proj.to_metric(&row.wgs).expect("rows stay in range");
            svg.add_path(&chain, "blue");
        }
        std::fs::write(file, svg.render()).unwrap();
        log::info!("wrote {}", file);
    }
}
