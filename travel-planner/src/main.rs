use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use travel_planner::TravelPlanner;
use travel_planner::registrar::RegistrarConfig;
use travel_planner::store::{JsonRouteStore, JsonStoreConfig};

/// Store file used when `TRAVEL_PLANNER_DB` is not set.
const DEFAULT_DB_PATH: &str = "routes.json";

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let db_path = std::env::var("TRAVEL_PLANNER_DB")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_PATH));

    let store = match JsonRouteStore::open(JsonStoreConfig::new(&db_path)) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to open route store {}: {}", db_path.display(), e);
            std::process::exit(1);
        }
    };

    let planner = match TravelPlanner::open(store, RegistrarConfig::default()) {
        Ok(planner) => planner,
        Err(e) => {
            eprintln!("Failed to load routes: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Loaded {} locations and {} routes from {}",
        planner.graph().node_count(),
        planner.graph().edge_count(),
        db_path.display()
    );

    let mut args = std::env::args().skip(1);
    let (from, to) = match (args.next(), args.next()) {
        (Some(from), Some(to)) => (from, to),
        _ => {
            let names: Vec<_> = planner.nodes().map(|n| n.as_str()).collect();
            println!("Locations: {}", names.join(", "));
            println!();
            println!("Usage: travel-planner FROM TO");
            return;
        }
    };

    let options = planner.plan(&from, &to);
    for (label, result) in options.labelled() {
        println!();
        println!("{label}:");
        if result.is_empty() {
            println!("No route from {from} to {to}");
        } else {
            println!("{result}");
        }
    }
}
