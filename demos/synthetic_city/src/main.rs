//! synthetic_city — end-to-end population synthesis demo.
//!
//! Builds a nine-district city, assigns network nodes to districts, creates
//! one commuter per inhabitant and writes the population and both matrices
//! to `output/synthetic_city/`.
//!
//! ```text
//! synthetic_city [config.json] [data_dir]
//! ```
//!
//! `config.json` is a (partial) `SynthConfig`.  `data_dir` replaces the
//! built-in city with `census.csv`, `boundaries.csv` and `nodes.csv`.

mod city;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use env_logger::Env;
use log::info;

use sp_census::{CensusTable, DistrictBoundary, load_boundaries_csv, load_census_csv};
use sp_core::SynthRng;
use sp_network::{NodeNetwork, load_nodes_csv};
use sp_output::{MatrixFormat, PopulationCsvWriter, write_distance_matrix, write_worker_matrix};
use sp_synth::{CityBuilder, PersonFactory, SynthConfig};

const OUTPUT_DIR: &str = "output/synthetic_city";

fn load_config(path: &Path) -> Result<SynthConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn load_sources(dir: &Path) -> Result<(CensusTable, Vec<DistrictBoundary>, NodeNetwork)> {
    let census = load_census_csv(&dir.join("census.csv"))?;
    let boundaries = load_boundaries_csv(&dir.join("boundaries.csv"))?;
    let network = load_nodes_csv(&dir.join("nodes.csv"))?;
    Ok((census, boundaries, network))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let config = match args.get(1) {
        Some(path) => load_config(Path::new(path))?,
        None => SynthConfig::default(),
    };
    let (census, boundaries, network) = match args.get(2) {
        Some(dir) => load_sources(Path::new(dir))?,
        None => (city::census()?, city::boundaries(), city::network()),
    };

    println!("=== synthetic_city — rust_synthpop ===");
    println!(
        "Districts: {}  |  Nodes: {}  |  Seed: {}",
        census.len(),
        network.node_count(),
        config.seed
    );
    println!();

    // 1. Partition the network.
    let mut city = CityBuilder::new(&census)
        .boundaries(boundaries)
        .exclude(config.excluded_boundaries.iter().cloned())
        .exclude([city::COUNTY])
        .network(&network)
        .build()?;

    // 2. Synthesize, streaming persons straight to disk.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let out = Path::new(OUTPUT_DIR);
    let factory = PersonFactory::new(&config)?;
    let mut rng = SynthRng::new(config.seed);
    let mut sink = PopulationCsvWriter::create(out)?;

    let t0 = Instant::now();
    let created = city.synthesize_population(&factory, config.home_selection, &mut rng, &mut sink)?;
    let elapsed = t0.elapsed();
    let written = sink.finish()?;
    info!("population.csv: {written} persons");

    // 3. Matrices.
    let format = MatrixFormat::default();
    write_distance_matrix(out, &city, &format)?;
    write_worker_matrix(out, &city, &format)?;

    // 4. Summary.
    println!("Synthesized {created} persons in {:.3} s", elapsed.as_secs_f64());
    println!();
    println!(
        "{:<14} {:>7} {:>11} {:>12} {:>8} {:>6}",
        "District", "Inhab.", "Workplaces", "Workers in", "Local", "Nodes"
    );
    println!("{}", "-".repeat(63));
    for d in city.districts_by_name() {
        println!(
            "{:<14} {:>7} {:>11} {:>12} {:>8} {:>6}",
            d.name(),
            d.census().inhabitants(),
            d.census().workplaces(),
            d.workers(),
            d.incoming_workers_from(d.name()),
            d.node_count(),
        );
    }

    Ok(())
}
