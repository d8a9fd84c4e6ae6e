use anyhow::Result;
use caremap::{generate_catalog, write_catalog, GeoPoint};
use std::env;

/// Generator configuration
struct Config {
    count: usize,
    seed: u64,
    center_lat: f64,
    center_lon: f64,
    output_file: Option<String>,
    use_brotli: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            count: 32,
            seed: 42,
            center_lat: 40.81,
            center_lon: -73.96,
            output_file: None,
            use_brotli: false,
        }
    }
}

fn print_usage() {
    eprintln!("Usage: caremap-catgen [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -count <n>        Number of listings to generate (default: 32)");
    eprintln!("  -seed <n>         PRNG seed for reproducible output (default: 42)");
    eprintln!("  -center <lat> <lon>  Map center the listings scatter around");
    eprintln!("  -o <file>         Output file (default: catalog.json)");
    eprintln!("  -brotli           Compress output with brotli (.json.br)");
    eprintln!("  -h, --help        Show this help");
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-count" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-count requires an argument");
                }
                config.count = args[i].parse()?;
            }
            "-seed" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-seed requires an argument");
                }
                config.seed = args[i].parse()?;
            }
            "-center" => {
                if i + 2 >= args.len() {
                    anyhow::bail!("-center requires two arguments: <lat> <lon>");
                }
                config.center_lat = args[i + 1].parse()?;
                config.center_lon = args[i + 2].parse()?;
                i += 2;
            }
            "-o" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-o requires an argument");
                }
                config.output_file = Some(args[i].clone());
            }
            "-brotli" => {
                config.use_brotli = true;
            }
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                anyhow::bail!("Unknown option: {}", other);
            }
        }
        i += 1;
    }

    if config.count == 0 {
        anyhow::bail!("-count must be at least 1");
    }

    Ok(config)
}

fn main() -> Result<()> {
    let config = parse_args()?;

    let output_path = config.output_file.clone().unwrap_or_else(|| {
        if config.use_brotli {
            "catalog.json.br".to_string()
        } else {
            "catalog.json".to_string()
        }
    });

    let center = GeoPoint {
        lat: config.center_lat,
        lon: config.center_lon,
    };
    let catalog = generate_catalog(config.seed, config.count, center);
    write_catalog(&catalog, &output_path)?;

    println!(
        "Catalog with {} listings written to: {}",
        config.count, output_path
    );

    Ok(())
}
