mod input;
mod points;
mod session;

use clap::{Parser, Subcommand};
use commute_core::Coordinate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "commute-cli")]
#[command(about = "Nearby houses around an office, and the nearest one")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Office location flags; unset parts fall back to `COMMUTE_DEFAULT_LAT`/`LNG`.
#[derive(Debug, Clone, Copy, clap::Args)]
struct OfficeArgs {
    /// Office latitude in decimal degrees.
    #[arg(long, allow_negative_numbers = true)]
    lat: Option<f64>,
    /// Office longitude in decimal degrees.
    #[arg(long, allow_negative_numbers = true)]
    lng: Option<f64>,
}

impl OfficeArgs {
    fn resolve(self, default: Coordinate) -> Coordinate {
        Coordinate::new(
            self.lat.unwrap_or(default.lat),
            self.lng.unwrap_or(default.lng),
        )
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate houses around the office and print them as JSON.
    Generate {
        #[command(flatten)]
        office: OfficeArgs,
        /// Number of houses; defaults to `COMMUTE_CANDIDATE_COUNT`.
        #[arg(long, allow_negative_numbers = true)]
        count: Option<i64>,
        /// Seed for a reproducible layout; defaults to `COMMUTE_RNG_SEED`.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the house in a JSON or YAML file nearest to the office.
    Nearest {
        #[command(flatten)]
        office: OfficeArgs,
        /// File holding an array of `{lat, lng}` objects.
        #[arg(long)]
        candidates: std::path::PathBuf,
    },
    /// Print the commute rings around the office.
    Rings {
        #[command(flatten)]
        office: OfficeArgs,
    },
    /// Read `lat,lng` office selections from stdin, one snapshot per change.
    Session {
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = commute_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Some(Commands::Generate {
            office,
            count,
            seed,
        }) => {
            let mut rng = build_rng(seed.or(config.rng_seed));
            points::run_generate(
                &mut stdout,
                office.resolve(config.default_reference),
                count,
                config.candidate_count,
                &mut rng,
            )?;
        }
        Some(Commands::Nearest { office, candidates }) => {
            points::run_nearest(
                &mut stdout,
                office.resolve(config.default_reference),
                &candidates,
            )?;
        }
        Some(Commands::Rings { office }) => {
            points::run_rings(
                &mut stdout,
                office.resolve(config.default_reference),
                config.ring_radii_m,
            )?;
        }
        Some(Commands::Session { seed }) => {
            let mut rng = build_rng(seed.or(config.rng_seed));
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            session::run_session(stdin, &mut stdout, config.candidate_count, &mut rng).await?;
        }
        None => {
            let mut rng = build_rng(config.rng_seed);
            points::run_generate(
                &mut stdout,
                config.default_reference,
                None,
                config.candidate_count,
                &mut rng,
            )?;
        }
    }

    Ok(())
}

/// Seeded generator when a seed is given, otherwise one seeded from the thread RNG.
fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}
