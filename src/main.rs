use std::fs;
use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tbgen_core::{
    persistence,
    pipeline::{FixturePipeline, SweepRunner},
    symbols::{generate_symbols, read_symbols},
    SymbolCorpus, TbgenConfig,
};

#[derive(Parser, Debug)]
#[command(name = "tbgen", about = "Random TBox benchmark fixture generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a random symbol corpus file.
    Symbols {
        /// Output file path
        #[arg(long)]
        out: PathBuf,
        /// Number of symbols to draw
        #[arg(long, default_value_t = 100)]
        count: usize,
        /// Seed for the random source
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate a single TBox fixture.
    Generate {
        /// Directory the fixture directory is created under
        #[arg(long)]
        out_dir: PathBuf,
        /// Path to config file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Read symbols from a file instead of generating them
        #[arg(long)]
        symbols: Option<PathBuf>,
        /// Seed for the random source (overrides the config seed)
        #[arg(long)]
        seed: Option<u64>,
        /// Iteration index encoded into the directory name
        #[arg(long, default_value_t = 0)]
        iteration: usize,
        /// Also write a graphviz dot rendering
        #[arg(long)]
        dot: bool,
    },

    /// Run a parameter sweep: many parameter sets times many iterations.
    Sweep {
        /// Directory the fixture directories are created under
        #[arg(long)]
        out_dir: PathBuf,
        /// JSON file holding an array of configuration records
        #[arg(long)]
        configs: PathBuf,
        /// Iterations per parameter set
        #[arg(long, default_value_t = 5)]
        iterations: usize,
        /// Read symbols from a file instead of generating them
        #[arg(long)]
        symbols: Option<PathBuf>,
        /// Base seed for the sweep
        #[arg(long)]
        seed: Option<u64>,
        /// Also write graphviz dot renderings
        #[arg(long)]
        dot: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Symbols { out, count, seed } => cmd_symbols(out, count, seed)?,
        Commands::Generate {
            out_dir,
            config,
            symbols,
            seed,
            iteration,
            dot,
        } => cmd_generate(out_dir, config, symbols, seed, iteration, dot)?,
        Commands::Sweep {
            out_dir,
            configs,
            iterations,
            symbols,
            seed,
            dot,
        } => cmd_sweep(out_dir, configs, iterations, symbols, seed, dot)?,
    }

    Ok(())
}

fn cmd_symbols(out: PathBuf, count: usize, seed: Option<u64>) -> anyhow::Result<()> {
    let config = TbgenConfig::default();
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let corpus = generate_symbols(&mut rng, count, config.name_len_min, config.name_len_max);
    persistence::write_symbols(&out, &corpus)?;

    println!(
        "Wrote {} symbols ({} roles, {} concepts) to {} (seed {})",
        corpus.len(),
        corpus.roles().len(),
        corpus.concepts().len(),
        out.display(),
        seed
    );
    Ok(())
}

fn cmd_generate(
    out_dir: PathBuf,
    config_path: Option<PathBuf>,
    symbols_path: Option<PathBuf>,
    seed: Option<u64>,
    iteration: usize,
    dot: bool,
) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let seed = seed.or(config.seed).unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let corpus = load_or_generate_symbols(symbols_path, &config, &mut rng)?;
    println!(
        "Symbols: {} roles, {} concepts",
        corpus.roles().len(),
        corpus.concepts().len()
    );

    let fixture = FixturePipeline::new(&config, &corpus).run(&mut rng)?;
    println!(
        "Role graph: {} vertices, {} edges",
        fixture.role_summary.vertices, fixture.role_summary.edges
    );
    println!(
        "Concept graph: {} vertices, {} edges, {} conflicts",
        fixture.concept_summary.vertices,
        fixture.concept_summary.edges,
        fixture.concept_summary.conflicts
    );
    if fixture.role_stats.retry_exhausted + fixture.concept_stats.retry_exhausted > 0 {
        println!(
            "Note: {} node(s) left unattached after hitting the retry cap",
            fixture.role_stats.retry_exhausted + fixture.concept_stats.retry_exhausted
        );
    }

    let dir = persistence::write_fixture(&out_dir, &config, &fixture, iteration, seed, dot)?;
    println!("Fixture written to {} (seed {})", dir.display(), seed);
    Ok(())
}

fn cmd_sweep(
    out_dir: PathBuf,
    configs_path: PathBuf,
    iterations: usize,
    symbols_path: Option<PathBuf>,
    seed: Option<u64>,
    dot: bool,
) -> anyhow::Result<()> {
    let configs: Vec<TbgenConfig> = serde_json::from_str(&fs::read_to_string(&configs_path)?)?;
    if configs.is_empty() {
        bail!("sweep config file {} holds no parameter sets", configs_path.display());
    }

    let base_seed = seed.or(configs[0].seed).unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(base_seed);

    // One corpus shared across every run, sized by the first parameter set.
    let corpus = load_or_generate_symbols(symbols_path, &configs[0], &mut rng)?;
    println!(
        "Symbols: {} roles, {} concepts",
        corpus.roles().len(),
        corpus.concepts().len()
    );

    let runner = SweepRunner::new(&out_dir, iterations, dot);
    let written = runner.run(base_seed, &configs, &corpus)?;

    println!(
        "Wrote {} fixtures under {} (base seed {})",
        written.len(),
        out_dir.display(),
        base_seed
    );
    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<TbgenConfig> {
    let config = match path {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => TbgenConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn load_or_generate_symbols(
    path: Option<PathBuf>,
    config: &TbgenConfig,
    rng: &mut StdRng,
) -> anyhow::Result<SymbolCorpus> {
    let mut corpus = match path {
        Some(path) => read_symbols(path)?,
        None => generate_symbols(rng, config.symbol_count, config.name_len_min, config.name_len_max),
    };
    // The builders sample these as pools; duplicates would skew the draw.
    corpus.dedup();
    Ok(corpus)
}
