use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use cli::{
    handlers::{handle_analyze, handle_generate},
    logger,
};
use sweep::{
    dataset::{GenerationConfig, GenerationSeed, load_vocabulary},
    results::AnalysisConfig,
};

#[derive(Parser)]
#[command(
    version = sweep::VERSION,
    about = "Synthetic workloads and sweep analysis for LLM serving benchmarks"
)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a JSON-lines dataset of synthetic requests
    Generate {
        /// Number of requests to generate
        #[arg(long = "num_requests", value_parser = clap::value_parser!(u64).range(1..))]
        num_requests: u64,
        /// Target input length in tokens
        #[arg(long = "input_length")]
        input_length: u64,
        /// Target output length in tokens
        #[arg(long = "output_length")]
        output_length: u64,
        /// Output file path (stdout if not specified)
        #[arg(long = "output_file")]
        output_file: Option<PathBuf>,
        /// Seed for reproducible prompts
        #[arg(long)]
        seed: Option<u64>,
        /// Whitespace separated word list replacing the built-in vocabulary
        #[arg(long = "vocabulary_file")]
        vocabulary_file: Option<PathBuf>,
    },
    /// Summarize a benchmark sweep log
    Analyze {
        /// Sweep log with an "ISL,OSL,..." header row
        #[arg(long = "results_file", default_value = "results/summary_results.log")]
        results_file: PathBuf,
        /// Folder for chart images
        #[arg(long = "output_dir", default_value = ".")]
        output_dir: PathBuf,
        /// Skip chart rendering
        #[arg(long = "no_charts")]
        no_charts: bool,
        /// Also save the ISL x OSL throughput matrix as CSV
        #[arg(long = "matrix_csv")]
        matrix_csv: Option<PathBuf>,
    },
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Generate {
            num_requests,
            input_length,
            output_length,
            output_file,
            seed,
            vocabulary_file,
        } => {
            let mut config =
                GenerationConfig::new(num_requests, input_length, output_length);
            if let Some(seed) = seed {
                config = config.seed(GenerationSeed::Custom(seed));
            }
            if let Some(vocabulary_file) = vocabulary_file {
                config = config.vocabulary(load_vocabulary(&vocabulary_file)?);
            }
            handle_generate(config, output_file)
        },
        Commands::Analyze {
            results_file,
            output_dir,
            no_charts,
            matrix_csv,
        } => {
            let config = AnalysisConfig::new(results_file)
                .output_dir(output_dir)
                .charts(!no_charts)
                .matrix_csv(matrix_csv);
            handle_analyze(config)
        },
    }
}

fn main() {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match cli.command {
        Some(command) => {
            if let Err(error) = run(command) {
                eprintln!("❌ {}", error);
                std::process::exit(1);
            }
        },
        None => {
            let mut cmd = Cli::command();
            if let Err(error) = cmd.print_help() {
                eprintln!("❌ {}", error);
            }
        },
    }
}
