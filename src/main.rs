use alphametic_race::puzzle::{Mapping, Puzzle};
use alphametic_race::sampling::{SampleReport, SamplerConfig, sample};
use alphametic_race::search::config::DEFAULT_MIN_DIGITS;
use alphametic_race::search::{LeadingZeroPolicy, ParallelConfig, SearchConfig, race};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use log::info;
use std::time::Duration;

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "alphametic")]
#[command(about = "alphametic - randomized alphametic solver and race sampler")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// CLI leading-zero policy selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliLeadingZero {
    /// Leave an addend starting with 0 out of the sum
    Skip,
    /// Reject any candidate with an addend starting with 0
    Reject,
}

impl From<CliLeadingZero> for LeadingZeroPolicy {
    fn from(cli: CliLeadingZero) -> Self {
        match cli {
            CliLeadingZero::Skip => LeadingZeroPolicy::Skip,
            CliLeadingZero::Reject => LeadingZeroPolicy::Reject,
        }
    }
}

/// Options shared by every subcommand
#[derive(ClapArgs)]
struct RaceOptions {
    /// Puzzle equation, e.g. "send + more = money"
    #[arg(default_value = "alas + lass + no + more = cash")]
    puzzle: Puzzle,

    // --- Race options ---
    /// Number of contestants racing per puzzle
    #[arg(long, short = 'j', default_value = "2")]
    contestants: usize,
    /// Base random seed for reproducibility (contestants get seed + index)
    #[arg(long)]
    seed: Option<u64>,
    /// Give up on a race after this many seconds
    #[arg(long)]
    timeout: Option<u64>,
    /// Leave losing contestants running instead of stopping them
    #[arg(long)]
    no_cancel: bool,

    // --- Search options ---
    /// Smallest digit range to draw from
    #[arg(long, default_value_t = DEFAULT_MIN_DIGITS)]
    min_digits: usize,
    /// Handling of addends that evaluate with a leading zero
    #[arg(long, value_enum, default_value = "skip")]
    leading_zero: CliLeadingZero,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

impl RaceOptions {
    fn search_config(&self) -> SearchConfig {
        SearchConfig::default()
            .with_min_digits(self.min_digits)
            .with_leading_zero(self.leading_zero.into())
    }

    fn parallel_config(&self) -> ParallelConfig {
        ParallelConfig::default()
            .with_contestants(self.contestants)
            .with_seed_option(self.seed)
            .with_timeout_option(self.timeout.map(Duration::from_secs))
            .with_cancellation(!self.no_cancel)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single race and print the winning mapping
    Solve {
        #[command(flatten)]
        options: RaceOptions,
    },
    /// Run many races and report run-time statistics
    Sample {
        #[command(flatten)]
        options: RaceOptions,
        /// Number of races to run
        #[arg(long, short = 'n', default_value = "100")]
        samples: usize,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Render the puzzle with every letter replaced by its digit
fn render_equation(puzzle: &Puzzle, mapping: &Mapping) -> String {
    let numeral = |word: &str| mapping.numeral(word).unwrap_or_else(|| word.to_string());
    let addends: Vec<String> = puzzle.words().iter().map(|w| numeral(w)).collect();
    format!("{} = {}", addends.join(" + "), numeral(puzzle.target()))
}

fn run_solve(options: &RaceOptions) -> Result<(), Box<dyn std::error::Error>> {
    let puzzle = &options.puzzle;
    let parallel_config = options.parallel_config();

    println!("Solving: {}", puzzle);
    println!("  Contestants: {}", parallel_config.contestants);
    if let Some(seed) = parallel_config.base_seed {
        println!("  Base seed: {}", seed);
    }
    info!(
        "Racing {} contestants over {} letters",
        parallel_config.contestants,
        puzzle.letter_count()
    );

    let outcome = race(puzzle, &options.search_config(), &parallel_config)?;

    println!("\nWinner: contestant {}", outcome.winner);
    println!("{}", outcome.solution);
    println!("\tRun Time: {:?}", outcome.elapsed);
    println!("\n{}", render_equation(puzzle, &outcome.solution.mapping));
    if options.verbose {
        print!("\n{}", outcome.statistics.format_summary());
    }
    Ok(())
}

fn run_sample(options: &RaceOptions, samples: usize) -> Result<(), Box<dyn std::error::Error>> {
    let config = SamplerConfig::default()
        .with_samples(samples)
        .with_parallel(options.parallel_config())
        .with_search(options.search_config());

    info!(
        "Sampling {} races of {} contestants",
        config.samples, config.parallel.contestants
    );

    let collected = sample(&options.puzzle, &config)?;
    let report =
        SampleReport::from_samples(&options.puzzle, config.parallel.contestants, &collected);
    println!("{}", report);
    Ok(())
}

// --- Main Function ---
fn main() {
    let args = Args::parse();

    match args.command {
        Commands::Solve { options } => {
            init_logging(options.verbose);
            if let Err(e) = run_solve(&options) {
                eprintln!("Error during race: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Sample { options, samples } => {
            init_logging(options.verbose);
            if let Err(e) = run_sample(&options, samples) {
                eprintln!("Error during sampling: {}", e);
                std::process::exit(1);
            }
        }
    }
}
