use cancel_this::Cancellable;
use clap::Parser;
use computation_process::{Algorithm, Stateful};
use env_logger::Builder;
use log::LevelFilter;
use std::sync::Arc;
use support_enum::elimination::{
    EliminationConfig, EliminationDepth, IteratedActionElimination, IteratedStrategyElimination,
};
use support_enum::enumeration::{
    AllInequivalentSubsupports, AllSubsupports, AllUndominatedSubsupports, EnumerationConfig,
    PossibleNashSubsupports,
};
use support_enum::game::{ExtensiveGame, NormalGame};
use support_enum::progress::LogProgress;
use support_enum::support::{BehaviorSupport, StrategySupport, SupportSize};

#[derive(Parser)]
#[command(name = "support_enum")]
#[command(about = "Enumerate undominated supports or eliminate dominated strategies in a game")]
struct Args {
    /// Path to a JSON encoded game
    #[arg(value_name = "FILE")]
    file: String,

    /// Representation of the game stored in FILE
    #[arg(long, default_value = "extensive", require_equals = true)]
    form: Form,

    /// What to compute (normal form games only support `eliminate`)
    #[arg(long, default_value = "nash", require_equals = true)]
    mode: Mode,

    /// Use strong (strict) domination
    #[arg(long)]
    strong: bool,

    /// Compare actions conditionally on reaching their information set
    #[arg(long)]
    conditional: bool,

    /// Repeat elimination until nothing changes
    #[arg(long)]
    iterate: bool,

    /// Logging verbosity (use -v for info, or -v=LEVEL for specific level)
    #[arg(long, short = 'v', value_name = "LEVEL", num_args = 0..=1, default_missing_value = "info", require_equals = true)]
    verbose: Option<Option<LogLevel>>,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Form {
    Extensive,
    Normal,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Mode {
    All,
    Inequivalent,
    Undominated,
    Nash,
    Eliminate,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
        }
    }
}

fn main() {
    let args = Args::parse();

    let log_level = match args.verbose {
        None => LevelFilter::Off,
        Some(None) => LevelFilter::Info,
        Some(Some(level)) => level.into(),
    };
    Builder::from_default_env().filter_level(log_level).init();

    let json = std::fs::read_to_string(&args.file).unwrap_or_else(|e| {
        eprintln!("Failed to read game file {}: {}", args.file, e);
        std::process::exit(1);
    });

    match args.form {
        Form::Extensive => run_extensive(&args, &json),
        Form::Normal => run_normal(&args, &json),
    }
}

fn run_extensive(args: &Args, json: &str) {
    let game: ExtensiveGame = serde_json::from_str(json).unwrap_or_else(|e| {
        eprintln!("Failed to parse extensive game: {}", e);
        std::process::exit(1);
    });
    if let Err(e) = game.check() {
        eprintln!("Invalid extensive game: {}", e);
        std::process::exit(1);
    }
    println!(
        "Loaded extensive game with {} players and {} nodes.",
        game.num_players(),
        game.num_nodes()
    );
    let support = BehaviorSupport::full(&Arc::new(game));

    let mut config = EnumerationConfig::new(args.strong, args.conditional);
    if args.verbose.is_some() {
        config = config.with_progress(LogProgress);
    }

    // Helper function to print the supports produced by a generator
    fn print_supports<G>(generator: G) -> usize
    where
        G: Iterator<Item = Cancellable<BehaviorSupport>>,
    {
        let mut enumerated = 0;
        for result in generator {
            match result {
                Ok(support) => {
                    enumerated += 1;
                    println!(
                        "Support #{} (dof={}): {}",
                        enumerated,
                        support.num_degrees_of_freedom(),
                        support
                    );
                }
                Err(e) => {
                    eprintln!("Error during support enumeration: {}", e);
                    break;
                }
            }
        }
        enumerated
    }

    let enumerated = match args.mode {
        Mode::All => print_supports(AllSubsupports::configure(config, &support)),
        Mode::Inequivalent => {
            print_supports(AllInequivalentSubsupports::configure(config, &support))
        }
        Mode::Undominated => {
            print_supports(AllUndominatedSubsupports::configure(config, &support))
        }
        Mode::Nash => match PossibleNashSubsupports::run(config, &support) {
            Ok(supports) => print_supports(supports.into_iter().map(Ok)),
            Err(e) => {
                eprintln!("Error during support enumeration: {}", e);
                0
            }
        },
        Mode::Eliminate => {
            let config = elimination_config(args, support.game().num_players());
            match IteratedActionElimination::run(config, &support) {
                Ok(reduced) => {
                    println!("Undominated actions: {}", reduced);
                    return;
                }
                Err(e) => {
                    eprintln!("Error during elimination: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    println!("Total supports enumerated: {}", enumerated);
}

fn run_normal(args: &Args, json: &str) {
    if !matches!(args.mode, Mode::Eliminate) {
        eprintln!("Normal form games only support `--mode=eliminate`.");
        std::process::exit(1);
    }
    let game: NormalGame = serde_json::from_str(json).unwrap_or_else(|e| {
        eprintln!("Failed to parse normal game: {}", e);
        std::process::exit(1);
    });
    if let Err(e) = game.check() {
        eprintln!("Invalid normal game: {}", e);
        std::process::exit(1);
    }
    println!("Loaded normal game with {} players.", game.num_players());

    let support = StrategySupport::full(&Arc::new(game));
    let config = elimination_config(args, support.num_players());
    match IteratedStrategyElimination::run(config, &support) {
        Ok(reduced) => println!("Undominated strategies: {}", reduced),
        Err(e) => {
            eprintln!("Error during elimination: {}", e);
            std::process::exit(1);
        }
    }
}

fn elimination_config(args: &Args, num_players: usize) -> EliminationConfig {
    let mut config = EliminationConfig::new(num_players);
    config.strong = args.strong;
    config.conditional = args.conditional;
    if args.iterate {
        config.depth = EliminationDepth::Iterative;
    }
    config
}
