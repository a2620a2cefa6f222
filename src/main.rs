use clap::Parser;
use class_odds::{
    full_report, master_table, methods_heading, requirements_report, run_trials,
    GenerationMethod, Randomizer, RuleSet, RulesError, DEFAULT_TRIALS,
};

#[derive(Parser)]
#[command(name = "class-odds")]
#[command(about = "Odds of qualifying for each class under each ability score generation method")]
struct Cli {
    /// Trials per generation method
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    trials: u64,
    /// Class requirements to test against
    #[arg(long, value_enum, default_value_t = RuleSet::Phb)]
    rules: RuleSet,
    /// Generation methods to run, by number (defaults to all)
    #[arg(long = "method", value_parser = clap::value_parser!(u8).range(0..5))]
    methods: Vec<u8>,
    /// RNG seed for repeatable runs
    #[arg(long)]
    seed: Option<u64>,
    /// Print one tab separated table of whole percentages instead
    #[arg(long)]
    tsv: bool,
    /// Print the class requirement tables first
    #[arg(long)]
    show_requirements: bool,
}

fn main() -> Result<(), RulesError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let table = cli.rules.table()?;

    let methods: Vec<_> = if cli.methods.is_empty() {
        GenerationMethod::ALL.to_vec()
    } else {
        cli.methods
            .iter()
            .filter_map(|i| GenerationMethod::from_index(*i as usize))
            .collect()
    };

    let mut roller = match cli.seed {
        Some(seed) => Randomizer::seeded(seed),
        None => Randomizer::from_entropy(),
    };

    log::info!(
        "{} classes from {}, methods: {}",
        table.len(),
        cli.rules,
        methods_heading(&methods)
    );

    if cli.show_requirements {
        print!("{}", requirements_report(&table));
    }

    let tallies: Vec<_> = methods
        .iter()
        .map(|method| run_trials(*method, &table, cli.trials, &mut roller))
        .collect();

    if cli.tsv {
        print!("{}", master_table(&table, &tallies));
    } else {
        print!("{}", full_report(&table, &tallies));
    }

    Ok(())
}
