//! Headless batch runner: evolve a population for N generations,
//! record the full trace to CSV and print a summary.

use clap::Parser;
use deviz_de::{DEConfigBuilder, best_member, run_recorded};

#[derive(Parser, Debug)]
#[command(name = "run_deviz")]
#[command(about = "Run differential evolution on the Rosenbrock function headlessly")]
struct Args {
    /// Number of generations to run
    #[arg(short, long, default_value_t = 200)]
    generations: usize,

    /// Population size NP (4..=36)
    #[arg(short, long, default_value_t = 20)]
    population_size: usize,

    /// Differential weight F (0..=2)
    #[arg(short = 'f', long, default_value_t = 0.8)]
    differential_weight: f64,

    /// Crossover probability CR (0..=1)
    #[arg(short = 'c', long, default_value_t = 0.9)]
    crossover_probability: f64,

    /// Generations before the run wraps around and restarts (1..=1000)
    #[arg(short, long, default_value_t = 1000)]
    max_iterations: usize,

    /// RNG seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory for the trace CSV
    #[arg(short, long, default_value = "./data_generated/records")]
    output_dir: String,

    /// Label used for the CSV filename
    #[arg(short, long, default_value = "rosenbrock")]
    label: String,

    /// Print a progress line per generation
    #[arg(long, default_value_t = false)]
    disp: bool,

    /// Dump the final run snapshot as JSON to stdout
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut builder = DEConfigBuilder::new()
        .population_size(args.population_size)
        .differential_weight(args.differential_weight)
        .crossover_probability(args.crossover_probability)
        .max_iterations(args.max_iterations)
        .disp(args.disp);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }

    let (snapshot, csv_path) =
        run_recorded(&args.label, builder.build(), args.generations, &args.output_dir)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        let accepted = snapshot.trace.iter().filter(|r| r.accepted).count();
        eprintln!(
            "ran {} generations (counter at {}), last generation accepted {}/{}",
            args.generations,
            snapshot.iteration,
            accepted,
            snapshot.population.len()
        );
        if let Some((idx, fitness)) = best_member(&snapshot.population) {
            let best = &snapshot.population[idx];
            eprintln!(
                "best individual {} at ({:.6}, {:.6}) with f = {:.6e}",
                best.color.hex(),
                best.x,
                best.y,
                fitness
            );
        }
        eprintln!("trace saved to {}", csv_path);
    }

    Ok(())
}
