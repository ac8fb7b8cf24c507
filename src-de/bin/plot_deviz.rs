//! Static figure generator: Rosenbrock contour with the current
//! population drawn over it, one colored marker per individual and a
//! segment back to its previous position.

use clap::Parser;
use plotly::color::Rgb;
use plotly::common::{Marker, Mode, Title};
use plotly::contour::Contour;
use plotly::{Layout, Plot, Scatter};

use deviz_de::{DEConfigBuilder, RunController};
use deviz_rosenbrock::rosenbrock_grid;

#[derive(Parser, Debug)]
#[command(name = "plot_deviz")]
#[command(about = "Plot the population over the Rosenbrock contour after N generations")]
struct Args {
    /// Number of generations to run before plotting
    #[arg(short, long, default_value_t = 30)]
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

    /// RNG seed for a reproducible figure
    #[arg(short, long)]
    seed: Option<u64>,

    /// Contour grid resolution per axis
    #[arg(long, default_value_t = 120)]
    resolution: usize,

    /// Output HTML file
    #[arg(short, long, default_value = "./data_generated/deviz.html")]
    output: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut builder = DEConfigBuilder::new()
        .population_size(args.population_size)
        .differential_weight(args.differential_weight)
        .crossover_probability(args.crossover_probability)
        .max_iterations(1000);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }

    let mut controller = RunController::new(builder.build())?;
    for _ in 0..args.generations {
        controller.step();
    }

    let bounds = controller.config().bounds;
    let (xs, ys, z) = rosenbrock_grid(
        bounds.min_x,
        bounds.max_x,
        bounds.min_y,
        bounds.max_y,
        args.resolution,
        args.resolution,
    );
    // log-compress the valley so the contour stays readable
    let z_rows: Vec<Vec<f64>> =
        z.outer_iter().map(|row| row.iter().map(|v| (1.0 + v).ln()).collect()).collect();

    let mut plot = Plot::new();
    plot.add_trace(Contour::new(xs, ys, z_rows).show_scale(false));

    let prev = controller.prev_population();
    for (i, p) in controller.population().iter().enumerate() {
        let (mut seg_x, mut seg_y) = (Vec::new(), Vec::new());
        if let Some(prev_pop) = prev {
            seg_x.push(prev_pop[i].x);
            seg_y.push(prev_pop[i].y);
        }
        seg_x.push(p.x);
        seg_y.push(p.y);

        let marker = Marker::new().size(9).color(Rgb::new(p.color.r, p.color.g, p.color.b));
        plot.add_trace(
            Scatter::new(seg_x, seg_y)
                .mode(Mode::LinesMarkers)
                .marker(marker)
                .name(p.color.hex())
                .show_legend(false),
        );
    }

    plot.set_layout(Layout::new().title(Title::with_text(format!(
        "Differential evolution after {} generations (NP={}, F={}, CR={})",
        controller.iteration(),
        args.population_size,
        args.differential_weight,
        args.crossover_probability
    ))));

    if let Some(parent) = std::path::Path::new(&args.output).parent() {
        std::fs::create_dir_all(parent)?;
    }
    plot.write_html(&args.output);
    eprintln!("figure written to {}", args.output);

    Ok(())
}
