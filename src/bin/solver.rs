use clap::Parser;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Select};
use gridsearch::{
    render_overlay, ConfigOverrides, ConsoleRenderer, MazeSolver, RunResult, SearchEngineName,
    SolverConfig, Verbosity,
};
use std::{error::Error, path::PathBuf, process::ExitCode};
use strum::IntoEnumIterator;
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Solve a grid maze with one of several search strategies, animating the
/// search in the terminal.
struct Cli {
    #[arg(help = "The maze file")]
    maze: PathBuf,
    #[arg(
        value_enum,
        help = "The search engine to use. Without it an interactive menu is shown",
        short = 'e',
        long = "engine",
        id = "ENGINE"
    )]
    search_engine_name: Option<SearchEngineName>,
    #[arg(help = "A TOML config file", short = 'c', long = "config", id = "CONFIG")]
    config: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", long = "colour")]
    colour: bool,
    #[arg(
        help = "Draw the maze without colours",
        long = "no-colour",
        conflicts_with = "colour"
    )]
    no_colour: bool,
    #[arg(
        help = "Pause between frames, e.g. \"50ms\"; overrides the config",
        long = "delay",
        id = "DELAY"
    )]
    frame_delay: Option<String>,
    #[arg(help = "Only draw the final maze", long = "no-animate")]
    no_animate: bool,
    #[arg(help = "Seed for the random search", long = "seed", id = "SEED")]
    seed: Option<u64>,
    #[arg(
        help = "Print the run summary as JSON instead of drawing the maze",
        long = "json"
    )]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<SolverConfig, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => SolverConfig::from_path(path)?,
        None => SolverConfig::default(),
    };

    config.apply_overrides(ConfigOverrides {
        colour: match (cli.colour, cli.no_colour) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        },
        frame_delay: cli.frame_delay.clone(),
        animate: (cli.no_animate || cli.json).then_some(false),
        random_seed: cli.seed,
    });

    Ok(config)
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = load_config(&cli)?;
    let solver =
        MazeSolver::from_path(&cli.maze, &config.maze)?.with_random_seed(config.random_seed);
    let mut renderer = ConsoleRenderer::new(config.render.clone())?;

    match cli.search_engine_name {
        Some(engine) => {
            let result = solver.solve(engine, &mut renderer);
            report(&result, &renderer, cli.json)
        }
        None => menu(&solver, &mut renderer, cli.json),
    }
}

fn menu(
    solver: &MazeSolver,
    renderer: &mut ConsoleRenderer,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let engines: Vec<SearchEngineName> = SearchEngineName::iter().collect();
    let mut items: Vec<&str> = engines.iter().map(|engine| engine.label()).collect();
    items.push("Exit");
    let term = Term::stdout();
    let theme = ColorfulTheme::default();

    loop {
        let selection = Select::with_theme(&theme)
            .with_prompt("Choose a search algorithm")
            .items(&items)
            .default(0)
            .interact_opt()?;

        let Some(engine) = selection.and_then(|index| engines.get(index).copied()) else {
            info!("leaving menu");
            return Ok(());
        };

        let result = solver.solve(engine, renderer);
        report(&result, renderer, json)?;

        term.write_line("Press enter to continue")?;
        term.read_line()?;
        term.clear_screen()?;
    }
}

fn report(
    result: &RunResult,
    renderer: &ConsoleRenderer,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&result.summary(true))?);
        return Ok(());
    }

    // An animated run already left its last frame on screen.
    if !renderer.config().animate {
        println!("{}", render_overlay(result.overlay(), renderer.config()));
    }

    println!("{}", result.engine().label());
    println!("Nodes expanded: {}", result.nodes_expanded());
    if result.is_found() {
        println!("Path length: {}", result.path_length());
    } else {
        println!("No path found");
    }
    Ok(())
}
