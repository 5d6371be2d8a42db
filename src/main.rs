use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::error;

use frakview::{LogPresenter, RenderController, RenderStrategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Strategy {
    Sequential,
    Parallel,
}

impl From<Strategy> for RenderStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Sequential => Self::Sequential,
            Strategy::Parallel => Self::Parallel,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "frakview")]
#[command(about = "Renders one Mandelbrot or Julia set frame")]
struct Args {
    /// INI file with [calculation], [image] and [window] sections; defaults apply when omitted
    config: Option<PathBuf>,

    /// How pixels are scheduled
    #[arg(short, long, value_enum, default_value_t = Strategy::Parallel)]
    strategy: Strategy,

    /// Log a summary of the frame instead of opening a window
    #[arg(long)]
    headless: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let result = run(&args);

    if let Err(err) = &result {
        error!("{}", err);
    }

    result
}

#[cfg(feature = "gui")]
fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.headless {
        return run_headless(args);
    }

    let controller = RenderController::new(frakview::PixelsPresenter::new(), args.strategy.into());
    controller.run(args.config.as_deref())
}

#[cfg(not(feature = "gui"))]
fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if !args.headless {
        log::warn!("Built without the `gui` feature, logging the frame instead");
    }

    run_headless(args)
}

fn run_headless(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let controller = RenderController::new(LogPresenter::new(), args.strategy.into());
    controller.run(args.config.as_deref())
}
