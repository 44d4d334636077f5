use std::time::Duration;

use clap::{Args, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use ominoes::{Omino, Point, MAX_OMINO_SIZE};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod enumerate;
use enumerate::enumerate;

fn finish_bar(bar: &ProgressBar, duration: Duration, found: usize, n: usize) {
    let time = duration.as_micros();
    let secs = time / 1_000_000;
    let micros = time % 1_000_000;

    bar.finish_with_message(format!(
        "Done! Found {found} ominoes (N = {n}) in {secs}.{micros:06} s"
    ));
}

pub fn make_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);

    let pos_width = format!("{len}").len();

    let template =
        format!("[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos:>{pos_width}}}/{{len}} {{msg}} remaining: [{{eta_precise}}]");

    let style = ProgressStyle::with_template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");

    bar.set_style(style);
    bar
}

#[derive(Clone, Parser)]
#[command(name = "ominoes")]
pub struct Cli {
    /// Log every grown size
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub opts: Opts,
}

#[derive(Clone, clap::Subcommand)]
pub enum Opts {
    /// Enumerate all free polyominoes up to a given size
    Enumerate(EnumerateOpts),
    /// Print the canonical form of a single shape
    Canonical(CanonicalOpts),
}

#[derive(Clone, Args)]
pub struct EnumerateOpts {
    /// The largest omino size to enumerate.
    #[arg(value_parser = parse_size)]
    pub n: usize,

    /// Draw every omino of sizes up to and including this one. Larger
    /// sizes only report their count.
    #[arg(long, short = 'd', default_value_t = 5)]
    pub display_up_to: usize,

    /// Don't show progress bars.
    #[arg(long, short = 'q')]
    pub no_progress: bool,
}

#[derive(Clone, Args)]
pub struct CanonicalOpts {
    /// The squares of the shape, as `x,y` pairs.
    #[arg(required = true, value_parser = parse_point)]
    pub points: Vec<Point>,
}

fn parse_size(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("{e}"))?;
    if (1..=MAX_OMINO_SIZE).contains(&n) {
        Ok(n)
    } else {
        Err(format!("must be between 1 and {MAX_OMINO_SIZE}"))
    }
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in `{s}`: {e}"))?;
    Ok(Point::new(x, y))
}

fn canonical(opts: &CanonicalOpts) {
    let size = opts.points.len();

    match Omino::new(size, opts.points.iter().copied()) {
        Ok(omino) => {
            tracing::debug!(size, "canonicalized shape");
            println!("{omino}");
        }
        Err(e) => {
            tracing::error!(size, "invalid shape: {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    SubscriberBuilder::default()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.opts {
        Opts::Enumerate(e) => enumerate(&e),
        Opts::Canonical(c) => canonical(&c),
    }
}
