use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod enumerate;
mod inspect;
mod provenance;

#[derive(Parser)]
#[command(name = "omino")]
#[command(about = "Enumerate free polyominoes by size")]
struct Cmd {
    /// Optional run tag; propagated to logs and provenance sidecars
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Grow generations 1..=max-size and report their counts
    Enumerate {
        #[arg(long, default_value_t = 8)]
        max_size: usize,
        /// Write size-NN.txt (+ provenance sidecar) per generation here
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Print the shapes of generations with fewer shapes than this
        #[arg(long, default_value_t = 10)]
        print_below: usize,
        /// Render only the bounding box instead of the size x size square
        #[arg(long)]
        tight: bool,
    },
    /// Render an encoded shape and print its canonical form
    Show {
        /// Encoding such as "4/0.1.2.5"
        encoding: String,
        #[arg(long)]
        tight: bool,
    },
    /// Draw random polyominoes by random growth
    Sample {
        #[arg(long)]
        size: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 1)]
        count: u64,
        /// Also print the renderings
        #[arg(long)]
        render: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Enumerate {
            max_size,
            out_dir,
            print_below,
            tight,
        } => {
            let cfg = enumerate::EnumerateCfg {
                max_size,
                out_dir,
                print_below,
                render: inspect::render_cfg(tight),
                tag: cmd.tag,
            };
            let reports = enumerate::run(&cfg, &mut std::io::stdout().lock())?;
            let total_ms: f64 = reports.iter().map(|r| r.elapsed_ms).sum();
            tracing::info!(generations = reports.len(), total_ms, "done");
            Ok(())
        }
        Action::Show { encoding, tight } => {
            inspect::show(&encoding, tight, &mut std::io::stdout().lock())
        }
        Action::Sample {
            size,
            seed,
            count,
            render,
        } => inspect::sample(size, seed, count, render, &mut std::io::stdout().lock()),
        Action::Report => inspect::report(cmd.tag, &mut std::io::stdout().lock()),
    }
}
