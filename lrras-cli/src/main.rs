//! LRRAS CLI
//!
//! Command-line interface for index tables, normalization and the quadratic
//! demonstration.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lrras_cli::{render_all, render_table, solve, QuadraticReport, TableConfig, TableStyle};
use lrras_core::IndexOp;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lrras")]
#[command(author, version, about = "Extended complex scalars with a four-state space index", long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print index combination tables
    Table {
        /// Operator whose table to print
        #[arg(long, value_enum, default_value = "all")]
        op: OpArg,

        /// Output style
        #[arg(long, value_enum, default_value = "text", env = "LRRAS_TABLE_STYLE")]
        style: StyleArg,

        /// Use N/Z/R/P instead of numeric codes
        #[arg(long, env = "LRRAS_SYMBOLS")]
        symbols: bool,

        /// Omit the header row
        #[arg(long)]
        no_header: bool,
    },

    /// Normalize a complex value into a scalar
    #[command(allow_negative_numbers = true)]
    Normalize {
        /// Real part
        re: f64,

        /// Imaginary part
        #[arg(default_value = "0")]
        im: f64,

        /// Raw space index code (-1, 0, 1, 2; others saturate on zero/infinite values)
        #[arg(short, long, default_value = "1")]
        index: i32,

        /// Print JSON instead of `(V, I)`
        #[arg(long)]
        json: bool,
    },

    /// Solve a·x² + b·x + c = 0 classically and with extended scalars
    #[command(allow_negative_numbers = true)]
    Solve {
        a: f64,
        b: f64,
        c: f64,

        /// Print JSON report
        #[arg(long)]
        json: bool,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OpArg {
    Add,
    Sub,
    Mul,
    Div,
    All,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum StyleArg {
    Text,
    Latex,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "lrras=debug,lrras_cli=debug,lrras_core=debug"
    } else {
        "lrras=info,lrras_core=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Command::Table {
            op,
            style,
            symbols,
            no_header,
        } => {
            let config = build_config(style, symbols, no_header);
            let output = match op {
                OpArg::Add => render_table(IndexOp::Add, &config),
                OpArg::Sub => render_table(IndexOp::Subtract, &config),
                OpArg::Mul => render_table(IndexOp::Multiply, &config),
                OpArg::Div => render_table(IndexOp::Divide, &config),
                OpArg::All => render_all(&config),
            };
            print!("{}", output);
        }

        Command::Normalize { re, im, index, json } => {
            let scalar = lrras_cli::normalize(re, im, index)
                .with_context(|| format!("Failed to normalize {re}{im:+}i in space {index}"))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&scalar)?);
            } else {
                println!("{}", scalar);
            }
        }

        Command::Solve { a, b, c, json } => {
            let report = solve(a, b, c)
                .with_context(|| format!("Failed to solve {a}x² + {b}x + {c} = 0"))?;
            info!(extended = %report.extended, "solved");

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
    }

    Ok(())
}

fn build_config(style: StyleArg, symbols: bool, no_header: bool) -> TableConfig {
    // Start with preset
    let mut config = if symbols {
        TableConfig::symbolic()
    } else {
        TableConfig::default()
    };

    config.style = match style {
        StyleArg::Text => TableStyle::Text,
        StyleArg::Latex => TableStyle::Latex,
    };

    if no_header {
        config.header = false;
    }

    config
}

fn print_report(report: &QuadraticReport) {
    let show = |root: &Option<String>| root.clone().unwrap_or_else(|| "none".to_string());

    println!("{}x² + {}x + {} = 0", report.a, report.b, report.c);
    println!("  classical: x₁ = {}, x₂ = {}", show(&report.classical[0]), show(&report.classical[1]));
    println!("  signed:    x = {}", show(&report.signed));
    println!("  extended:  x = {}", report.extended);
    println!(
        "  check:     a·x² + b·x + c = {}{}",
        report.substituted,
        if report.vanishes() { "" } else { "  (does not vanish)" }
    );
}
