//! Command-line demo for pegcomb
//!
//! Parses repeated `abc` groups from the given input and reports the groups
//! found together with the position parsing stopped at.
//!
//! Usage:
//!   pegcomb [INPUT] [--position N] [--verbose]

use anyhow::{anyhow, bail};
use clap::Parser as ClapParser;
use pegcomb::{Parser, apply, literal, many, seq};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

#[derive(ClapParser, Debug)]
#[command(name = "pegcomb", version, about = "Match repeated `abc` groups in a byte string")]
struct Args {
    /// Input to parse
    #[arg(default_value = "abcabc123abc")]
    input: String,

    /// Offset to start parsing from
    #[arg(long, short, default_value_t = 0)]
    position: usize,

    /// Log every backtracking step
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::TRACE } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let input = args.input.as_bytes();
    if args.position > input.len() {
        bail!(
            "position {} is past the end of the {}-byte input",
            args.position,
            input.len()
        );
    }

    let abc = apply(
        |bytes: Vec<u8>| String::from_utf8_lossy(&bytes).into_owned(),
        seq(vec![literal(b'a'), literal(b'b'), literal(b'c')]),
    );
    let (groups, position) = many(abc).parse_at(input, args.position);
    let groups = groups.map_err(|failure| anyhow!("repetition failed: {failure}"))?;

    debug!(start = args.position, end = position, "parse finished");
    info!(groups = groups.len(), "matched");

    println!("{:?} {}", groups, position);
    Ok(())
}
