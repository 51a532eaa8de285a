//! Read one URL per line from stdin and print each one that parses as JSON
//!
//! Usage: `urlparse [--compact] [--quit WORD]`
//!
//! Lines that are not URLs produce no output. Reading stops at end of input
//! or at the quit line. Set `RUST_LOG=debug` to see why lines are rejected.

use backcomb::url::UrlParser;
use clap::Parser;
use std::error::Error;
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "urlparse")]
#[command(about = "Decompose URLs read from stdin into JSON records")]
struct Args {
    /// Print each record on a single line
    #[arg(long)]
    compact: bool,

    /// Line that ends the session
    #[arg(long, default_value = "quit")]
    quit: String,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Parse every line of `input` up to the quit line, writing one JSON record
/// per URL to `output`
///
/// Returns the number of parsed and rejected lines.
fn run(
    input: impl BufRead,
    mut output: impl Write,
    parser: &UrlParser,
    args: &Args,
) -> Result<(usize, usize), Box<dyn Error>> {
    let (mut parsed, mut rejected) = (0usize, 0usize);

    for line in input.lines() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line == args.quit {
            break;
        }

        match parser.parse(line) {
            Ok(url) => {
                let json = if args.compact {
                    url.to_json_compact()?
                } else {
                    url.to_json()?
                };
                writeln!(output, "{}", json)?;
                parsed += 1;
            }
            Err(_) => rejected += 1,
        }
    }

    output.flush()?;
    Ok((parsed, rejected))
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let args = Args::parse();
    let parser = UrlParser::new();
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let (parsed, rejected) = run(stdin, stdout, &parser, &args)?;
    info!(parsed, rejected, "done");
    Ok(())
}
