use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io;
use std::time::Instant;
use uniquify::seq_io::{self, Format};
use uniquify::{Capacity, Config, HashKind, Uniquifier};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Text,
    Binary,
}

impl From<FormatArg> for Format {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => Format::Text,
            FormatArg::Binary => Format::Binary,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HashArg {
    Mix,
    Identity,
}

#[derive(Parser, Debug)]
#[command(version, about = "Remove repeated integers, keeping first occurrences in order", long_about = None)]
struct Args {
    /// Input file (stdin if omitted or "-")
    #[arg(short, long)]
    input: Option<String>,

    /// Output file (stdout if omitted or "-")
    #[arg(short, long)]
    output: Option<String>,

    #[arg(short, long, value_enum, default_value = "text", help = "Input encoding")]
    format: FormatArg,

    #[arg(long, value_enum, help = "Output encoding [default: same as input]")]
    output_format: Option<FormatArg>,

    #[arg(short, long, help = "Use a fixed probe table of this many slots instead of sizing it from the input")]
    capacity: Option<usize>,

    #[arg(long, default_value_t = 1.0, help = "Fraction of probe table slots that may be filled")]
    max_load: f64,

    #[arg(long, value_enum, default_value = "mix", help = "Slot hash function")]
    hash: HashArg,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn is_stdio(path: &Option<String>) -> bool {
    match path {
        None => true,
        Some(p) => p == "-",
    }
}

fn read_input(args: &Args) -> Result<Vec<u64>> {
    let format: Format = args.format.into();
    if is_stdio(&args.input) {
        if atty::is(atty::Stream::Stdin) {
            log::info!("reading from terminal, end input with EOF");
        }
        return seq_io::read_stream(io::stdin().lock(), format).context("failed to read stdin");
    }
    let path = args.input.as_deref().unwrap_or("-");
    seq_io::read_file(path, format).context(format!("failed to read {}", path))
}

fn write_output(args: &Args, seq: &[u64]) -> Result<()> {
    let format: Format = args.output_format.unwrap_or(args.format).into();
    if is_stdio(&args.output) {
        return seq_io::write_seq(io::stdout().lock(), seq, format).context("failed to write stdout");
    }
    let path = args.output.as_deref().unwrap_or("-");
    let file = File::create(path).context(format!("failed to create {}", path))?;
    seq_io::write_seq(file, seq, format).context(format!("failed to write {}", path))
}

fn config_from(args: &Args) -> Config {
    let capacity = match args.capacity {
        Some(n) => Capacity::Fixed(n),
        None => Capacity::Scaled,
    };
    let hash = match args.hash {
        HashArg::Mix => HashKind::Mix,
        HashArg::Identity => HashKind::Identity,
    };
    Config::new().capacity(capacity).max_load(args.max_load).hash(hash)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = config_from(&args);
    config.validate()?;

    let start_time = Instant::now();
    let mut seq = read_input(&args)?;
    let read_time = start_time.elapsed();

    let u = Uniquifier::new(config);
    let stats = u.compact(&mut seq)?;
    seq.truncate(stats.unique);

    if args.verbose {
        eprintln!(
            "read {} values in {:.3}s: {} unique, {} duplicates removed",
            stats.len,
            read_time.as_secs_f64(),
            stats.unique,
            stats.duplicates()
        );
        if stats.table_capacity > 0 {
            eprintln!(
                "probe table: {} slots, {} probes ({:.2} per distinct value)",
                stats.table_capacity,
                stats.probes,
                stats.probes as f64 / stats.unique as f64
            );
        }
    }

    write_output(&args, &seq)?;

    if args.verbose {
        eprintln!("done in {:.3}s", start_time.elapsed().as_secs_f64());
    }

    Ok(())
}
