use anyhow::Context;
use clap::Parser;
use uniquify::seq_io;

/// Print a binary sequence file as text.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    file: String,

    #[arg(short, long, help = "Also report how many values repeat")]
    stats: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let seq = seq_io::map_binary_file(&args.file).context(format!("failed to open {}", args.file))?;

    println!("Values ({}):", seq.len());
    for (i, v) in seq.iter().enumerate() {
        println!("  {:>8}  {}", i, v);
    }

    if args.stats {
        let distinct = uniquify::uniquify(&seq)?.len();
        println!("Distinct: {}", distinct);
        println!("Repeated: {}", seq.len() - distinct);
    }

    Ok(())
}
