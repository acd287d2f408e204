use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use log::{debug, info, LevelFilter};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use logsamples::{generate_samples, write_samples, SampleKind};

/// Prints multiline sample logs (Java stack traces, Python tracebacks and delimited config
/// sections) to be fed into a log chunking tool.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Emit only the given sample kinds (repeatable). Output order stays fixed
    #[arg(short, long = "kind", value_name = "KIND")]
    kinds: Vec<SampleKind>,

    /// Print the chunking option suitable for each sample below its header
    #[arg(long)]
    hints: bool,

    /// Write to file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase diagnostic verbosity (-v info, -vv debug), logged to stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    // stdout carries the samples, keep diagnostics off it
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn open_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            debug!("writing to {}", path.display());
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// Writes the samples selected by `args` and returns the number of sample lines written.
fn emit<W: Write>(out: &mut W, args: &Args) -> anyhow::Result<usize> {
    let kinds = SampleKind::select(&args.kinds);
    debug!("selected samples: {kinds:?}");

    let samples = generate_samples();
    write_samples(out, &samples, &kinds, args.hints).context("failed to write samples")?;
    out.flush().context("failed to flush output")?;

    let line_count: usize = kinds
        .iter()
        .map(|k| samples.get(*k).line_count())
        .sum();
    info!("wrote {} sample blocks, {line_count} lines", kinds.len());
    Ok(line_count)
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut out = open_output(args.output.as_deref())?;
    emit(&mut out, args)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;
    run(&args)
}
