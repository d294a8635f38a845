use clap::Parser;
use miette::Result;
use std::path::PathBuf;
use string_count::application::engine::StringCountEngine;
use string_count::domain::ports::{InputSourceBox, OutputSinkBox};
use string_count::infrastructure::file::{FileInputSource, FileOutputSink};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file holding N and K separated by whitespace
    #[arg(default_value = "INPUT.txt")]
    input: PathBuf,

    /// Output file for the total and the marker line
    #[arg(short, long, default_value = "OUTPUT.TXT")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("string_count=info")),
        )
        .init();

    let cli = Cli::parse();

    let source: InputSourceBox = Box::new(FileInputSource::new(&cli.input));
    let sink: OutputSinkBox = Box::new(FileOutputSink::new(&cli.output));
    let engine = StringCountEngine::new(source, sink);

    engine.run().await?;

    Ok(())
}
