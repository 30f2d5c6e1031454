use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::Parser;
use questions_core::{load_files, IdfVariant, LoadOptions, Options, QuestionAnswerer};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "questions")]
#[command(about = "Answer a question from a directory of text files using TF-IDF", long_about = None)]
struct Cli {
    /// Corpus directory; every file directly inside it is a document
    corpus: String,
    /// Number of top files whose sentences are considered
    #[arg(
        long,
        default_value_t = 1,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    files: usize,
    /// Number of sentences to print
    #[arg(
        long,
        default_value_t = 1,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    sentences: usize,
    /// Use smoothed IDF = ln(1 + N/df) instead of ln(N/df)
    #[arg(long, default_value_t = false)]
    smoothed_idf: bool,
    /// Only load files with this extension (repeatable)
    #[arg(long = "ext")]
    extensions: Vec<String>,
    /// Print the full ranking as JSON instead of plain sentences
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let load_options = LoadOptions { extensions: cli.extensions.clone() };
    let files = load_files(&cli.corpus, &load_options)
        .with_context(|| format!("loading corpus {}", cli.corpus))?;

    let query = read_query().context("reading query from stdin")?;

    let options = Options {
        file_matches: cli.files,
        sentence_matches: cli.sentences,
        idf_variant: if cli.smoothed_idf { IdfVariant::Smoothed } else { IdfVariant::Standard },
    };
    let answer = QuestionAnswerer::new(options).answer(&files, &query)?;
    tracing::info!(
        corpus = %cli.corpus,
        num_files = files.len(),
        top_file = answer.files.first().map(|f| f.id.as_str()),
        num_sentences = answer.sentences.len(),
        "answered query"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &answer)?;
        writeln!(out)?;
    } else {
        for sentence in &answer.sentences {
            writeln!(out, "{}", sentence.id)?;
        }
    }
    Ok(())
}

fn read_query() -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        print!("Query: ");
        io::stdout().flush()?;
    }
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
