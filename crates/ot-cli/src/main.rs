//! Command-line frontend for the overthink analysis engine.
//!
//! Accepts a question, overanalyzes it, and prints the findings. With
//! `--thinker` the question is delegated to a local Ollama model; if that
//! fails for any reason, the built-in engine takes over after a warning.

use std::io::{self, Write};
use std::process;

use clap::{CommandFactory, Parser};

use ot_engine::{AnalysisResult, Formatter, LocalThinker, Thinker};
use ot_ollama::Client;

#[derive(Parser)]
#[command(
    name = "overthink",
    about = "A dramatic overanalysis engine for questions that deserved less attention",
    version,
    after_help = "Examples:\n  \
        overthink \"Should I text my ex?\"\n  \
        overthink \"Is it too late to start coding?\"\n  \
        overthink --thinker llama3 \"Should I quit my job?\""
)]
struct Cli {
    /// Ollama model to delegate the analysis to (e.g. llama3, mistral)
    #[arg(long, value_name = "MODEL")]
    thinker: Option<String>,

    /// RNG seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the analysis record as JSON instead of formatted text
    #[arg(long)]
    json: bool,

    /// The question to overanalyze
    #[arg(trailing_var_arg = true)]
    question: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let question = cli.question.join(" ");
    let question = question.trim();
    if question.is_empty() {
        let mut cmd = Cli::command();
        eprintln!("{}", cmd.render_help());
        process::exit(1);
    }

    let mut formatter = Formatter::new(io::stdout().lock());
    let outcome = match &cli.thinker {
        Some(model) => {
            let client = Client::new(model.as_str());
            run_external(&client, model, question, cli.seed, cli.json, &mut formatter)
        }
        None => run_local(question, cli.seed, cli.json, &mut formatter),
    };

    if let Err(e) = outcome {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Generate locally and emit in the selected format.
fn run_local<W: Write>(
    question: &str,
    seed: Option<u64>,
    json: bool,
    formatter: &mut Formatter<W>,
) -> Result<(), String> {
    let thinker = LocalThinker { seed };
    let result = thinker.analyze(question).map_err(|e| e.to_string())?;
    emit(formatter, &result, json)
}

/// Query an external thinker; on any failure, warn and fall back to the
/// built-in engine so the user always gets a complete analysis.
fn run_external<T: Thinker, W: Write>(
    thinker: &T,
    model: &str,
    question: &str,
    seed: Option<u64>,
    json: bool,
    formatter: &mut Formatter<W>,
) -> Result<(), String> {
    match thinker.analyze(question) {
        Ok(result) => {
            if json {
                emit(formatter, &result, true)
            } else {
                formatter
                    .print_attributed(model, &result)
                    .map_err(|e| e.to_string())
            }
        }
        Err(err) => {
            if json {
                // Keep stdout parseable; the warning goes to stderr.
                eprintln!("warning: {err}; falling back to the built-in engine");
            } else {
                formatter
                    .print_warning(&err.to_string())
                    .map_err(|e| e.to_string())?;
            }
            run_local(question, seed, json, formatter)
        }
    }
}

/// Write the record as formatted text or pretty JSON.
fn emit<W: Write>(
    formatter: &mut Formatter<W>,
    result: &AnalysisResult,
    json: bool,
) -> Result<(), String> {
    if json {
        let rendered = serde_json::to_string_pretty(result).map_err(|e| e.to_string())?;
        println!("{rendered}");
        Ok(())
    } else {
        formatter.print(result).map_err(|e| e.to_string())
    }
}
