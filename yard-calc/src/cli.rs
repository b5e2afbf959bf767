use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::display::{render_postfix, render_tokens};
use crate::tokenizer::Tokenizer;
use crate::{samples, Evaluation};

/// Evaluates integer expressions with `+ - * / !` and parentheses.
#[derive(Parser, Debug)]
#[command(name = "yard-calc", version, about, long_about = None)]
pub struct Args {
    /// Expression to evaluate, e.g. "-6 + 2 * (-3 - 1)".
    pub expression: Option<String>,

    /// Run the built-in sample token lists instead of an expression.
    #[arg(long, conflicts_with = "expression")]
    pub samples: bool,

    /// Print the tokens before conversion.
    #[arg(long)]
    pub show_tokens: bool,

    /// Print the postfix stack before evaluation.
    #[arg(long)]
    pub show_postfix: bool,

    /// Log more (-v for debug, -vv for trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_evaluation(args: &Args, evaluation: &Evaluation, out: &mut impl Write) -> Result<()> {
    if args.show_tokens {
        writeln!(out, "{}", render_tokens(&evaluation.tokens))?;
    }
    if args.show_postfix {
        writeln!(out, "{}", render_postfix(&evaluation.postfix))?;
    }
    Ok(())
}

/// Evaluates every built-in sample, failing on the first wrong result.
pub fn run_samples(args: &Args, out: &mut impl Write) -> Result<()> {
    for sample in samples::all() {
        let evaluation = crate::evaluate_tokens(sample.tokens)
            .with_context(|| format!("Failed to evaluate sample '{}'", sample.name))?;

        print_evaluation(args, &evaluation, out)?;
        writeln!(out, "{} = {}", sample.name, evaluation.value)?;

        if evaluation.value != sample.expected {
            bail!(
                "Sample '{}' evaluated to {}, expected {}",
                sample.name,
                evaluation.value,
                sample.expected
            );
        }
    }

    Ok(())
}

/// Runs the calculator, reading the expression from stdin when none is given.
pub fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    if args.samples {
        return run_samples(args, out);
    }

    let input = match &args.expression {
        Some(expression) => expression.clone(),
        None => {
            writeln!(out, "Please enter an expression to evaluate:")?;
            out.flush()?;
            let mut input = String::new();
            io::stdin()
                .read_line(&mut input)
                .context("Failed to read the expression from stdin")?;
            input
        }
    };

    let tokenizer = Tokenizer::default();
    let evaluation = crate::evaluate(&tokenizer, &input)
        .with_context(|| format!("Failed to evaluate '{}'", input.trim()))?;

    print_evaluation(args, &evaluation, out)?;
    writeln!(out, "{}", evaluation.value)?;

    Ok(())
}
