use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use log::{debug, error, warn};
use std::io;
use std::path::PathBuf;

mod cli;
mod libquiz;

use crate::libquiz::bank;
use crate::libquiz::error::Error;
use crate::libquiz::session::QuizSession;

#[derive(Parser, Debug)]
#[command(name = "Resim Tahmin")]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short = 'f', long, value_name = "FILE")]
    questions: Option<PathBuf>,
    #[arg(short, long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..))]
    question_count: u32,
    #[arg(short, long, default_value = "error")]
    log_level: String,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level)).init();
    let question_count = args.question_count as usize;

    let loaded = match &args.questions {
        Some(path) => bank::load_file(path),
        None => bank::load(bank::BUNDLED_QUESTIONS),
    };
    let questions = match loaded {
        Ok(questions) => questions,
        Err(err) => {
            error!("{}", format!("Cannot load questions: {}!", err).red());
            return Err(err);
        }
    };
    debug!("[Setup] Loaded {} questions.", questions.len());

    let session = match QuizSession::start(&questions, question_count) {
        Ok(session) => session,
        Err(err) => {
            warn!("[Setup] {}", err);
            println!(
                "{}",
                format!(
                    "Not enough questions for a {} question quiz. Add more or ask for fewer!",
                    question_count
                )
                .yellow()
            );
            return Err(err);
        }
    };
    println!(
        "{}",
        format!("==========> Resim Tahmin ({} questions) <==========", question_count).cyan()
    );

    cli::cli_loop(
        &mut io::stdin().lock(),
        &mut io::stdout(),
        &questions,
        session,
        question_count,
    )
}
