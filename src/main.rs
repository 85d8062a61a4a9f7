//! exam-snip - Entry point
//!
//! Crops question blocks out of an exam-paper PDF into PNG images.

use clap::{Arg, Command};
use exam_snip::menu::{ExamMeta, Prompt, StdinPrompt};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "exam_snip=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let matches = Command::new("exam-snip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Crops question blocks out of an exam-paper PDF into PNG images")
        .arg(
            Arg::new("path")
                .help("Path to the exam paper PDF")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("publisher")
                .long("publisher")
                .help("Exam board, e.g. Pearson (prompted if omitted)"),
        )
        .arg(
            Arg::new("level")
                .long("level")
                .help("Qualification level, e.g. ALevel (prompted if omitted)"),
        )
        .arg(
            Arg::new("subject")
                .long("subject")
                .help("Subject, e.g. Maths (prompted if omitted)"),
        )
        .arg(
            Arg::new("year")
                .long("year")
                .help("Exam year, e.g. 2023 (prompted if omitted)"),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .short('o')
                .help("Directory the output folder is created under")
                .default_value("."),
        )
        .get_matches();

    let pdf_path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let output_root = matches
        .get_one::<String>("output-dir")
        .expect("output-dir has a default");

    let mut prompt = StdinPrompt;
    let meta = ExamMeta {
        publisher: flag_or_ask(&matches, "publisher", "What Publisher?", &mut prompt)?,
        level: flag_or_ask(&matches, "level", "What Level?", &mut prompt)?,
        subject: flag_or_ask(&matches, "subject", "What Subject?", &mut prompt)?,
        year: flag_or_ask(&matches, "year", "What Year?", &mut prompt)?,
    };

    let summary = exam_snip::run(pdf_path, &meta, Path::new(output_root))?;

    println!(
        "Finished: {} image(s) from {} page(s) in {}/",
        summary.images,
        summary.pages,
        meta.folder_name()
    );

    Ok(())
}

fn flag_or_ask(
    matches: &clap::ArgMatches,
    flag: &str,
    question: &str,
    prompt: &mut dyn Prompt,
) -> anyhow::Result<String> {
    match matches.get_one::<String>(flag) {
        Some(value) => Ok(value.trim().to_string()),
        None => Ok(prompt.ask(question)?),
    }
}
