use std::process::ExitCode;

use interact::utils::{DesiredType, Sanitize};
use interact::{Actor, ConfirmDefault, InteractError};
use tracing_subscriber::EnvFilter;

fn not_negative(input: &str) -> Result<(), String> {
    match input.parse::<i64>() {
        Ok(n) if n < 0 => Err("The number can not be negative!".to_string()),
        Ok(_) => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

fn run(actor: &mut Actor<std::io::Stdin, std::io::Stdout>) -> Result<(), InteractError> {
    let name = actor.prompt_and_retry(
        "Please enter something that's not empty",
        &[&Sanitize::NotEmpty],
    )?;

    let number = actor.prompt_and_retry(
        "Please enter a positive number",
        &[&Sanitize::NotEmpty, &not_negative],
    )?;

    let threads = actor.prompt_optional_and_retry(
        "Worker threads",
        "4",
        &[&Sanitize::IsType(DesiredType::U8), &Sanitize::IsBetween(1, 16)],
    )?;

    if actor.confirm("Print the summary?", ConfirmDefault::DefaultYes)? {
        println!("name: {}\nnumber: {}\nthreads: {}", name, number, threads);
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut actor = Actor::stdio();

    match run(&mut actor) {
        Ok(()) => ExitCode::SUCCESS,
        Err(InteractError::Canceled) => {
            eprintln!("{}", InteractError::Canceled);
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!(error = %e, "conversation failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
