use std::fs;
use std::process::ExitCode;

use clap::Parser as ClapParser;

use glint::cli::Cli;
use glint::evaluator::Evaluator;
use glint::lexer::tokenize;
use glint::parser::parse_program;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.scope {
        log::Level::Debug.max(cli.verbosity.into())
    } else {
        cli.verbosity.into()
    };
    simple_logger::init_with_level(level).unwrap();

    let source = match fs::read_to_string(&cli.file) {
        Ok(source) => source,
        Err(e) => {
            log::error!("could not read {}: {e}", cli.file.display());
            return ExitCode::FAILURE;
        }
    };
    log::info!("loaded {} ({} bytes)", cli.file.display(), source.len());

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(e) => {
            println!("Error: {}", e.message);
            return ExitCode::FAILURE;
        }
    };
    log::debug!("lexed {} tokens", tokens.len());

    let program = match parse_program(tokens) {
        Ok(program) => program,
        Err(e) => {
            println!("Error: {}", e.message);
            return ExitCode::FAILURE;
        }
    };
    log::debug!("parsed {} top-level statements", program.len());

    let mut evaluator = Evaluator::new();
    for statement in &program {
        if let Err(e) = evaluator.eval_statement(statement) {
            println!("Error: {}", e.message);
        }
    }

    ExitCode::SUCCESS
}
