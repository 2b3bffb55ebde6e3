use std::fs::OpenOptions;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use trivia_streak::cli::args::Args;
use trivia_streak::io::{SystemStopwatch, TerminalIO};
use trivia_streak::models::config::EngineConfig;
use trivia_streak::models::session::Session;
use trivia_streak::services::game::Game;
use trivia_streak::services::lifelines::RandomChooser;
use trivia_streak::services::question_bank::{load_questions, sample_questions};
use trivia_streak::services::settlement::{JsonLinesLedger, MemoryLedger, SettlementSink};
use trivia_streak::{GameEngine, GameResult};

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> GameResult<()> {
    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let questions = match &args.questions {
        Some(path) => load_questions(path)?,
        None => sample_questions(),
    };
    let session = match args.lives {
        Some(lives) => Session::new(questions, args.stake, lives, config)?,
        None => Session::with_config(questions, args.stake, config)?,
    };

    let chooser = match args.seed {
        Some(seed) => RandomChooser::from_seed(seed),
        None => RandomChooser::from_entropy(),
    };
    let engine = GameEngine::new(session, Box::new(chooser));

    println!("*** TRIVIA STREAK ***");
    println!();

    let mut input = TerminalIO;
    let mut output = TerminalIO;
    let mut stopwatch = SystemStopwatch::default();
    let mut game = Game::new(engine, &mut input, &mut output, &mut stopwatch);

    let mut sink: Box<dyn SettlementSink> = match &args.ledger {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Box::new(JsonLinesLedger::new(file))
        }
        None => Box::new(MemoryLedger::new()),
    };
    game.run(sink.as_mut())?;
    Ok(())
}
