use clap::{Parser, Subcommand};
use rs_code_breaker::*;
use std::io;
use std::io::BufRead;
use std::str::FromStr;

/// Simple program to play code breaker in the terminal: guess the secret
/// 4-digit code within ten attempts.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play with a randomly generated secret code.
    Play,
    /// Play with a fixed secret code, useful for learning the feedback
    /// markers.
    Fixed { code: String },
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let stdin = io::stdin();

    match args.command {
        Command::Play => run_games(GuessEngine::new, &mut stdin.lock()),
        Command::Fixed { code } => {
            let code = match SecretCode::from_str(&code) {
                Ok(code) => code,
                Err(err) => {
                    eprintln!("Error: {}", err);
                    std::process::exit(1);
                }
            };
            run_games(
                move || GuessEngine::with_code(code.clone()),
                &mut stdin.lock(),
            )
        }
    }
}

/// Plays games until the player declines to play again or the input ends.
/// Every game gets a brand-new engine; a finished engine is never reused.
fn run_games<F, R>(new_engine: F, reader: &mut R) -> io::Result<()>
where
    F: Fn() -> GuessEngine,
    R: BufRead,
{
    loop {
        let mut engine = new_engine();
        if play_one_game(&mut engine, reader)?.is_none() {
            return Ok(());
        }
        println!("Play again? (y/n)");
        match read_trimmed_line(reader)? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => continue,
            _ => return Ok(()),
        }
    }
}

/// Plays a single game to completion. Returns the terminal state, or `None`
/// if the player typed 'exit' or the input ended mid-game.
fn play_one_game<R: BufRead>(
    engine: &mut GuessEngine,
    reader: &mut R,
) -> io::Result<Option<GameState>> {
    println!(
        "I picked a secret {}-digit code (leading zeros allowed).\n\
         You have {} attempts. Type 'exit' to give up.",
        CODE_LENGTH, MAX_ATTEMPTS
    );

    loop {
        println!(
            "Attempt {} of {} - enter your guess:",
            engine.attempt(),
            MAX_ATTEMPTS
        );
        let guess = match read_trimmed_line(reader)? {
            Some(line) => line,
            None => return Ok(None),
        };
        if guess.eq_ignore_ascii_case("exit") {
            println!("Exiting.");
            return Ok(None);
        }

        match engine.submit_guess(&guess) {
            Ok(report) => {
                print_history(engine.history());
                print_notification(&report.notification());
                if report.state.is_over() {
                    return Ok(Some(report.state));
                }
            }
            Err(err) => print_notification(&Notification::from(err)),
        }
    }
}

fn read_trimmed_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buffer = String::new();
    if reader.read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_string()))
}

fn print_history(history: &[GuessRecord]) {
    for record in history {
        println!(
            "  {:>2}  {}  {}",
            record.attempt,
            record.guess,
            render_feedback(&record.feedback)
        );
    }
}

/// '=' right digit in the right place, '~' right digit in the wrong place,
/// 'x' digit not in the code.
fn render_feedback(feedback: &Feedback) -> String {
    feedback
        .digits
        .iter()
        .map(|dr| match dr {
            DigitResult::Exact => '=',
            DigitResult::Misplaced => '~',
            DigitResult::Absent => 'x',
        })
        .collect()
}

fn print_notification(notification: &Notification) {
    let label = match notification.severity {
        Severity::Error => "error",
        Severity::Info => "info",
        Severity::Success => "success",
    };
    println!("[{}] {}", label, notification.message);
    if let Some(code) = &notification.revealed_code {
        println!("The code was: {}", code);
    }
}
