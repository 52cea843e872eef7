use crate::code::{SecretCode, CODE_LENGTH};
use crate::results::*;
use rand::Rng;

/// The number of guesses a player gets before the game is lost.
pub const MAX_ATTEMPTS: u32 = 10;

/// Determines the feedback for the given `guess` against the given `code`.
///
/// Each position is classified independently: an exact match wins, else a
/// digit found anywhere in the code is misplaced, else it is absent. This is
/// pure: it never touches game state.
///
/// Panics if the guess is not exactly [`CODE_LENGTH`] characters; callers
/// must validate first.
pub fn evaluate_guess(code: &SecretCode, guess: &str) -> Feedback {
    if guess.chars().count() != CODE_LENGTH {
        panic!(
            "Guess ({}) must be exactly {} characters long",
            guess, CODE_LENGTH
        );
    }
    let mut digits = [DigitResult::Absent; CODE_LENGTH];
    for (index, ch) in guess.chars().enumerate() {
        digits[index] = if code.digit(index) == ch {
            DigitResult::Exact
        } else if code.contains(ch) {
            DigitResult::Misplaced
        } else {
            DigitResult::Absent
        };
    }
    Feedback { digits }
}

/// Determines the state after a guess: a win ends the game immediately,
/// whatever the attempt count; otherwise a wrong guess on the final attempt
/// loses, and anything earlier keeps the game running.
fn next_state(feedback: &Feedback, attempt: u32) -> GameState {
    if feedback.is_win() {
        GameState::Won
    } else if attempt >= MAX_ATTEMPTS {
        GameState::Lost
    } else {
        GameState::InProgress
    }
}

/// Runs one game of code breaker: owns the secret code, the attempt counter,
/// the win/loss state, and the guess history.
///
/// An engine plays exactly one game. Once the state is terminal it rejects
/// every further guess; "play again" means constructing a new engine.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuessEngine {
    code: SecretCode,
    attempt: u32,
    state: GameState,
    history: Vec<GuessRecord>,
}

impl GuessEngine {
    /// Starts a game with a randomly generated secret code.
    pub fn new() -> GuessEngine {
        GuessEngine::with_code(SecretCode::random())
    }

    /// Starts a game with a code drawn from the given RNG.
    pub fn with_rng<R: Rng>(rng: &mut R) -> GuessEngine {
        GuessEngine::with_code(SecretCode::with_rng(rng))
    }

    /// Starts a game with a fixed secret code.
    pub fn with_code(code: SecretCode) -> GuessEngine {
        GuessEngine {
            code,
            attempt: 1,
            state: GameState::InProgress,
            history: Vec::new(),
        }
    }

    /// Submits one guess and advances the game.
    ///
    /// A guess that is not exactly four characters is rejected with
    /// [`CodeBreakerError::WrongLength`]; it is not evaluated, not recorded,
    /// and does not use up an attempt. A valid guess is evaluated, appended
    /// to the history, and counted, and the returned report carries the
    /// feedback and the resulting state. Non-digit characters are accepted
    /// and simply never match anything.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessReport, CodeBreakerError> {
        if self.state.is_over() {
            return Err(CodeBreakerError::GameOver);
        }
        if raw.chars().count() != CODE_LENGTH {
            return Err(CodeBreakerError::WrongLength);
        }

        let attempt = self.attempt;
        let feedback = evaluate_guess(&self.code, raw);
        self.history.push(GuessRecord {
            attempt,
            guess: raw.to_string(),
            feedback: feedback.clone(),
        });
        self.state = next_state(&feedback, attempt);
        self.attempt += 1;

        let revealed = if self.state.is_over() {
            Some(self.code.clone())
        } else {
            None
        };
        Ok(GuessReport {
            attempt,
            feedback,
            state: self.state,
            revealed,
        })
    }

    /// The current state of the game.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The 1-based number of the next attempt.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Every validated guess so far, in submission order.
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }
}

impl Default for GuessEngine {
    fn default() -> GuessEngine {
        GuessEngine::new()
    }
}
