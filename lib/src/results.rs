use crate::code::{SecretCode, CODE_LENGTH};
use std::error::Error;
use std::fmt;

/// The result of a single guessed digit at a specific position.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DigitResult {
    /// The digit is correct and in the correct position.
    Exact,
    /// The digit appears in the code, but at a different position.
    Misplaced,
    /// The digit does not appear anywhere in the code.
    Absent,
}

/// Indicates that a guess could not be accepted.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CodeBreakerError {
    /// The guess was not exactly four characters long. Does not count
    /// against the attempt limit.
    WrongLength,
    /// A guess was submitted after the game had already been won or lost.
    GameOver,
    /// A string given as a fixed secret code was not four decimal digits.
    InvalidCode,
}

impl fmt::Display for CodeBreakerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CodeBreakerError::WrongLength => write!(f, "guess must be exactly 4 characters"),
            CodeBreakerError::GameOver => write!(f, "the game is already over"),
            CodeBreakerError::InvalidCode => {
                write!(f, "a secret code must be exactly 4 decimal digits")
            }
        }
    }
}

impl Error for CodeBreakerError {}

/// The per-position feedback for one guess.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Feedback {
    /// The result for each position, in the same order as the guess.
    pub digits: [DigitResult; CODE_LENGTH],
}

impl Feedback {
    /// Returns `true` iff every position is an exact match.
    pub fn is_win(&self) -> bool {
        self.digits.iter().all(|dr| *dr == DigitResult::Exact)
    }

    /// Returns the number of exact matches, 0 to 4.
    pub fn num_exact(&self) -> usize {
        self.digits
            .iter()
            .filter(|dr| **dr == DigitResult::Exact)
            .count()
    }
}

/// One entry in the guess history.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuessRecord {
    /// The 1-based attempt number this guess was submitted on.
    pub attempt: u32,
    /// The raw guess text, exactly as submitted.
    pub guess: String,
    pub feedback: Feedback,
}

/// Whether the game is still running, or how it ended.
///
/// `Won` and `Lost` are terminal: a finished engine accepts no further
/// guesses. To play again, construct a fresh [`GuessEngine`].
///
/// [`GuessEngine`]: crate::GuessEngine
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// Returns `true` for the terminal states.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameState::InProgress)
    }
}

/// The structured outcome of one accepted guess.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GuessReport {
    /// The 1-based attempt number this guess was evaluated on.
    pub attempt: u32,
    pub feedback: Feedback,
    /// The state the game is in after this guess.
    pub state: GameState,
    /// The secret code, revealed iff this guess ended the game.
    pub revealed: Option<SecretCode>,
}

/// How a notification should be presented.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Severity {
    Error,
    Info,
    Success,
}

/// A user-facing message for the view layer to render. The engine never
/// renders anything itself; it only hands these out.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Notification {
    pub severity: Severity,
    pub message: &'static str,
    /// The secret code, present only on the win and loss notifications.
    pub revealed_code: Option<SecretCode>,
}

impl GuessReport {
    /// Maps this outcome to the message the original game showed for it.
    pub fn notification(&self) -> Notification {
        match self.state {
            GameState::Won => Notification {
                severity: Severity::Success,
                message: "Nice, You broke the code!",
                revealed_code: self.revealed.clone(),
            },
            GameState::Lost => Notification {
                severity: Severity::Error,
                message: "You lost.",
                revealed_code: self.revealed.clone(),
            },
            GameState::InProgress => Notification {
                severity: Severity::Info,
                message: "Wrong code, try again.",
                revealed_code: None,
            },
        }
    }
}

impl From<CodeBreakerError> for Notification {
    fn from(err: CodeBreakerError) -> Notification {
        let message = match err {
            CodeBreakerError::WrongLength => "You didn't enter 4 digits",
            CodeBreakerError::GameOver => "The game is over. Start a new one to play again.",
            CodeBreakerError::InvalidCode => "A code must be exactly 4 digits",
        };
        Notification {
            severity: Severity::Error,
            message,
            revealed_code: None,
        }
    }
}
