use crate::results::CodeBreakerError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// The fixed length of every secret code and every valid guess.
pub const CODE_LENGTH: usize = 4;

/// A secret code: exactly four ASCII decimal digits, with leading zeros
/// preserved. This is a fixed-width digit string, not a number: "0042" and
/// "42" are different things, and only the former is a valid code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SecretCode {
    digits: String,
}

impl SecretCode {
    /// Generates a random code using the thread-local RNG.
    pub fn random() -> SecretCode {
        SecretCode::with_rng(&mut rand::thread_rng())
    }

    /// Generates a random code from the given RNG.
    ///
    /// The draw is uniform over [0, 9998], zero-padded to four digits. The
    /// upper bound excludes "9999" to match the behavior of the original
    /// game; see DESIGN.md before widening the range.
    pub fn with_rng<R: Rng>(rng: &mut R) -> SecretCode {
        let value: u32 = rng.gen_range(0..9999);
        SecretCode {
            digits: format!("{:04}", value),
        }
    }

    /// Returns the code as a 4-character string slice.
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Returns the digit at the given position (0 to 3).
    ///
    /// Panics if `index >= CODE_LENGTH`.
    pub fn digit(&self, index: usize) -> char {
        self.digits.as_bytes()[index] as char
    }

    /// Returns `true` iff the given character appears anywhere in the code.
    pub fn contains(&self, ch: char) -> bool {
        self.digits.contains(ch)
    }
}

impl FromStr for SecretCode {
    type Err = CodeBreakerError;

    /// Parses a fixed code, e.g. for practice games. Requires exactly four
    /// ASCII decimal digits.
    fn from_str(s: &str) -> Result<SecretCode, CodeBreakerError> {
        if s.len() != CODE_LENGTH || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodeBreakerError::InvalidCode);
        }
        Ok(SecretCode {
            digits: s.to_string(),
        })
    }
}

impl fmt::Display for SecretCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.digits)
    }
}
