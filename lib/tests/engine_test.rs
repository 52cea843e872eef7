#[macro_use]
extern crate assert_matches;

use rs_code_breaker::*;
use std::str::FromStr;

fn fixed_code(code: &str) -> SecretCode {
    SecretCode::from_str(code).unwrap()
}

#[test]
fn generated_codes_are_four_decimal_digits() {
    for _ in 0..1000 {
        let code = SecretCode::random();

        assert_eq!(code.as_str().len(), CODE_LENGTH);
        assert!(code.as_str().bytes().all(|b| b.is_ascii_digit()));
    }
}

#[test]
fn only_length_four_guesses_are_accepted() {
    let mut engine = GuessEngine::with_code(fixed_code("1234"));

    assert_eq!(engine.submit_guess(""), Err(CodeBreakerError::WrongLength));
    assert_eq!(
        engine.submit_guess("123"),
        Err(CodeBreakerError::WrongLength)
    );
    assert_eq!(
        engine.submit_guess("12345"),
        Err(CodeBreakerError::WrongLength)
    );
    // Only the length is checked: four non-digit characters are a legal
    // guess, they just never match anything.
    assert_matches!(engine.submit_guess("wxyz"), Ok(_));
}

#[test]
fn exact_count_matches_agreeing_positions() {
    let code = fixed_code("1234");
    let cases = [
        ("1234", 4),
        ("1235", 3),
        ("1204", 3),
        ("5634", 2),
        ("4321", 0),
        ("5678", 0),
    ];

    for (guess, expected) in cases {
        let feedback = evaluate_guess(&code, guess);
        assert_eq!(
            feedback.num_exact(),
            expected,
            "guess {} against code 1234",
            guess
        );
    }
}

#[test]
fn evaluate_guess_is_pure() {
    let code = fixed_code("0042");

    let first = evaluate_guess(&code, "1234");
    // Unrelated evaluations in between must not change anything.
    evaluate_guess(&code, "0042");
    evaluate_guess(&code, "9999");
    let second = evaluate_guess(&code, "1234");

    assert_eq!(first, second);
    assert_eq!(first.is_win(), second.is_win());
}

#[test]
fn tenth_wrong_guess_is_a_loss_not_another_try() {
    let mut engine = GuessEngine::with_code(fixed_code("1234"));
    for _ in 0..9 {
        assert_matches!(
            engine.submit_guess("5678"),
            Ok(GuessReport {
                state: GameState::InProgress,
                ..
            })
        );
    }
    assert_eq!(engine.attempt(), 10);

    let report = engine.submit_guess("5678").unwrap();

    assert_eq!(report.state, GameState::Lost);
    assert_eq!(report.attempt, 10);
    assert_eq!(report.revealed, Some(fixed_code("1234")));
}

#[test]
fn winning_on_the_last_attempt_wins() {
    let mut engine = GuessEngine::with_code(fixed_code("4321"));
    for _ in 0..9 {
        engine.submit_guess("8765").unwrap();
    }
    assert_eq!(engine.attempt(), 10);

    assert_matches!(
        engine.submit_guess("4321"),
        Ok(GuessReport {
            state: GameState::Won,
            attempt: 10,
            ..
        })
    );
}

#[test]
fn example_game_against_0042() {
    let mut engine = GuessEngine::with_code(fixed_code("0042"));

    let first = engine.submit_guess("1234").unwrap();
    assert_eq!(
        first.feedback.digits,
        [
            DigitResult::Absent,
            DigitResult::Absent,
            DigitResult::Misplaced,
            DigitResult::Misplaced,
        ]
    );
    assert_eq!(first.state, GameState::InProgress);

    let second = engine.submit_guess("0042").unwrap();
    assert_eq!(second.feedback.digits, [DigitResult::Exact; CODE_LENGTH]);
    assert_eq!(second.attempt, 2);
    assert_eq!(second.state, GameState::Won);
}

#[test]
fn history_grows_only_on_validated_guesses() {
    let mut engine = GuessEngine::with_code(fixed_code("0042"));

    engine.submit_guess("1111").unwrap();
    engine.submit_guess("22").unwrap_err();
    engine.submit_guess("2222").unwrap();
    engine.submit_guess("333333").unwrap_err();
    engine.submit_guess("3333").unwrap();

    let history = engine.history();
    assert_eq!(history.len(), 3);
    assert_eq!(
        history
            .iter()
            .map(|record| record.guess.as_str())
            .collect::<Vec<_>>(),
        vec!["1111", "2222", "3333"]
    );
    assert_eq!(
        history
            .iter()
            .map(|record| record.attempt)
            .collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(engine.attempt(), 4);
}

#[test]
fn each_engine_draws_its_own_code() {
    // Not a randomness-quality check, just that construction works and the
    // engine starts fresh.
    let engine = GuessEngine::new();

    assert_eq!(engine.state(), GameState::InProgress);
    assert_eq!(engine.attempt(), 1);
    assert!(engine.history().is_empty());
}
