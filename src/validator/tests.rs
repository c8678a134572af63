use crate::deal::Deal;
use crate::expression::ExpressionError;
use crate::validator::{UsageMismatch, ValidationError, check_characters, number_tokens, validate};

fn deal(values: [u32; 4]) -> Deal {
    Deal::new(values)
}

#[test]
fn test_accepts_expression_with_zero_card() {
    let result = validate("(8-2)*4+0", &deal([8, 2, 4, 0]));
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 24.0).abs() < 1e-6);
    }
}

#[test]
fn test_rejects_partial_usage() {
    let result = validate("6*4", &deal([6, 4, 1, 1]));
    assert_eq!(
        result,
        Err(ValidationError::NumberUsageMismatch(UsageMismatch::Unused(
            vec![1, 1]
        )))
    );
}

#[test]
fn test_accepts_full_usage_in_any_order() {
    assert_eq!(validate("1 * 6 * 1 * 4", &deal([6, 4, 1, 1])), Ok(24.0));
    assert_eq!(validate("4*4+4+4", &deal([4, 4, 4, 4])), Ok(24.0));
}

#[test]
fn test_rejects_reused_number() {
    let result = validate("4*4+4+4", &deal([4, 4, 4, 2]));
    assert_eq!(
        result,
        Err(ValidationError::NumberUsageMismatch(
            UsageMismatch::NotAvailable("4".to_string())
        ))
    );
}

#[test]
fn test_rejects_number_not_dealt() {
    let result = validate("3*8+1-1", &deal([6, 4, 1, 1]));
    assert!(matches!(
        result,
        Err(ValidationError::NumberUsageMismatch(UsageMismatch::NotAvailable(ref token))) if token == "3"
    ));
}

#[test]
fn test_multi_digit_run_is_one_number() {
    assert_eq!(number_tokens("10+10+2+2"), vec!["10", "10", "2", "2"]);
    assert_eq!(validate("10+10+2+2", &deal([10, 10, 2, 2])), Ok(24.0));

    // "10" is not the cards 1 and 0
    let result = validate("10*2+4", &deal([1, 0, 2, 4]));
    assert!(matches!(
        result,
        Err(ValidationError::NumberUsageMismatch(UsageMismatch::NotAvailable(_)))
    ));
}

#[test]
fn test_leading_zero_token_never_matches() {
    let result = validate("08*3*1*1", &deal([8, 3, 1, 1]));
    assert_eq!(
        result,
        Err(ValidationError::NumberUsageMismatch(
            UsageMismatch::NotAvailable("08".to_string())
        ))
    );
}

#[test]
fn test_rejects_illegal_characters() {
    assert_eq!(
        validate("6*4a", &deal([6, 4, 1, 1])),
        Err(ValidationError::IllegalCharacter { ch: 'a', position: 3 })
    );
    assert_eq!(
        check_characters("1.5*16"),
        Err(ValidationError::IllegalCharacter { ch: '.', position: 1 })
    );
    assert!(check_characters("2**3").is_ok());
    assert!(check_characters(" (1 + 2)\t* 3 / 4 - 5 ").is_ok());
}

#[test]
fn test_character_check_runs_before_usage_check() {
    let result = validate("x", &deal([6, 4, 1, 1]));
    assert!(matches!(result, Err(ValidationError::IllegalCharacter { .. })));
}

#[test]
fn test_unbalanced_parentheses_are_evaluation_errors() {
    let result = validate("(4+4)*(1+2", &deal([4, 4, 1, 2]));
    assert_eq!(
        result,
        Err(ValidationError::Evaluation(ExpressionError::UnexpectedEnd))
    );
}

#[test]
fn test_division_by_zero_is_evaluation_error() {
    let result = validate("8/(2-2)*1", &deal([8, 2, 2, 1]));
    assert_eq!(
        result,
        Err(ValidationError::Evaluation(ExpressionError::DivisionByZero))
    );
}

#[test]
fn test_unary_minus_is_evaluation_error() {
    let result = validate("-1+5*5*1", &deal([1, 5, 5, 1]));
    assert!(matches!(result, Err(ValidationError::Evaluation(_))));
}

#[test]
fn test_wrong_value_is_still_valid() {
    assert_eq!(validate("1+2+3+4", &deal([1, 2, 3, 4])), Ok(10.0));
}

#[test]
fn test_empty_submission_leaves_cards_unused() {
    assert!(matches!(
        validate("", &deal([1, 2, 3, 4])),
        Err(ValidationError::NumberUsageMismatch(UsageMismatch::Unused(_)))
    ));
}

#[test]
fn test_reason_strings() {
    let err = ValidationError::IllegalCharacter { ch: 'x', position: 0 };
    assert_eq!(err.reason(), "illegal character");

    let err = ValidationError::NumberUsageMismatch(UsageMismatch::Unused(vec![1]));
    assert_eq!(err.reason(), "uses a number not dealt, or reuses a number");
    assert_eq!(
        err.to_string(),
        "uses a number not dealt, or reuses a number (1 left unused)"
    );

    let err = ValidationError::Evaluation(ExpressionError::DivisionByZero);
    assert_eq!(err.reason(), "evaluation error");
}

#[test]
fn test_over_nested_expression_is_an_evaluation_error() {
    let expr = format!("{}1{}+2+3+4", "(".repeat(70), ")".repeat(70));
    let result = validate(&expr, &deal([1, 2, 3, 4]));
    assert!(matches!(
        result,
        Err(ValidationError::Evaluation(ExpressionError::NestingTooDeep(64)))
    ));
}
