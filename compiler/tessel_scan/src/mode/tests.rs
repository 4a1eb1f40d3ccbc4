use super::*;

#[test]
fn default_is_expression() {
    assert_eq!(Mode::default(), Mode::Expression);
}

#[test]
fn quotes_open_their_modes() {
    assert_eq!(Mode::opened_by('`'), Some(Mode::InterpolatingLiteral));
    assert_eq!(Mode::opened_by('"'), Some(Mode::Literal));
    assert_eq!(Mode::opened_by('\''), Some(Mode::Literal));
    assert_eq!(Mode::opened_by('{'), None);
}

#[test]
fn literal_modes() {
    assert!(!Mode::Expression.is_literal());
    assert!(Mode::Literal.is_literal());
    assert!(Mode::InterpolatingLiteral.is_literal());
}

#[test]
fn display_uses_name() {
    assert_eq!(Mode::InterpolatingLiteral.to_string(), "interpolating literal");
}
