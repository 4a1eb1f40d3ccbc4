use super::*;

#[test]
fn default_is_balanced() {
    assert!(Residue::default().is_balanced());
}

#[test]
fn open_literal_reported_first() {
    let residue = Residue {
        mode: Mode::InterpolatingLiteral,
        nesting_depth: 3,
        open_interpolations: 1,
        open_quote: Some('`'),
    };
    assert_eq!(
        residue.ensure_balanced(),
        Err(Unbalanced::UnclosedLiteral {
            quote: '`',
            mode: Mode::InterpolatingLiteral,
        })
    );
}

#[test]
fn interpolation_before_braces() {
    let residue = Residue {
        nesting_depth: 2,
        open_interpolations: 1,
        ..Residue::default()
    };
    assert_eq!(
        residue.ensure_balanced(),
        Err(Unbalanced::UnclosedInterpolation { count: 1 })
    );
}

#[test]
fn brace_depth_sign_picks_variant() {
    let open = Residue {
        nesting_depth: 2,
        ..Residue::default()
    };
    assert_eq!(open.ensure_balanced(), Err(Unbalanced::UnclosedBrace { depth: 2 }));

    let stray = Residue {
        nesting_depth: -1,
        ..Residue::default()
    };
    assert_eq!(
        stray.ensure_balanced(),
        Err(Unbalanced::StrayClosingBrace { depth: -1 })
    );
}

#[test]
fn messages() {
    let err = Unbalanced::UnclosedLiteral {
        quote: '"',
        mode: Mode::Literal,
    };
    assert_eq!(err.to_string(), "unterminated literal opened by '\"'");
    assert_eq!(
        Unbalanced::UnclosedBrace { depth: 1 }.to_string(),
        "1 unmatched opening brace(s)"
    );
}
