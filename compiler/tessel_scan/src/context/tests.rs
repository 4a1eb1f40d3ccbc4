use super::*;

#[test]
fn starts_empty() {
    let ctx = ScanContext::default();
    assert_eq!(ctx.nesting_depth(), 0);
    assert_eq!(ctx.open_interpolations(), 0);
    assert_eq!(ctx.open_quote(), None);
}

#[test]
fn interpolation_closes_at_entry_depth() {
    let mut ctx = ScanContext::default();
    ctx.enter_interpolation();
    ctx.open_brace();
    assert_eq!(ctx.nesting_depth(), 2);

    assert!(!ctx.close_brace(), "inner brace must not close the interpolation");
    assert_eq!(ctx.open_interpolations(), 1);

    assert!(ctx.close_brace());
    assert_eq!(ctx.open_interpolations(), 0);
    assert_eq!(ctx.nesting_depth(), 0);
}

#[test]
fn nested_interpolations_unwind_innermost_first() {
    let mut ctx = ScanContext::default();
    ctx.open_brace(); // depth 1, outside any interpolation
    ctx.enter_interpolation(); // boundary 1
    ctx.enter_interpolation(); // boundary 2
    assert_eq!(ctx.open_interpolations(), 2);

    assert!(ctx.close_brace());
    assert_eq!(ctx.open_interpolations(), 1);
    assert!(ctx.close_brace());
    assert_eq!(ctx.open_interpolations(), 0);

    // plain brace left over
    assert!(!ctx.close_brace());
    assert_eq!(ctx.nesting_depth(), 0);
}

#[test]
fn stray_close_goes_negative() {
    let mut ctx = ScanContext::default();
    assert!(!ctx.close_brace());
    assert_eq!(ctx.nesting_depth(), -1);
}

#[test]
fn literal_quote_tracking() {
    let mut ctx = ScanContext::default();
    ctx.open_literal('`');
    assert_eq!(ctx.open_quote(), Some('`'));
    ctx.close_literal();
    assert_eq!(ctx.open_quote(), None);
}

#[test]
fn interpolation_sets_aside_enclosing_quote() {
    let mut ctx = ScanContext::default();
    ctx.open_literal('`');
    ctx.enter_interpolation();
    assert_eq!(ctx.open_quote(), None);

    // a plain literal inside the segment
    ctx.open_literal('"');
    ctx.close_literal();

    assert!(ctx.close_brace());
    assert_eq!(ctx.open_quote(), Some('`'));
}
