use afterburner::config::HintOptions;
use afterburner::hints::{classify_line, Hint, OverrideStore};

fn hints(s: &str, opts: &HintOptions) -> Vec<Hint> {
    let chars: Vec<char> = s.chars().collect();
    classify_line(OverrideStore::builtin(), &chars, opts)
}

/// Positions where the two option sets disagree.
fn diff(text: &str, a: &HintOptions, b: &HintOptions) -> Vec<usize> {
    hints(text, a)
        .iter()
        .zip(hints(text, b))
        .enumerate()
        .filter(|(_, (x, y))| *x != y)
        .map(|(i, _)| i)
        .collect()
}

fn with<F: FnOnce(&mut HintOptions)>(f: F) -> HintOptions {
    let mut opts = HintOptions::none();
    f(&mut opts);
    opts
}

#[test]
fn test_skip_magic_after_magic() {
    let off = HintOptions::none();
    let on = with(|o| o.suppress_skip_magic_after_magic = true);

    assert_eq!(diff("ASSASSIN", &off, &on), vec![4]);
    assert_eq!(hints("ASSASSIN", &off)[4], Hint::SkipMagic);
    assert_eq!(hints("ASSASSIN", &on)[4], Hint::None);
}

#[test]
fn test_skip_magic_after_skip_magic() {
    let off = HintOptions::none();
    let on = with(|o| o.suppress_skip_magic_after_skip_magic = true);

    assert_eq!(diff("QUEEN", &off, &on), vec![3]);
    assert_eq!(hints("QUEEN", &off)[3], Hint::SkipMagic);
    // Falls through to the magic repeat of 'E'.
    assert_eq!(hints("QUEEN", &on)[3], Hint::Magic);
    // The first skip-magic is untouched.
    assert_eq!(hints("QUEEN", &on)[2], Hint::SkipMagic);
}

#[test]
fn test_magic_after_skip_magic() {
    let off = HintOptions::none();
    let on = with(|o| o.suppress_magic_after_skip_magic = true);

    assert_eq!(diff("NINETEEN", &off, &on), vec![6]);
    assert_eq!(hints("NINETEEN", &off)[6], Hint::Magic);
    assert_eq!(hints("NINETEEN", &on)[6], Hint::None);
    assert_eq!(hints("NINETEEN", &on)[5], Hint::SkipMagic);
}

#[test]
fn test_skip_magic_after_space() {
    let off = HintOptions::none();
    let on = with(|o| o.suppress_skip_magic_after_space = true);

    assert_eq!(diff("SIT TIE", &off, &on), vec![4]);
    assert_eq!(hints("SIT TIE", &off)[4], Hint::SkipMagic);
    assert_eq!(hints("SIT TIE", &on)[4], Hint::None);
}

#[test]
fn test_space_check_covers_tabs() {
    let off = HintOptions::none();
    let on = with(|o| o.suppress_skip_magic_after_space = true);
    assert_eq!(diff("SIT\tTIE", &off, &on), vec![4]);
}

#[test]
fn test_magic_after_skip_sees_nested_skip_after_skip() {
    // Skip-magic at 3 is dropped (skip after skip), and magic at 3 is dropped
    // because 2 is a genuine skip-magic.
    let both = with(|o| {
        o.suppress_skip_magic_after_skip_magic = true;
        o.suppress_magic_after_skip_magic = true;
    });
    assert_eq!(
        hints("queen", &both),
        vec![Hint::None, Hint::None, Hint::SkipMagic, Hint::None, Hint::None]
    );
}

#[test]
fn test_defaults_on_product_words() {
    let opts = HintOptions::default();
    assert_eq!(
        hints("ASSASSIN", &opts),
        vec![Hint::None, Hint::None, Hint::Magic, Hint::None, Hint::None, Hint::Magic, Hint::None, Hint::None]
    );
    assert_eq!(hints("SIT TIE", &opts)[4], Hint::None);
}
