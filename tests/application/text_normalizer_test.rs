use docdigest::application::services::{TextNormalizer, normalize_text};

#[test]
fn given_whitespace_runs_when_normalizing_then_collapses_to_single_spaces() {
    let result = normalize_text("  one\t\ttwo\n\n three   four  ");

    assert_eq!(result, "one two three four");
}

#[test]
fn given_space_before_punctuation_when_normalizing_then_removes_it() {
    let result = normalize_text("Hello   world !");

    assert_eq!(result, "Hello world!");
}

#[test]
fn given_mixed_punctuation_when_normalizing_then_attaches_each_mark() {
    let result = normalize_text("Wait , what ? Yes . Really !");

    assert_eq!(result, "Wait, what? Yes. Really!");
}

#[test]
fn given_blank_input_when_normalizing_then_returns_empty_string() {
    assert_eq!(normalize_text(" \n\t \r\n"), "");
    assert_eq!(normalize_text(""), "");
}

#[test]
fn given_glued_punctuation_when_spacing_disabled_then_leaves_it_untouched() {
    let result = normalize_text("pi is 3.14,roughly");

    assert_eq!(result, "pi is 3.14,roughly");
}

#[test]
fn given_glued_punctuation_when_spacing_enabled_then_inserts_space() {
    let normalizer = TextNormalizer::new(true);

    let result = normalizer.normalize("first,second.Third !");

    assert_eq!(result, "first, second. Third!");
}

#[test]
fn given_normalized_text_when_normalizing_again_then_returns_same_text() {
    let inputs = [
        "  A  messy , text\n\nwith  lines !  And ?  marks . ",
        "no changes needed.",
        "\u{00a0}non-breaking\u{00a0} space ,here",
    ];

    for normalizer in [TextNormalizer::new(false), TextNormalizer::new(true)] {
        for input in inputs {
            let once = normalizer.normalize(input);
            let twice = normalizer.normalize(&once);
            assert_eq!(once, twice, "not a fixed point for {input:?}");
        }
    }
}

#[test]
fn given_any_input_when_normalizing_then_output_has_no_double_whitespace_or_space_before_mark() {
    let input = "a \n b\t\t, c  .\r\nd   !\n\n\ne ?";

    let result = normalize_text(input);

    let chars: Vec<char> = result.chars().collect();
    for pair in chars.windows(2) {
        assert!(!(pair[0].is_whitespace() && pair[1].is_whitespace()));
        assert!(!(pair[0].is_whitespace() && matches!(pair[1], '.' | ',' | '!' | '?')));
    }
    assert_eq!(result, "a b, c. d! e?");
}
