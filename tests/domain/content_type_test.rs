use docdigest::domain::ContentType;

#[test]
fn given_accepted_mime_types_when_parsing_then_maps_each_variant() {
    assert_eq!(ContentType::from_mime("application/pdf"), Some(ContentType::Pdf));
    assert_eq!(ContentType::from_mime("text/plain"), Some(ContentType::Text));
    assert_eq!(
        ContentType::from_mime("application/msword"),
        Some(ContentType::MsWord)
    );
    assert_eq!(
        ContentType::from_mime(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        ),
        Some(ContentType::WordprocessingMl)
    );
}

#[test]
fn given_parameters_or_uppercase_when_parsing_then_matches_essence() {
    assert_eq!(
        ContentType::from_mime("text/plain; charset=utf-8"),
        Some(ContentType::Text)
    );
    assert_eq!(ContentType::from_mime("Application/PDF"), Some(ContentType::Pdf));
}

#[test]
fn given_unknown_mime_when_parsing_then_returns_none() {
    assert_eq!(ContentType::from_mime("image/png"), None);
    assert_eq!(ContentType::from_mime("text/markdown"), None);
    assert_eq!(ContentType::from_mime(""), None);
}

#[test]
fn given_accepted_list_when_formatting_then_every_mime_round_trips() {
    let listed = ContentType::accepted_mimes();

    for content_type in ContentType::ACCEPTED {
        assert!(listed.contains(content_type.as_mime()));
        assert_eq!(ContentType::from_mime(content_type.as_mime()), Some(content_type));
    }
}

#[test]
fn given_word_formats_when_checking_then_only_word_types_match() {
    assert!(ContentType::MsWord.is_word());
    assert!(ContentType::WordprocessingMl.is_word());
    assert!(!ContentType::Pdf.is_word());
    assert!(!ContentType::Text.is_word());
}
