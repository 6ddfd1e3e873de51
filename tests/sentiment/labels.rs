use stocknews_rs::Sentiment;

#[test]
fn canonical_labels_match_case_insensitively_after_trim() {
    for (text, want) in [
        ("POSITIVE", Sentiment::Positive),
        ("positive", Sentiment::Positive),
        ("  Positive\n", Sentiment::Positive),
        ("NEGATIVE", Sentiment::Negative),
        ("negative ", Sentiment::Negative),
        ("\tNeutral", Sentiment::Neutral),
        ("neutral", Sentiment::Neutral),
    ] {
        assert_eq!(Sentiment::from_label(text), want, "{text:?}");
    }
}

#[test]
fn anything_else_is_unknown() {
    for text in [
        "",
        "   ",
        "Positive.",
        "mostly positive",
        "POSITIVE NEGATIVE",
        "The sentiment is NEUTRAL",
        "pos",
        "UNKNOWN",
        "**POSITIVE**",
    ] {
        assert_eq!(Sentiment::from_label(text), Sentiment::Unknown, "{text:?}");
    }
}

#[test]
fn display_and_serialize_use_upper_case_labels() {
    assert_eq!(Sentiment::Negative.to_string(), "NEGATIVE");
    assert_eq!(
        serde_json::to_string(&Sentiment::Neutral).unwrap(),
        "\"NEUTRAL\""
    );
    assert_eq!(
        serde_json::to_string(&Sentiment::Unknown).unwrap(),
        "\"UNKNOWN\""
    );
}
