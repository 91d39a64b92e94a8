use super::super::inflate;

#[test]
fn test_three_casing_classes() {
    assert_eq!(inflate("one"), "two");
    assert_eq!(inflate("One"), "Two");
    assert_eq!(inflate("ONE"), "TWO");
}

#[test]
fn test_casing_in_context() {
    assert_eq!(inflate("one apple"), "two apple");
    assert_eq!(inflate("Ten items"), "Eleven items");
    assert_eq!(inflate("TEN ITEMS"), "ELEVEN ITEMS");
    assert_eq!(inflate("ONE APPLE"), "TWO APPLE");
}

#[test]
fn test_mixed_case_sentence() {
    assert_eq!(inflate("One, Two, THREE"), "Two, Three, FOUR");
    assert_eq!(inflate("One TWO three"), "Two THREE four");
}

#[test]
fn test_irregular_casing() {
    // First letter upper, not all upper: capitalized.
    assert_eq!(inflate("ThIrTeEn"), "Fourteen");
    // First letter lower: stored form.
    assert_eq!(inflate("sEVEN"), "eight");
}

#[test]
fn test_casing_follows_match_not_word() {
    // Only the matched span decides: "TENnis" is an all-upper "TEN".
    assert_eq!(inflate("TENnis"), "ELEVENnis");
    assert_eq!(inflate("AnyONE"), "AnyTWO");
    assert_eq!(inflate("anyOne"), "anyTwo");
}

#[test]
fn test_compound_successor_casing() {
    assert_eq!(inflate("NINETYNINE"), "ONEHUNDRED");
    assert_eq!(inflate("Twenty"), "Twentyone");
}
