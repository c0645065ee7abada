use rstest::rstest;
use xmlgen::is_valid_name;

#[rstest]
#[case("doc")]
#[case("_doc")]
#[case(":doc")]
#[case("ns:doc")]
#[case("a-b")]
#[case("a.b")]
#[case("h1")]
#[case("été")]
#[case("名前")]
fn test_valid_names(#[case] name: &str) {
    assert!(is_valid_name(name));
}

#[rstest]
#[case("")]
#[case("1bad")]
#[case("-bad")]
#[case(".bad")]
#[case("has space")]
#[case("a&b")]
#[case("a<b")]
#[case("a\"b")]
#[case("a\tb")]
fn test_invalid_names(#[case] name: &str) {
    assert!(!is_valid_name(name));
}
