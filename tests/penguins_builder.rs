use datacat::CatalogError;
use datacat::builder::load_split;
use datacat::datasets::Penguins;
use datacat::download::FixtureDownloader;
use datacat::testing::BuilderTestCase;

const FIXTURES: &str = "tests/fixtures/penguins";

#[test]
fn declaration_passes_against_fixture() {
    BuilderTestCase::new(Penguins::new())
        .expect_split("train", 5)
        .expect_artifact("penguins_size.csv")
        .run(FIXTURES)
        .unwrap();
}

#[test]
fn split_count_mismatch_fails() {
    let err = BuilderTestCase::new(Penguins::new())
        .expect_split("train", 344)
        .run(FIXTURES)
        .unwrap_err();
    assert!(matches!(
        err,
        CatalogError::ExpectationFailed(msg) if msg.contains("expected 344")
    ));
}

#[test]
fn artifact_name_mismatch_fails() {
    let err = BuilderTestCase::new(Penguins::new())
        .expect_split("train", 5)
        .expect_artifact("penguins_raw.csv")
        .run(FIXTURES)
        .unwrap_err();
    assert!(matches!(
        err,
        CatalogError::ExpectationFailed(msg) if msg.contains("penguins_raw.csv")
    ));
}

#[test]
fn examples_are_cleaned_in_file_order() {
    let downloads = FixtureDownloader::new(FIXTURES);
    let examples = load_split(&Penguins::new(), &downloads, "train").unwrap();
    assert_eq!(examples.len(), 5);

    let ordinals: Vec<u64> = examples.iter().map(|(ordinal, _)| *ordinal).collect();
    assert_eq!(ordinals, vec![0, 1, 2, 3, 4]);

    // Well-formed rows pass through untouched.
    let (_, first) = &examples[0];
    assert_eq!(first.get("sex").unwrap(), "MALE");
    assert_eq!(first.get("body_mass_g").unwrap(), "3750");

    // The all-missing row has every NA sentinel rewritten and its sex value
    // (also "NA", which is not MALE/FEMALE) resolved to the fallback label.
    let (_, missing) = &examples[2];
    for field in [
        "culmen_length_mm",
        "culmen_depth_mm",
        "flipper_length_mm",
        "body_mass_g",
    ] {
        assert_eq!(missing.get(field).unwrap(), "NaN", "field: {field}");
    }
    assert_eq!(missing.get("sex").unwrap(), "NA");

    // A "." placeholder collapses to the fallback label; the rest of the row
    // is untouched.
    let (_, dotted) = &examples[3];
    assert_eq!(dotted.get("sex").unwrap(), "NA");
    assert_eq!(dotted.get("culmen_length_mm").unwrap(), "36.7");
}

#[test]
fn unknown_split_is_rejected() {
    let downloads = FixtureDownloader::new(FIXTURES);
    let err = load_split(&Penguins::new(), &downloads, "validation").unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Configuration(msg) if msg.contains("validation")
    ));
}

#[test]
fn info_serializes_to_json() {
    use datacat::builder::DatasetBuilder;

    let json = Penguins::new().info().to_json().unwrap();
    assert!(json.contains("\"penguins\""));
    assert!(json.contains("\"version\": \"1.0.0\""));
    assert!(json.contains("culmen_length_mm"));
}
