/// Stable dataset identifier used in info, errors, and cache paths.
/// Example: `penguins`
pub type DatasetName = String;
/// Column/field name within a feature schema or record.
/// Examples: `species`, `culmen_length_mm`, `sex`
pub type FieldName = String;
/// Member of a bounded class-label set.
/// Examples: `Adelie`, `FEMALE`, `NA`
pub type LabelName = String;
/// Named dataset partition with a declared example count.
/// Examples: `train`, `test`
pub type SplitName = String;
/// Remote or local location of a source resource.
/// Example: `https://storage.googleapis.com/download.tensorflow.org/data/palmer_penguins/penguins_size.csv`
pub type ResourceUrl = String;
/// File name of a downloaded artifact, as seen by the test harness.
/// Example: `penguins_size.csv`
pub type ArtifactName = String;
