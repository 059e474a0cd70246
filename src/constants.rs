/// Constants used by feature cleanup and sentinel handling.
pub mod features {
    /// Literal token accepted as the male `sex` label.
    pub const SEX_MALE: &str = "MALE";
    /// Literal token accepted as the female `sex` label.
    pub const SEX_FEMALE: &str = "FEMALE";
    /// Fallback label assigned to any other `sex` value.
    pub const NOT_APPLICABLE: &str = "NA";
    /// Sentinel substring standing in for missing numeric data.
    pub const MISSING_TOKEN: &str = "NA";
    /// Replacement substring emitted for missing numeric data.
    pub const MISSING_REPLACEMENT: &str = "NaN";
}

/// Constants describing the Palmer penguins dataset.
pub mod penguins {
    /// Dataset name used in info, errors, and the harness.
    pub const DATASET_NAME: &str = "penguins";
    /// Remote location of the curated size CSV.
    pub const PENGUINS_CSV: &str = "https://storage.googleapis.com/download.tensorflow.org/data/palmer_penguins/penguins_size.csv";
    /// Dataset homepage.
    pub const HOMEPAGE: &str = "https://allisonhorst.github.io/palmerpenguins/";
    /// Name of the single split produced by the builder.
    pub const TRAIN_SPLIT: &str = "train";

    /// Field name for the species class label.
    pub const FIELD_SPECIES: &str = "species";
    /// Field name for the island class label.
    pub const FIELD_ISLAND: &str = "island";
    /// Field name for culmen length in millimeters.
    pub const FIELD_CULMEN_LENGTH: &str = "culmen_length_mm";
    /// Field name for culmen depth in millimeters.
    pub const FIELD_CULMEN_DEPTH: &str = "culmen_depth_mm";
    /// Field name for flipper length in millimeters.
    pub const FIELD_FLIPPER_LENGTH: &str = "flipper_length_mm";
    /// Field name for body mass in grams.
    pub const FIELD_BODY_MASS: &str = "body_mass_g";
    /// Field name for the sex class label.
    pub const FIELD_SEX: &str = "sex";

    /// Ordered species labels.
    pub const SPECIES_LABELS: [&str; 3] = ["Adelie", "Chinstrap", "Gentoo"];
    /// Ordered island labels.
    pub const ISLAND_LABELS: [&str; 3] = ["Biscoe", "Dream", "Torgersen"];
    /// Ordered sex labels, including the not-applicable fallback.
    pub const SEX_LABELS: [&str; 3] = ["FEMALE", "MALE", "NA"];
}

/// Constants used by the caching download manager.
pub mod download {
    /// Default directory for cached downloaded artifacts.
    pub const DEFAULT_CACHE_DIR: &str = ".datacat_cache";
    /// URL scheme prefix resolved to a local filesystem path.
    pub const FILE_SCHEME: &str = "file://";
}
