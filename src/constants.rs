//! Application constants for the subcam processor
//!
//! This module contains the expected raw input schema, the fixed output
//! column prefix, conversion step definitions, and parsing defaults used
//! throughout the converter.

// =============================================================================
// Raw Input Schema
// =============================================================================

/// Expected column headers of a raw observation log, in canonical order
pub mod raw_columns {
    pub const FILE_NAME: &str = "File Name";
    pub const TIMESTAMPS: &str = "Timestamps (HH:MM:SS)";
    pub const ADJUSTED_DATETIME: &str = "Adjusted Date and Time";
    pub const EVENT_OBSERVATION: &str = "Event Observation";
    pub const QUANTITY: &str = "Quantity (Nmax)";
    pub const COMMON_NAME: &str = "Common Name";
    pub const SCIENTIFIC_NAME: &str = "Lowest Order Scientific Name";
    pub const CONFIDENCE: &str = "Confidence Level";
    pub const VIDEO_QUALITY: &str = "Quality of Video";

    /// All expected columns of the raw schema
    pub const EXPECTED: &[&str] = &[
        FILE_NAME,
        TIMESTAMPS,
        ADJUSTED_DATETIME,
        EVENT_OBSERVATION,
        QUANTITY,
        COMMON_NAME,
        SCIENTIFIC_NAME,
        CONFIDENCE,
        VIDEO_QUALITY,
    ];

    /// Optional-but-recommended columns (absence is noted, never fatal)
    pub const OPTIONAL: &[&str] = &[CONFIDENCE, VIDEO_QUALITY];
}

// =============================================================================
// Output Schema
// =============================================================================

/// Fixed prefix columns of the output matrix, before the per-taxon columns
pub const OUTPUT_PREFIX_COLUMNS: &[&str] = &[
    "Date",
    "Total Observations",
    "Cumulative Observations",
    "All Unique Organisms Observed Today",
    "New Unique Organisms Today",
    "Cumulative New Unique Organisms",
    "Cumulative Unique Species",
];

/// Date rendering format used in the output matrix (round-trip stable)
pub const OUTPUT_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Timestamp Parsing
// =============================================================================

/// Accepted combined date-and-time formats for the adjusted timestamp,
/// tried in order. A bare date is accepted as midnight.
pub const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Accepted date-only formats (parsed as midnight)
pub const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

// =============================================================================
// Conversion Steps
// =============================================================================

/// Ordered conversion step definitions shared by the converter and reporter
pub mod steps {
    /// One pipeline step: (1-based step number, step name, percent complete
    /// once the step finishes)
    pub type StepDef = (u32, &'static str, u8);

    pub const PARSE: StepDef = (1, "Parse input CSV", 15);
    pub const VALIDATE_INPUT: StepDef = (2, "Validate input format", 25);
    pub const QUALITY_FILTER: StepDef = (3, "Apply quality filters", 40);
    pub const RESOLVE_TAXA: StepDef = (4, "Resolve taxon identities", 55);
    pub const AGGREGATE: StepDef = (5, "Aggregate daily summaries", 80);
    pub const VALIDATE_OUTPUT: StepDef = (6, "Validate output invariants", 90);
    pub const ASSEMBLE: StepDef = (7, "Assemble result", 100);

    /// All steps in execution order
    pub const ALL: &[StepDef] = &[
        PARSE,
        VALIDATE_INPUT,
        QUALITY_FILTER,
        RESOLVE_TAXA,
        AGGREGATE,
        VALIDATE_OUTPUT,
        ASSEMBLE,
    ];

    /// Total number of conversion steps
    pub const COUNT: u32 = ALL.len() as u32;
}

// =============================================================================
// Validation Defaults
// =============================================================================

/// Number of leading rows sampled by the input validator
pub const VALIDATION_SAMPLE_ROWS: usize = 25;
