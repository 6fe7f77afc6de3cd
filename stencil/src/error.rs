use thiserror::Error;

/// A configuration defect detected where untyped input enters the crate.
///
/// Kernels themselves take closed enums, so none of these can be raised from inside a stencil
/// evaluation. They are meant to abort the run before any sweep starts.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("spatial order {0} has not been implemented (supported orders: 2, 4, 6)")]
    UnsupportedSpatialOrder(u32),

    #[error("unrecognized {kind} `{value}`")]
    UnknownTag { kind: &'static str, value: String },

    #[error(
        "field `{field}` has {available} ghost cell(s) but the configured stencils need {required}"
    )]
    InsufficientGhostCells {
        field: String,
        available: usize,
        required: usize,
    },

    #[error("field `{field}` covers {found:?} interior cells, expected {expected:?}")]
    MismatchedCellCount {
        field: String,
        expected: [usize; 3],
        found: [usize; 3],
    },
}
