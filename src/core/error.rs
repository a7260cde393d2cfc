use thiserror::Error;

/// Failures the helix widget can report. None of them are fatal to the page:
/// each one degrades to "decorative element absent".
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HelixError {
    #[error("invalid helix config: {0}")]
    InvalidConfig(String),
    #[error("helix container missing or has zero size")]
    MissingContainer,
    #[error("invalid option {key}={value:?}")]
    InvalidOption { key: &'static str, value: String },
}
