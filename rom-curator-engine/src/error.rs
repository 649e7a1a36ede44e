use thiserror::Error;

/// Errors surfaced by the curation engine.
///
/// The engine is total over well-formed input; the only failure modes are a
/// violated grouping precondition and unparseable preferences input.
#[derive(Debug, Error)]
pub enum EngineError {
    /// An empty group reached the classifier. The grouper never produces
    /// one, so this signals a caller-side invariant failure.
    #[error("cannot classify an empty group (key: {0})")]
    EmptyGroup(String),

    /// Preferences input failed to parse.
    #[error("invalid preferences: {0}")]
    InvalidPreferences(#[from] toml::de::Error),
}
