use crate::domain::errors::RepositoryError;

/// Errors from the combo discovery service. All variants are fatal to the
/// discovery run and are never retried at this layer.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    /// Non-2xx status from the discovery endpoint.
    #[error("discovery.http_status.{0}")]
    HttpStatus(u16),
    /// A page failed response validation. Signals upstream contract drift
    /// rather than a transient fault, so it is neither retried nor skipped.
    #[error("discovery.schema_violation: {0}")]
    SchemaViolation(String),
    #[error("discovery.transport: {0}")]
    Transport(String),
}

/// Errors from a single translation call.
#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    /// Non-2xx status from the generation service.
    #[error("translation.http_status.{0}")]
    HttpStatus(u16),
    /// The generation call succeeded transport-wise but returned no usable
    /// text. Carries the raw response body for diagnosis.
    #[error("translation.empty_generation: {0}")]
    EmptyGeneration(String),
    #[error("translation.transport: {0}")]
    Transport(String),
}

/// Composite error of the discovery-and-save driver. Either side halts the
/// run so the triggering mechanism can redeliver it wholesale.
#[derive(Debug, thiserror::Error)]
pub enum ComboSaveError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
    #[error(transparent)]
    Persistence(#[from] RepositoryError),
}

/// Failure of one item within the translation driver. Contained per item;
/// never aborts the surrounding pass.
#[derive(Debug, thiserror::Error)]
pub enum ComboTranslateError {
    #[error(transparent)]
    Translation(#[from] TranslationError),
    #[error(transparent)]
    Persistence(#[from] RepositoryError),
}
