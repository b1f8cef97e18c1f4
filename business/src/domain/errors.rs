/// Document-store errors shared by the domain layer.
/// Variants use code-style identifiers so messages stay log-greppable.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The targeted document does not exist (patch of a missing combo).
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.database_error")]
    DatabaseError,
}
