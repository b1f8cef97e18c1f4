#[derive(Debug, thiserror::Error)]
pub enum CardLookupError {
    #[error("card_lookup.not_found")]
    NotFound,
    #[error("card_lookup.http_status.{0}")]
    HttpStatus(u16),
    #[error("card_lookup.schema_violation: {0}")]
    SchemaViolation(String),
    #[error("card_lookup.transport: {0}")]
    Transport(String),
}
