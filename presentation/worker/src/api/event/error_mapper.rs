use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::combo::errors::ComboSaveError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ComboSaveError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let name = match &self {
            ComboSaveError::Discovery(_) => "DiscoveryError",
            ComboSaveError::Persistence(_) => "PersistenceError",
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}
