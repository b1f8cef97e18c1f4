use vertex::client::DEFAULT_MODEL;

/// Configuration for Vertex AI generation access.
pub struct VertexConfig {
    pub project_id: String,
    pub location: String,
    pub model: String,
    pub access_token: String,
}

impl VertexConfig {
    pub fn from_env() -> Self {
        let project_id = std::env::var("VERTEX_PROJECT_ID")
            .expect("VERTEX_PROJECT_ID environment variable must be set");
        let location =
            std::env::var("VERTEX_LOCATION").unwrap_or_else(|_| "asia-northeast1".to_string());
        let model = std::env::var("VERTEX_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let access_token = std::env::var("VERTEX_ACCESS_TOKEN")
            .expect("VERTEX_ACCESS_TOKEN environment variable must be set");

        Self {
            project_id,
            location,
            model,
            access_token,
        }
    }
}
