use reqwest::Client;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Shared Vertex AI HTTP client configuration.
pub struct VertexClient {
    pub client: Client,
    pub base_url: String,
    pub project_id: String,
    pub location: String,
    pub model: String,
    pub access_token: String,
}

impl VertexClient {
    pub fn new(
        project_id: String,
        location: String,
        model: String,
        access_token: String,
    ) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        let base_url = format!("https://{}-aiplatform.googleapis.com/v1", location);

        Self {
            client,
            base_url,
            project_id,
            location,
            model,
            access_token,
        }
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    /// Returns the generateContent endpoint URL for the configured model.
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/projects/{}/locations/{}/publishers/google/models/{}:generateContent",
            self.base_url, self.project_id, self.location, self.model
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_generate_content_url_from_config() {
        let client = VertexClient::new(
            "cube-project".to_string(),
            "asia-northeast1".to_string(),
            DEFAULT_MODEL.to_string(),
            "token".to_string(),
        );

        assert_eq!(
            client.generate_content_url(),
            "https://asia-northeast1-aiplatform.googleapis.com/v1/projects/cube-project/locations/asia-northeast1/publishers/google/models/gemini-2.5-flash:generateContent"
        );
    }
}
