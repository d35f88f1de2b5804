/// Response type for the /health endpoint.
#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct HealthResponse {
    status: String,
    timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: String::from("healthy"), timestamp: chrono::Utc::now().to_rfc3339() }
    }

    pub fn status(&self) -> &str { &self.status }
}
