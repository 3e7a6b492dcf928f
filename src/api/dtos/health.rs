use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthzResponseDTO {
    pub message: &'static str,
}
