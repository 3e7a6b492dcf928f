use actix_web::HttpResponse;

use super::dtos::health::HealthzResponseDTO;

/// Liveness probe, never touches the database
pub async fn healthz() -> HttpResponse {
    HttpResponse::Ok().json(HealthzResponseDTO { message: "OK" })
}

#[cfg(test)]
mod test {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::api::api::configure;

    #[actix_web::test]
    async fn test_healthz() {
        let app = test::init_service(App::new().configure(configure)).await;

        for uri in ["/healthz", "/healthz/"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::OK, "GET {}", uri);

            let body: Value = test::read_body_json(resp).await;

            assert_eq!(body, json!({"message": "OK"}));
        }
    }
}
