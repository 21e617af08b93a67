use actix_web::HttpResponse;

#[tracing::instrument(name = "Checking service health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
