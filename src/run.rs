use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::mail::Mailer;
use crate::routes::{contact, custom_tour, health_check};

pub fn run<M: Mailer>(listener: TcpListener, mailer: M) -> Result<Server, std::io::Error> {
    let mailer = web::Data::new(mailer);
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(health_check))
            .route("/api/contact", web::post().to(contact::<M>))
            .route("/api/custom-tour", web::post().to(custom_tour::<M>))
            .app_data(mailer.clone())
    })
    .listen(listener)?
    .run())
}
