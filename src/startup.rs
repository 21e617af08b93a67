use std::net::TcpListener;

use actix_web::dev::Server;

use crate::config::{ApplicationSettings, Configuration};
use crate::mail::{EmailClient, Mailer};
use crate::run::run;

pub struct AppServer {
    port: u16,
    address: String,
    server: Server,
}

impl AppServer {
    pub async fn build(configuration: Configuration) -> Result<Self, anyhow::Error> {
        let email_client = EmailClient::new(&configuration.email_client)?;
        Self::build_with_mailer(&configuration.application, email_client).await
    }

    /// Binds the listener and wires the routes to `mailer`. Port `0` picks a free port.
    pub async fn build_with_mailer<M: Mailer>(
        application: &ApplicationSettings,
        mailer: M,
    ) -> Result<Self, anyhow::Error> {
        let listener = TcpListener::bind(format!("{}:{}", application.host, application.port))?;

        let address = application.host.clone();
        let port = listener.local_addr()?.port();

        tracing::info!("Starting service on address: {}:{}", address, port);

        let server = run(listener, mailer)?;

        Ok(Self {
            port,
            address,
            server,
        })
    }

    pub fn to_server_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
