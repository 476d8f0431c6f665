use crate::app::App;
use crate::config::AppConfig;
use crate::router::handle;
use astra::Server;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

mod api;
mod app;
mod config;
mod domain;
mod errors;
mod geos;
mod responses;
mod router;
mod sheets;
mod signup;
mod submission;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "configuration error");
            std::process::exit(1);
        }
    };

    let app = match App::from_config(&cfg) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to initialize services");
            std::process::exit(1);
        }
    };

    tracing::info!(
        addr = %cfg.bind_addr,
        workers = cfg.max_workers,
        range = %cfg.range,
        "starting server"
    );

    let server = Server::bind(&cfg.bind_addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req: astra::Request, _info| {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_owned();

        let resp = match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!(%method, %path, error = %err, "request failed");
                templates::html_error_response(err)
            }
        };

        tracing::info!(
            %method,
            %path,
            status = resp.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request"
        );
        resp
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down");
}
