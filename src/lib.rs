use config::Config;
use routes::marker::MarkerService;

pub mod config;
pub mod error;
pub mod middleware;

pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub markers: MarkerService,
}
