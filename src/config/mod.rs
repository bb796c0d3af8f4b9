use std::env;

pub mod cors;

pub use cors::create_cors_layer;

const DEFAULT_PORT: u16 = 5000;

pub struct Config {
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { port }
    }
}
