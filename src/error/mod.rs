mod app;
mod config;
mod http;
mod random;
mod request;
mod transport;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use http::HttpError;
pub use random::RandomError;
pub use request::RequestBuildError;
pub use transport::TransportError;
pub use validation::ValidationError;
