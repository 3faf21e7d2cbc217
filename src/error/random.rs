use thiserror::Error;

#[derive(Debug, Error)]
pub enum RandomError {
    #[error("Failed to seed random source from the operating system: {source}")]
    Seed {
        #[source]
        source: rand::Error,
    },
    #[error("Cannot choose from an empty set.")]
    EmptyChoice,
}
