#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("repository.unavailable")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
