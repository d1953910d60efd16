use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    #[error("No route matches {0:?}")]
    NoMatch(String),

    #[error("Redirect loop while resolving {0:?}")]
    RedirectLoop(String),

    #[error("Invalid route pattern {0:?}")]
    InvalidPattern(&'static str),
}

pub type Result<T> = std::result::Result<T, RouterError>;
