use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuadratureError {
    #[error("eigenvalue solver did not converge for order {order}")]
    NoConvergence { order: usize },

    #[error("non-finite node or weight produced for order {order}")]
    NonFinite { order: usize },

    #[error("weight underflowed to zero for order {order}")]
    WeightUnderflow { order: usize },
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("unexpected end of literal")]
    UnexpectedEnd,

    #[error("unexpected character '{found}' at byte {pos}")]
    UnexpectedChar { found: char, pos: usize },

    #[error("invalid number '{text}' at byte {pos}")]
    InvalidNumber { text: String, pos: usize },

    #[error("trailing input at byte {pos}")]
    TrailingInput { pos: usize },

    #[error("malformed table: {0}")]
    Shape(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("order {n_max} exceeds the supported maximum of {limit}")]
    OrderTooLarge { n_max: usize, limit: usize },

    #[error(transparent)]
    Quadrature(#[from] QuadratureError),

    #[error("generated literal does not parse back: {0}")]
    Parse(#[from] ParseError),

    #[error("serialized table differs from computed table at order {order}")]
    RoundTrip { order: usize },

    #[error("failed to write csv export: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to initialize logging: {0}")]
    Logging(String),

    #[error("invalid progress bar template: {0}")]
    Progress(#[from] indicatif::style::TemplateError),
}
