#[derive(thiserror::Error, Debug)]
pub enum RouteError {
    #[error("failure reading '{filename}': {message}")]
    CsvReadError { filename: String, message: String },
    #[error("failure writing '{filename}': {message}")]
    CsvWriteError { filename: String, message: String },
    #[error("missing required column '{column}' in input file. available columns: {available}")]
    MissingColumnError { column: String, available: String },
    #[error("{0}")]
    OtherError(String),
}
