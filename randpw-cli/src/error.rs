use std::path::PathBuf;

use randpw_sampler::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("File '{path}' exists. Use --force to overwrite.")]
    FileExists { path: PathBuf },

    #[error("Can't write to text file '{path}': {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generation worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Failed to install logger: {0}")]
    Logger(#[from] tracing_subscriber::util::TryInitError),
}

#[cfg(test)]
mod tests {
    use randpw_sampler::validate;

    use super::*;

    #[test]
    fn test_validation_error_displays_plain_message() {
        let err = Error::from(validate("AB", 0, 1, 0).unwrap_err());
        assert_eq!(err.to_string(), "Length of each password must be from 1 to 100 characters: 0");

        let err = Error::from(validate("", 10, 5, 0).unwrap_err());
        assert_eq!(err.to_string(), "Alphabet of available characters is invalid: can not be empty");
    }

    #[test]
    fn test_file_exists_message() {
        let err = Error::FileExists { path: PathBuf::from("out.txt") };
        assert_eq!(err.to_string(), "File 'out.txt' exists. Use --force to overwrite.");
    }
}
