use std::io;
use std::path::PathBuf;

pub type GenerateResult<T> = std::result::Result<T, GenerateError>;

/// Fatal conditions of a generate run. None of them is recovered from.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Missing required argument -f")]
    MissingInputPath,

    #[error("failed to read template {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse template: {0}")]
    InputParse(String),

    #[error("Parameters not found in file")]
    MissingParameters,

    #[error("failed to read existing parameters file {}: {source}", path.display())]
    OutputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse existing parameters file {}: {message}", path.display())]
    OutputParse { path: PathBuf, message: String },

    #[error("failed to encode parameters: {0}")]
    Encode(String),

    #[error("failed to write parameters to {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenerateError {
    /// Process exit status for this error. Usage errors exit 2, everything else 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            GenerateError::MissingInputPath => 2,
            _ => 1,
        }
    }

    /// True for failures caused by the template rather than by the destination.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            GenerateError::MissingInputPath
                | GenerateError::InputRead { .. }
                | GenerateError::InputParse(_)
                | GenerateError::MissingParameters
        )
    }
}
