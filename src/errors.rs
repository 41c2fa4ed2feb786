#[derive(thiserror::Error, Debug)]
pub enum AppErrors {
    #[error("CSV file not found: {0}")]
    InputFileNotFound(String),
    #[error("io: {0}")]
    Io(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

pub type AppResult<T> = Result<T, AppErrors>;
