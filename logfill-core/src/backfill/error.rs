use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackfillError {
    // Input
    #[error("failed to open log file {path}: {source}")]
    OpenLog {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read log input: {source}")]
    ReadLog {
        #[source]
        source: io::Error,
    },

    // Output
    #[error("failed to write SQL output: {source}")]
    WriteSql {
        #[source]
        source: io::Error,
    },
}

impl BackfillError {
    pub fn open_log(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OpenLog {
            path: path.into(),
            source,
        }
    }

    pub fn read_log(source: io::Error) -> Self {
        Self::ReadLog { source }
    }

    pub fn write_sql(source: io::Error) -> Self {
        Self::WriteSql { source }
    }
}
