use std::path::PathBuf;

/// Crate-level error type
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Cannot compress file: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::Io { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
