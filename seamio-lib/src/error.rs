use std::fmt;

#[derive(Debug)]
pub enum SeamioError {
    Io(std::io::Error),
    UnknownMaterial(String),
}

pub type Result<T> = std::result::Result<T, SeamioError>;

impl fmt::Display for SeamioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "{e}"),
            Self::UnknownMaterial(id) => write!(f, "unknown material: {id}"),
        }
    }
}

impl std::error::Error for SeamioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::UnknownMaterial(_) => None,
        }
    }
}

impl From<std::io::Error> for SeamioError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}
