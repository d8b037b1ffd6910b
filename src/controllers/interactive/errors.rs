use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum RenderLoopError {
    Input(io::Error),
}

impl fmt::Display for RenderLoopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(err) => write!(f, "input device error: {}", err),
        }
    }
}

impl Error for RenderLoopError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Input(err) => Some(err),
        }
    }
}

impl From<io::Error> for RenderLoopError {
    fn from(err: io::Error) -> Self {
        Self::Input(err)
    }
}
