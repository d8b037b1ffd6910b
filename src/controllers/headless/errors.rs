use std::error::Error;
use std::fmt;
use std::io;

use crate::core::fractals::mandelbrot::errors::MandelbrotError;

#[derive(Debug)]
pub enum HeadlessError {
    ResolutionTooLarge {
        resolution_exponent: u32,
        max: u32,
    },
    NothingRendered,
    Algorithm(MandelbrotError),
    Io(io::Error),
}

impl fmt::Display for HeadlessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResolutionTooLarge {
                resolution_exponent,
                max,
            } => {
                write!(
                    f,
                    "headless snapshots support a resolution exponent of at most {}, got {}",
                    max, resolution_exponent
                )
            }
            Self::NothingRendered => write!(f, "no frame has been rendered yet"),
            Self::Algorithm(err) => write!(f, "cannot render snapshot: {}", err),
            Self::Io(err) => write!(f, "failed to write snapshot: {}", err),
        }
    }
}

impl Error for HeadlessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for HeadlessError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<MandelbrotError> for HeadlessError {
    fn from(err: MandelbrotError) -> Self {
        Self::Algorithm(err)
    }
}
