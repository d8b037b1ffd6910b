use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    DeviceUnavailable {
        path: String,
        details: String,
    },
    UnsupportedPixelFormat {
        bits_per_pixel: u32,
    },
    StrideTooSmall {
        row_stride: usize,
        required: usize,
    },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeviceUnavailable { path, details } => {
                write!(f, "cannot open framebuffer device {}: {}", path, details)
            }
            Self::UnsupportedPixelFormat { bits_per_pixel } => {
                write!(
                    f,
                    "unsupported pixel depth {}bpp, expected 16 or 32",
                    bits_per_pixel
                )
            }
            Self::StrideTooSmall {
                row_stride,
                required,
            } => {
                write!(
                    f,
                    "row stride {} bytes is smaller than the {} bytes a row needs",
                    row_stride, required
                )
            }
        }
    }
}

impl Error for SurfaceError {}
