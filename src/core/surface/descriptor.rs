use crate::core::surface::errors::SurfaceError;

/// Byte layout of one pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelFormat {
    /// 32 bits: blue, green, red, then an unused zero byte.
    Bgrx8888,
    /// 16 bits little-endian: red at bit 11, green at bit 5, blue at bit 0,
    /// five bits each.
    Rgb555,
}

impl PixelFormat {
    pub fn from_bits_per_pixel(bits_per_pixel: u32) -> Result<Self, SurfaceError> {
        match bits_per_pixel {
            32 => Ok(Self::Bgrx8888),
            16 => Ok(Self::Rgb555),
            _ => Err(SurfaceError::UnsupportedPixelFormat { bits_per_pixel }),
        }
    }

    #[must_use]
    pub const fn bits_per_pixel(self) -> u32 {
        match self {
            Self::Bgrx8888 => 32,
            Self::Rgb555 => 16,
        }
    }

    #[must_use]
    pub const fn bytes_per_pixel(self) -> usize {
        (self.bits_per_pixel() / 8) as usize
    }
}

/// Geometry of a pixel surface, fixed once the surface is acquired.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SurfaceDescriptor {
    width: u32,
    height: u32,
    pixel_format: PixelFormat,
    row_stride: usize,
    x_offset: u32,
    y_offset: u32,
}

impl SurfaceDescriptor {
    pub fn new(
        width: u32,
        height: u32,
        pixel_format: PixelFormat,
        row_stride: usize,
        x_offset: u32,
        y_offset: u32,
    ) -> Result<Self, SurfaceError> {
        let required = width as usize * pixel_format.bytes_per_pixel();

        if row_stride < required {
            return Err(SurfaceError::StrideTooSmall {
                row_stride,
                required,
            });
        }

        Ok(Self {
            width,
            height,
            pixel_format,
            row_stride,
            x_offset,
            y_offset,
        })
    }

    /// A tightly packed surface with no panning offset.
    #[must_use]
    pub fn packed(width: u32, height: u32, pixel_format: PixelFormat) -> Self {
        Self {
            width,
            height,
            pixel_format,
            row_stride: width as usize * pixel_format.bytes_per_pixel(),
            x_offset: 0,
            y_offset: 0,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_format(&self) -> PixelFormat {
        self.pixel_format
    }

    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    #[must_use]
    pub fn x_offset(&self) -> u32 {
        self.x_offset
    }

    #[must_use]
    pub fn y_offset(&self) -> u32 {
        self.y_offset
    }

    /// Bytes needed to back every addressable pixel, offsets included.
    #[must_use]
    pub fn buffer_len(&self) -> usize {
        (self.height as usize + self.y_offset as usize) * self.row_stride
    }

    /// Byte offset of `(x, y)`, or `None` when the point is clipped.
    #[must_use]
    pub fn offset_of(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let column = (x as usize + self.x_offset as usize) * self.pixel_format.bytes_per_pixel();
        let row = (y as usize + self.y_offset as usize) * self.row_stride;

        Some(column + row)
    }
}
