use std::path::Path;

use crate::adapters::surface::memory::MemorySurface;

pub trait FilePresenterPort {
    fn present(&self, surface: &MemorySurface, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
