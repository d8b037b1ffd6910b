use std::io::{self, Write};
use std::path::Path;

/// Writes packed RGB bytes as a binary (P6) PPM file.
pub fn write_ppm(width: u32, height: u32, rgb: &[u8], filepath: impl AsRef<Path>) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(filepath)?);

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", width, height)?;
    writeln!(file, "255")?;
    file.write_all(rgb)?;
    file.flush()?;

    Ok(())
}
