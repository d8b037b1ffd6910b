use std::io;

/// A byte-oriented keyboard channel.
pub trait InputSource {
    /// Zero-timeout readiness probe; never blocks.
    fn is_ready(&mut self) -> io::Result<bool>;

    /// Blocks until one input byte is available and consumes it.
    fn read_byte(&mut self) -> io::Result<u8>;
}
