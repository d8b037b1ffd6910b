//! Render loop state and bookkeeping.

/// Where the render loop is between two calls to `step`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoopState {
    /// Rendering the next cell of the scan, polling input before each one.
    Scanning,
    /// Input is pending (or the frame is complete); the next step blocks for
    /// one byte.
    AwaitingInput,
    /// One byte was read and will be applied to the view.
    ApplyingCommand(u8),
    /// The quit command was applied.
    Terminated,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct RunStats {
    /// Scans that reached the last cell.
    pub frames_completed: u64,
    /// Scans abandoned after drawing at least one cell because input arrived.
    pub scans_interrupted: u64,
    /// Bytes that mapped to a view mutation.
    pub commands_applied: u64,
    /// Bytes with no binding.
    pub bytes_ignored: u64,
    /// Cells evaluated, including clipped ones.
    pub pixels_rendered: u64,
}
