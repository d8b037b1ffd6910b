use std::time::Instant;

use log::{debug, info};

use crate::controllers::interactive::errors::RenderLoopError;
use crate::controllers::interactive::ports::{InputSource, PixelSurface};
use crate::controllers::interactive::types::{LoopState, RunStats};
use crate::core::actions::render_frame::render_pixel;
use crate::core::commands::Command;
use crate::core::data::grid_point::GridPoint;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotHueCycle;
use crate::core::ports::colour_map::ColourMap;
use crate::core::scan::ZOrderScan;
use crate::core::surface::writer::PixelSurfaceWriter;

/// Single-threaded progressive renderer.
///
/// Each step either renders one cell of the current Z-order scan or handles
/// one input byte. Input readiness is sampled before every cell; pending input
/// abandons the scan, and after the command is applied the scan restarts from
/// index 0 over whatever is already on the surface.
pub struct RenderLoop<S: PixelSurface, I: InputSource> {
    writer: PixelSurfaceWriter<S>,
    input: I,
    view: ViewState,
    algorithm: MandelbrotAlgorithm,
    scan: ZOrderScan,
    state: LoopState,
    stats: RunStats,
    scan_started: Instant,
}

impl<S: PixelSurface, I: InputSource> RenderLoop<S, I> {
    pub fn new(surface: S, input: I, view: ViewState) -> Self {
        Self {
            writer: PixelSurfaceWriter::new(surface),
            input,
            algorithm: MandelbrotAlgorithm::for_view(&view),
            scan: ZOrderScan::new(view.resolution_exponent()),
            view,
            state: LoopState::Scanning,
            stats: RunStats::default(),
            scan_started: Instant::now(),
        }
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[must_use]
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Index of the next cell in the current scan.
    #[must_use]
    pub fn scan_position(&self) -> u64 {
        self.scan.position()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        self.writer.surface()
    }

    /// Steps until the quit command terminates the loop.
    pub fn run(&mut self) -> Result<RunStats, RenderLoopError> {
        info!(
            "exploring: zoom {}, center ({}, {}), grid {}x{}, {} iterations, {} colouring",
            self.view.zoom(),
            self.view.center().real,
            self.view.center().imag,
            self.view.grid_size(),
            self.view.grid_size(),
            self.view.iteration_cap(),
            MandelbrotHueCycle.display_name()
        );

        while self.step()? != LoopState::Terminated {}

        info!(
            "quit after {} frames, {} interrupted scans, {} commands",
            self.stats.frames_completed, self.stats.scans_interrupted, self.stats.commands_applied
        );

        Ok(self.stats)
    }

    /// Advances the state machine by one transition and returns the new
    /// state. Only `AwaitingInput` blocks.
    pub fn step(&mut self) -> Result<LoopState, RenderLoopError> {
        let state = self.state;

        self.state = match state {
            LoopState::Scanning => self.scan_step()?,
            LoopState::AwaitingInput => LoopState::ApplyingCommand(self.input.read_byte()?),
            LoopState::ApplyingCommand(byte) => self.apply_byte(byte),
            LoopState::Terminated => LoopState::Terminated,
        };

        Ok(self.state)
    }

    fn scan_step(&mut self) -> Result<LoopState, RenderLoopError> {
        if self.input.is_ready()? {
            if self.scan.position() > 0 && !self.scan.is_exhausted() {
                self.stats.scans_interrupted += 1;
                debug!(
                    "scan interrupted at {}/{}",
                    self.scan.position(),
                    self.scan.total()
                );
            }

            return Ok(LoopState::AwaitingInput);
        }

        // a finished frame stays on screen until the next key
        let Some(point) = self.scan.next() else {
            return Ok(LoopState::AwaitingInput);
        };

        self.render_pixel(point);

        if self.scan.is_exhausted() {
            self.stats.frames_completed += 1;
            debug!(
                "frame of {} pixels completed in {:?}",
                self.scan.total(),
                self.scan_started.elapsed()
            );
        }

        Ok(LoopState::Scanning)
    }

    fn render_pixel(&mut self, point: GridPoint) {
        render_pixel(&mut self.writer, &self.view, &self.algorithm, point);
        self.stats.pixels_rendered += 1;
    }

    fn apply_byte(&mut self, byte: u8) -> LoopState {
        match Command::from_byte(byte) {
            Some(command) => {
                if command.apply(&mut self.view).is_break() {
                    debug!("quit requested");
                    return LoopState::Terminated;
                }

                self.stats.commands_applied += 1;
                debug!("applied {:?}: {:?}", command, self.view);
            }
            None => {
                self.stats.bytes_ignored += 1;
                debug!("ignoring unbound byte {:#04x}", byte);
            }
        }

        self.restart_scan();

        LoopState::Scanning
    }

    fn restart_scan(&mut self) {
        self.algorithm = MandelbrotAlgorithm::for_view(&self.view);
        self.scan.restart(self.view.resolution_exponent());
        self.scan_started = Instant::now();
    }
}
