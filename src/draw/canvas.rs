//! Restorable pixel surface backing live previews.
//!
//! The shape tool only talks to the [`Snapshot`] trait. [`Canvas`] is the
//! double-buffered image surface the bundled host uses: a committed baseline
//! plus a working copy that previews are drawn into.

use super::color::Color;
use log::debug;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// Errors raised by surface snapshot operations.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Cairo surface operation failed: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Surface pixels are still borrowed: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("Failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Working surface with a restorable committed baseline.
pub trait Snapshot {
    /// The drawable surface previews and commits paint into.
    fn surface(&self) -> &cairo::ImageSurface;

    /// Resets the working surface to the last committed baseline.
    fn restore(&mut self) -> Result<(), SurfaceError>;

    /// Makes the current working pixels the new baseline.
    fn commit(&mut self) -> Result<(), SurfaceError>;
}

/// ARGB32 double buffer implementing [`Snapshot`].
pub struct Canvas {
    working: cairo::ImageSurface,
    baseline: cairo::ImageSurface,
}

impl Canvas {
    /// Creates a canvas of the given size with both buffers filled with `background`.
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self, SurfaceError> {
        let working = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        let baseline = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;

        {
            let ctx = cairo::Context::new(&baseline)?;
            ctx.set_operator(cairo::Operator::Source);
            background.set_source(&ctx);
            ctx.paint()?;
        }
        copy_surface(&baseline, &working)?;

        debug!("Created {width}x{height} canvas");
        Ok(Self { working, baseline })
    }

    pub fn width(&self) -> i32 {
        self.working.width()
    }

    pub fn height(&self) -> i32 {
        self.working.height()
    }

    /// Returns the premultiplied ARGB value of a working-surface pixel.
    pub fn pixel(&mut self, x: i32, y: i32) -> Result<Option<u32>, SurfaceError> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return Ok(None);
        }
        let stride = self.working.stride() as usize;
        let offset = y as usize * stride + x as usize * 4;
        self.working.flush();
        let data = self.working.data()?;
        let bytes = [
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ];
        Ok(Some(u32::from_ne_bytes(bytes)))
    }

    /// Copies out the raw working-surface bytes.
    pub fn pixels(&mut self) -> Result<Vec<u8>, SurfaceError> {
        self.working.flush();
        Ok(self.working.data()?.to_vec())
    }

    /// Encodes the working surface as PNG.
    pub fn write_png(&self, path: &Path) -> Result<(), SurfaceError> {
        let mut file = File::create(path)?;
        self.working.write_to_png(&mut file)?;
        debug!("Wrote canvas to {}", path.display());
        Ok(())
    }
}

impl Snapshot for Canvas {
    fn surface(&self) -> &cairo::ImageSurface {
        &self.working
    }

    fn restore(&mut self) -> Result<(), SurfaceError> {
        copy_surface(&self.baseline, &self.working)
    }

    fn commit(&mut self) -> Result<(), SurfaceError> {
        copy_surface(&self.working, &self.baseline)
    }
}

fn copy_surface(from: &cairo::ImageSurface, to: &cairo::ImageSurface) -> Result<(), SurfaceError> {
    let ctx = cairo::Context::new(to)?;
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_surface(from, 0.0, 0.0)?;
    ctx.paint()?;
    Ok(())
}
