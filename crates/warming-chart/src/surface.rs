//! Display surfaces: where a rendered chart ends up.

use sha2::{Digest, Sha256};

use crate::chart::Chart;
use crate::svg::render_svg;

/// A container the narrative clears and repopulates on every render.
pub trait DisplaySurface {
    /// Removes all previously presented output.
    fn clear(&mut self);

    /// Draws `chart` onto the surface.
    fn present(&mut self, chart: &Chart);
}

/// Keeps the latest chart as an SVG document.
#[derive(Debug, Default)]
pub struct SvgSurface {
    document: Option<String>,
    fingerprint: Option<String>,
    revision: u64,
}

impl SvgSurface {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current SVG document, if anything is presented.
    #[must_use]
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// Hex SHA-256 of the current document; suitable as an `ETag`.
    #[must_use]
    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    /// Number of charts presented so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl DisplaySurface for SvgSurface {
    fn clear(&mut self) {
        self.document = None;
        self.fingerprint = None;
    }

    fn present(&mut self, chart: &Chart) {
        let document = render_svg(chart);
        let fingerprint = hex::encode(Sha256::digest(document.as_bytes()));

        self.document = Some(document);
        self.fingerprint = Some(fingerprint);
        self.revision += 1;
    }
}
