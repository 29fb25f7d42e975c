//! Font discovery and text measurement.
//!
//! Rasterization resolves glyphs through the same `fontdb` database that is
//! handed to usvg, so the widths measured here match what resvg draws.

use std::sync::Arc;

use usvg::fontdb;

use crate::error::{RenderError, RenderResult};

/// Font families tried in order before falling back to any installed face.
const PREFERRED_FAMILIES: [&str; 2] = ["DejaVu Sans", "Liberation Sans"];

/// Text measurement seam between layout and font handling.
///
/// The layout engine only needs advance widths; tests drive it with fixed
/// synthetic metrics instead of whatever fonts the host has installed.
pub trait TextMeasure {
    /// Advance width of `text` at `px` pixels.
    fn measure(&self, text: &str, px: f32) -> f32;

    /// Family name to put on SVG text elements.
    fn family(&self) -> &str;
}

/// A discovered system font plus the database it came from.
pub struct FontBook {
    db: Arc<fontdb::Database>,
    family: String,
    face_data: Vec<u8>,
    face_index: u32,
    units_per_em: f32,
}

impl std::fmt::Debug for FontBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontBook")
            .field("family", &self.family)
            .field("faces", &self.db.len())
            .finish_non_exhaustive()
    }
}

impl FontBook {
    /// Load system fonts and pick a face for the dashboard.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Font`] when no font is installed at all; the
    /// caller falls back to the text dashboard in that case.
    pub fn discover() -> RenderResult<Self> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        Self::from_database(db)
    }

    /// Pick a face from an already populated database.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Font`] when the database is empty or the
    /// chosen face cannot be parsed.
    pub fn from_database(db: fontdb::Database) -> RenderResult<Self> {
        let families: Vec<fontdb::Family<'_>> = PREFERRED_FAMILIES
            .iter()
            .map(|name| fontdb::Family::Name(name))
            .chain(std::iter::once(fontdb::Family::SansSerif))
            .collect();
        let query = fontdb::Query {
            families: &families,
            ..fontdb::Query::default()
        };

        let id = db
            .query(&query)
            .or_else(|| db.faces().next().map(|face| face.id))
            .ok_or_else(|| RenderError::Font("no fonts available on this system".into()))?;

        let family = db
            .face(id)
            .and_then(|info| info.families.first().map(|(name, _)| name.clone()))
            .unwrap_or_else(|| "sans-serif".to_string());

        let (face_data, face_index) = db
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or_else(|| RenderError::Font(format!("face data unavailable for {family}")))?;

        let face = ttf_parser::Face::parse(&face_data, face_index)
            .map_err(|e| RenderError::Font(format!("cannot parse {family}: {e}")))?;
        let units_per_em = f32::from(face.units_per_em());

        tracing::debug!(family = %family, faces = db.len(), "font selected");

        Ok(Self {
            db: Arc::new(db),
            family,
            face_data,
            face_index,
            units_per_em,
        })
    }

    /// Family name of the selected face.
    #[must_use]
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The font database, for handing to usvg.
    #[must_use]
    pub fn database(&self) -> Arc<fontdb::Database> {
        Arc::clone(&self.db)
    }

    /// Measure the advance width of `text` at `px` pixels.
    ///
    /// Kerning is ignored; glyphs missing from the face count as 0.6 em,
    /// which keeps the measurement total and deterministic.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn measure(&self, text: &str, px: f32) -> f32 {
        let Ok(face) = ttf_parser::Face::parse(&self.face_data, self.face_index) else {
            // parsed successfully at discovery, so this is unreachable in
            // practice; keep measurement total anyway
            return text.chars().count() as f32 * px * 0.6;
        };

        let units: f32 = text
            .chars()
            .map(|c| {
                face.glyph_index(c)
                    .and_then(|gid| face.glyph_hor_advance(gid))
                    .map_or(self.units_per_em * 0.6, f32::from)
            })
            .sum();
        units / self.units_per_em * px
    }
}

impl TextMeasure for FontBook {
    fn measure(&self, text: &str, px: f32) -> f32 {
        FontBook::measure(self, text, px)
    }

    fn family(&self) -> &str {
        FontBook::family(self)
    }
}
