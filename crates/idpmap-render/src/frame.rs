//! Frame rendering
//!
//! Turns one timeline position into the set of draw instructions the map
//! frontend paints for that date: resolve every site's series, drop sites
//! that are closed or have no positive population, size the rest against
//! the dataset maximum.

use serde::{Deserialize, Serialize};

use idpmap_core::index::SiteIndex;
use idpmap_core::models::DateStamp;
use idpmap_core::scale::RadiusScale;

use crate::symbol::{DrawInstruction, SymbolLabel, SymbolStyle};

/// Everything the frontend needs to repaint the symbol layer for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolFrame {
    /// Timeline position this frame was rendered for
    pub position: usize,

    /// The survey date at that position
    pub date: DateStamp,

    /// One instruction per visible site
    pub symbols: Vec<DrawInstruction>,
}

/// Renders symbol frames from a built index.
///
/// Pure with respect to the index: the same index and position always yield
/// the same instruction sequence, in site-id order.
#[derive(Debug, Clone, Default)]
pub struct SymbolRenderer {
    scale: RadiusScale,
    style: SymbolStyle,
}

impl SymbolRenderer {
    pub fn new(scale: RadiusScale) -> Self {
        Self { scale, style: SymbolStyle::default() }
    }

    /// Replace the symbol style
    pub fn with_style(mut self, style: SymbolStyle) -> Self {
        self.style = style;
        self
    }

    pub fn scale(&self) -> &RadiusScale {
        &self.scale
    }

    /// Draw instructions for the date at `position`.
    ///
    /// Empty when the timeline is empty or the position is out of range;
    /// callers clamp through the navigator first, so an empty result here
    /// means there is genuinely nothing to draw. A site contributes one
    /// instruction only if it resolves to an observation that is still open
    /// on the date and carries a positive population; everything else
    /// simply has no symbol that round.
    pub fn render_at(&self, index: &SiteIndex, position: usize) -> Vec<DrawInstruction> {
        let Some(date) = index.timeline().get(position) else {
            return Vec::new();
        };

        let mut instructions = Vec::new();

        for (site_id, series) in index.sites() {
            let Some(observation) = series.as_of(date) else {
                continue;
            };
            if !observation.open_on(date) {
                continue;
            }
            let Some(magnitude) = observation.magnitude() else {
                continue;
            };

            instructions.push(DrawInstruction {
                site_id: site_id.clone(),
                location: observation.location,
                radius: self.scale.radius(Some(magnitude), index.max_population()),
                style: self.style.clone(),
                label: SymbolLabel::for_observation(observation),
            });
        }

        instructions
    }

    /// The full frame for `position`: the resolved date plus its
    /// instructions. `None` only when the position does not address a date.
    pub fn frame_at(&self, index: &SiteIndex, position: usize) -> Option<SymbolFrame> {
        let date = index.timeline().get(position)?.clone();
        let symbols = self.render_at(index, position);
        Some(SymbolFrame { position, date, symbols })
    }
}
