//! Detail panel content: deduplicated, naturally sorted, colored lines.

use std::sync::Arc;

use itertools::Itertools;
use stopmap_transit::{StopDetail, StopIdentifier};

use crate::icon::ModeGlyph;

pub mod color;
pub mod sort;

pub use color::{ColorPolicy, LineColor, get_line_color};
pub use sort::natural_cmp;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineChip {
    pub public_code: Arc<str>,
    pub authority_name: Arc<str>,
    pub color: LineColor,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelContent {
    pub stop_id: StopIdentifier,
    pub name: Arc<str>,
    pub modes: Vec<ModeGlyph>,
    pub lines: Vec<LineChip>,
}

/// Lines are deduplicated by public code (first occurrence wins, including
/// its authority) and then sorted with [`natural_cmp`].
pub fn render_detail(detail: &StopDetail, policy: &ColorPolicy) -> PanelContent {
    let lines = detail
        .lines()
        .unique_by(|line| Arc::clone(&line.public_code))
        .sorted_by(|a, b| natural_cmp(&a.public_code, &b.public_code))
        .map(|line| LineChip {
            public_code: Arc::clone(&line.public_code),
            authority_name: Arc::clone(&line.authority_name),
            color: policy.line_color(&line.public_code, &line.authority_name),
        })
        .collect();

    PanelContent {
        stop_id: detail.id.clone(),
        name: Arc::clone(&detail.name),
        modes: detail
            .transport_modes
            .iter()
            .map(ModeGlyph::for_mode)
            .collect(),
        lines,
    }
}
