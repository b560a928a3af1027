use crate::app::decoration::ParticleFrame;
use crate::app::state::AppState;
use crate::content::PARTICLE_GLYPH;
use crate::ui::theme::Theme;
use ratatui::prelude::*;

/// Cell for a particle frame, or `None` while it is still below the bottom edge.
pub fn particle_cell(area: Rect, frame: ParticleFrame) -> Option<Position> {
    if area.is_empty() {
        return None;
    }
    let column = (frame.column * f64::from(area.width - 1)).round() as u16;
    // Rise 0 starts one row below the area, rise 1 ends on the top row.
    let from_top = ((1.0 - frame.rise) * f64::from(area.height)).round() as u16;
    if from_top >= area.height {
        return None;
    }
    Some(Position::new(area.x + column, area.y + from_top))
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if !state.config.ui.particles {
        return;
    }
    let decorations = state.proposal.decorations();
    if !decorations.is_seeded() {
        return;
    }

    let elapsed = state.elapsed_secs();
    let buf = frame.buffer_mut();
    for particle in decorations.particles() {
        let Some(pf) = particle.frame(elapsed) else {
            continue;
        };
        let Some(pos) = particle_cell(area, pf) else {
            continue;
        };
        if let Some(cell) = buf.cell_mut(pos) {
            cell.set_symbol(PARTICLE_GLYPH).set_style(Theme::particle(pf.opacity));
        }
    }
}
