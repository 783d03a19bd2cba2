use std::collections::HashMap;

use eframe::egui::{
    Align2, Color32, CornerRadius, FontId, Pos2, Rect, RichText, Sense, Ui, Vec2,
};

use crate::color::ColorScale;
use crate::data::view::MapView;

// ---------------------------------------------------------------------------
// US state tile grid (choropleth-style cartogram)
// ---------------------------------------------------------------------------

/// (state code, column, row) on an 11×8 grid, roughly preserving geography.
/// Codes without a tile (e.g. Canadian provinces in the source data) are
/// simply not drawn, matching the original map's `USA-states` location mode.
const TILE_LAYOUT: &[(&str, u8, u8)] = &[
    ("AK", 0, 0),
    ("ME", 10, 0),
    ("VT", 9, 1),
    ("NH", 10, 1),
    ("WA", 0, 2),
    ("ID", 1, 2),
    ("MT", 2, 2),
    ("ND", 3, 2),
    ("MN", 4, 2),
    ("IL", 5, 2),
    ("WI", 6, 2),
    ("MI", 7, 2),
    ("NY", 8, 2),
    ("RI", 9, 2),
    ("MA", 10, 2),
    ("OR", 0, 3),
    ("NV", 1, 3),
    ("WY", 2, 3),
    ("SD", 3, 3),
    ("IA", 4, 3),
    ("IN", 5, 3),
    ("OH", 6, 3),
    ("PA", 7, 3),
    ("NJ", 8, 3),
    ("CT", 9, 3),
    ("CA", 0, 4),
    ("UT", 1, 4),
    ("CO", 2, 4),
    ("NE", 3, 4),
    ("MO", 4, 4),
    ("KY", 5, 4),
    ("WV", 6, 4),
    ("VA", 7, 4),
    ("MD", 8, 4),
    ("DE", 9, 4),
    ("AZ", 1, 5),
    ("NM", 2, 5),
    ("KS", 3, 5),
    ("AR", 4, 5),
    ("TN", 5, 5),
    ("NC", 6, 5),
    ("SC", 7, 5),
    ("DC", 8, 5),
    ("OK", 2, 6),
    ("LA", 3, 6),
    ("MS", 4, 6),
    ("AL", 5, 6),
    ("GA", 6, 6),
    ("HI", 0, 7),
    ("TX", 2, 7),
    ("FL", 6, 7),
];

const GRID_COLS: f32 = 11.0;
const GRID_ROWS: f32 = 8.0;
const EMPTY_TILE: Color32 = Color32::from_gray(38);

/// Render the per-state sales counts as a tile-grid map.
pub fn state_map(ui: &mut Ui, view: &MapView) {
    let counts: HashMap<&str, usize> = view
        .state_counts
        .iter()
        .map(|(code, n)| (code.as_str(), *n))
        .collect();

    let min = counts.values().copied().min().unwrap_or(0);
    let max = counts.values().copied().max().unwrap_or(0);
    let scale = ColorScale::new(min as f64, max as f64);

    // Tile size follows the available width, capped to keep text readable.
    let tile = (ui.available_width() / GRID_COLS).clamp(24.0, 64.0);
    let size = Vec2::new(tile * GRID_COLS, tile * GRID_ROWS);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let origin = response.rect.min;

    let mut hovered: Option<(&str, usize)> = None;
    let hover_pos = response.hover_pos();

    for &(code, col, row) in TILE_LAYOUT {
        let pos = Pos2::new(
            origin.x + col as f32 * tile,
            origin.y + row as f32 * tile,
        );
        let rect = Rect::from_min_size(pos, Vec2::splat(tile));
        let count = counts.get(code).copied();

        let fill = match count {
            Some(n) => scale.color_for(n as f64),
            None => EMPTY_TILE,
        };
        painter.rect_filled(rect.shrink(1.5), CornerRadius::same(3), fill);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            code,
            FontId::proportional(tile * 0.30),
            Color32::WHITE,
        );

        if let (Some(pos), Some(n)) = (hover_pos, count) {
            if rect.contains(pos) {
                hovered = Some((code, n));
            }
        }
    }

    legend_strip(ui, &scale, min, max);

    if let Some((code, n)) = hovered {
        response.on_hover_text(format!("{code}: {n} sales in {}", view.year));
    }
}

/// Small gradient strip with the count range, the map's colour key.
fn legend_strip(ui: &mut Ui, scale: &ColorScale, min: usize, max: usize) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new(min.to_string()).weak());

        let (response, painter) =
            ui.allocate_painter(Vec2::new(160.0, 12.0), Sense::hover());
        let rect = response.rect;
        let segments = 32;
        let seg_width = rect.width() / segments as f32;
        for i in 0..segments {
            let t = i as f64 / (segments - 1) as f64;
            let value = min as f64 + t * (max.saturating_sub(min)) as f64;
            let seg = Rect::from_min_size(
                Pos2::new(rect.min.x + i as f32 * seg_width, rect.min.y),
                Vec2::new(seg_width + 0.5, rect.height()),
            );
            painter.rect_filled(seg, CornerRadius::ZERO, scale.color_for(value));
        }

        ui.label(RichText::new(max.to_string()).weak());
        ui.label(RichText::new("sales").weak());
    });
}
