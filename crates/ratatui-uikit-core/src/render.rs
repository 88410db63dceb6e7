use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthChar;

use crate::viewport::ViewportState;

/// Renders `text` on one row starting at `(x, y)`, skipping the first `start_col`
/// display columns and writing at most `max_cols` columns.
///
/// Wide characters straddling either edge are dropped instead of half-drawn.
pub fn draw_clipped(
    x: u16,
    y: u16,
    start_col: u16,
    max_cols: u16,
    buf: &mut Buffer,
    text: &str,
    style: Style,
) {
    if max_cols == 0 {
        return;
    }

    let start_col = start_col as usize;
    let max_cols = max_cols as usize;
    let mut col = 0usize;
    let mut out_cols = 0usize;
    let mut dx = 0u16;
    let mut tmp = [0u8; 4];

    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if w == 0 {
            continue;
        }
        // Entirely left of the clip window, or straddling its left edge.
        if col + w <= start_col || col < start_col {
            col += w;
            continue;
        }
        if out_cols + w > max_cols {
            return;
        }

        let s = ch.encode_utf8(&mut tmp);
        if let Some(cell) = buf.cell_mut((x + dx, y)) {
            cell.set_style(style);
            cell.set_symbol(s);
        }
        dx += 1;
        out_cols += 1;
        col += w;

        if w == 2 {
            if out_cols >= max_cols {
                return;
            }
            if let Some(cell) = buf.cell_mut((x + dx, y)) {
                cell.set_style(style);
                cell.set_symbol("");
            }
            dx += 1;
            out_cols += 1;
        }
    }
}

/// Renders a one-cell-wide vertical scrollbar track with a proportional thumb.
///
/// The track is blanked when the content fits the viewport.
pub fn draw_scrollbar(area: Rect, buf: &mut Buffer, state: &ViewportState, style: Style) {
    buf.set_style(area, style);
    if area.height == 0 {
        return;
    }
    if state.content_h == 0 || state.content_h <= state.viewport_h as u32 {
        for dy in 0..area.height {
            buf.set_stringn(area.x, area.y + dy, " ", 1, style);
        }
        return;
    }

    let track_h = area.height as f64;
    let thumb_h = ((state.viewport_h as f64 / state.content_h as f64) * track_h)
        .round()
        .clamp(1.0, track_h) as u16;

    let max_offset = state
        .content_h
        .saturating_sub(state.viewport_h as u32)
        .max(1) as f64;
    let thumb_top = ((state.offset as f64 / max_offset) * (track_h - thumb_h as f64))
        .round()
        .clamp(0.0, (track_h - thumb_h as f64).max(0.0)) as u16;

    for dy in 0..area.height {
        let ch = if dy >= thumb_top && dy < thumb_top + thumb_h {
            "█"
        } else {
            " "
        };
        buf.set_stringn(area.x, area.y + dy, ch, 1, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    fn row_string(buf: &Buffer, y: u16, w: u16) -> String {
        (0..w)
            .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn clips_to_window() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
        draw_clipped(0, 0, 0, 3, &mut buf, "abcdef", Style::default());
        assert_eq!(row_string(&buf, 0, 6), "abc   ");

        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
        draw_clipped(0, 0, 2, 3, &mut buf, "abcdef", Style::default());
        assert_eq!(row_string(&buf, 0, 6), "cde   ");
    }

    #[test]
    fn drops_wide_char_straddling_the_left_edge() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        draw_clipped(0, 0, 1, 4, &mut buf, "你好", Style::default());
        let s = row_string(&buf, 0, 4);
        assert!(s.starts_with("好"));
    }

    #[test]
    fn scrollbar_blank_when_content_fits() {
        let mut state = ViewportState::default();
        state.set_viewport(5);
        state.set_content(3);
        let mut buf = Buffer::empty(Rect::new(0, 0, 1, 5));
        draw_scrollbar(Rect::new(0, 0, 1, 5), &mut buf, &state, Style::default());
        for y in 0..5 {
            assert_eq!(buf.cell((0, y)).unwrap().symbol(), " ");
        }
    }

    #[test]
    fn scrollbar_thumb_tracks_offset() {
        let mut state = ViewportState::default();
        state.set_viewport(5);
        state.set_content(50);
        state.to_bottom();
        let mut buf = Buffer::empty(Rect::new(0, 0, 1, 5));
        draw_scrollbar(Rect::new(0, 0, 1, 5), &mut buf, &state, Style::default());
        assert_eq!(buf.cell((0, 4)).unwrap().symbol(), "█");
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), " ");
    }
}
