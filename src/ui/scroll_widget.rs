//! Ratatui widget that draws an [`InfiniteScroll`] strip inside a bordered
//! viewport, translated by the engine's current offset.
//!
//! Offsets and heights are in units; `units_per_row` converts them to
//! terminal rows.  Items that straddle the viewport edge are clipped row by
//! row, so the loop scrolls smoothly through partial boxes.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::core::{
    item::Item,
    props::{ScrollProps, TiltDirection},
    scroller::{Cursor, InfiniteScroll},
};

use super::theme::Theme;

/// Widest horizontal lean a tilted viewport gets, in columns.
const MAX_TILT_SPAN: u16 = 8;

/// Natural height of an item in units: its text lines plus the two border
/// rows.  The engine applies the minimum height on top.
pub fn measure_item(item: &Item, units_per_row: f64) -> f64 {
    (item.line_count() + 2) as f64 * units_per_row
}

/// Where the viewport sits inside the area the host gave the widget:
/// horizontally centred, top aligned, sized by `width` / `max_height`.
pub fn viewport_rect(props: &ScrollProps, area: Rect) -> Rect {
    let width = props.width.min(area.width);
    let height = props.max_height.clamp(area.height);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, height)
}

/// Horizontal lean of one viewport row.  Left tilt pushes lower rows to the
/// right; right tilt mirrors it.
pub fn tilt_shift(row: u16, height: u16, span: u16, direction: TiltDirection) -> u16 {
    if height <= 1 || span == 0 {
        return 0;
    }
    let lean = (u32::from(row) * u32::from(span) / u32::from(height - 1)) as u16;
    match direction {
        TiltDirection::Left => lean,
        TiltDirection::Right => span - lean,
    }
}

/// Draws one widget instance.  Created fresh each frame.
pub struct ScrollWidget<'a> {
    scroll: &'a InfiniteScroll,
    units_per_row: f64,
}

impl<'a> ScrollWidget<'a> {
    pub fn new(scroll: &'a InfiniteScroll, units_per_row: f64) -> Self {
        Self {
            scroll,
            units_per_row,
        }
    }

    fn wrapper_block(&self) -> Block<'static> {
        let cursor = self.scroll.cursor();
        let mut hint = match cursor {
            Cursor::Grab => " grab ".to_string(),
            Cursor::Grabbing => " grabbing ".to_string(),
        };
        if self.scroll.is_paused() {
            hint.push_str("· paused ");
        }
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::wrapper_style(cursor))
            .title_bottom(
                Line::from(Span::styled(hint, Theme::wrapper_hint_style())).right_aligned(),
            )
    }
}

impl Widget for ScrollWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let props = self.scroll.props();
        let viewport = viewport_rect(props, area);
        if viewport.width < 4 || viewport.height < 3 {
            return;
        }

        let block = self.wrapper_block();
        let inner = block.inner(viewport);
        block.render(viewport, buf);
        buf.set_style(inner, Theme::container_style());

        if self.units_per_row <= 0.0 || inner.height == 0 {
            return;
        }

        let span = if props.is_tilted {
            (inner.width / 4).min(MAX_TILT_SPAN)
        } else {
            0
        };
        let item_width = inner.width.saturating_sub(span);
        if item_width < 2 {
            return;
        }

        // Strip position `units` lands on viewport row `row_of(units)`.
        let translate = self.scroll.translate_y();
        let upr = self.units_per_row;
        let rows = i64::from(inner.height);
        let row_of = |units: f64| ((units + translate) / upr).floor() as i64;

        for placed in self.scroll.strip().layout(props.spacing()) {
            let first = row_of(placed.top);
            let end = row_of(placed.top + placed.slot.height).max(first + 1);
            if end <= 0 {
                continue;
            }
            if first >= rows {
                break;
            }
            let Some(item) = self.scroll.items().get(placed.slot.item) else {
                continue;
            };
            let item_rows = ItemRows {
                item,
                first,
                end,
                width: item_width,
            };
            for row in first.max(0)..end.min(rows) {
                let screen_row = row as u16;
                let shift = tilt_shift(screen_row, inner.height, span, props.tilt_direction);
                item_rows.draw_row(buf, row, inner.x + shift, inner.y + screen_row);
            }
        }
    }
}

/// One boxed item spanning rows `[first, end)` of the viewport.
struct ItemRows<'a> {
    item: &'a Item,
    first: i64,
    end: i64,
    width: u16,
}

impl ItemRows<'_> {
    fn draw_row(&self, buf: &mut Buffer, row: i64, x: u16, screen_y: u16) {
        let border = Theme::item_border_style();
        let inner_width = self.width.saturating_sub(2) as usize;

        if row == self.first || row == self.end - 1 {
            let (left, right) = if row == self.first {
                ("╭", "╮")
            } else {
                ("╰", "╯")
            };
            let line = format!("{left}{}{right}", "─".repeat(inner_width));
            buf.set_stringn(x, screen_y, line, self.width as usize, border);
            return;
        }

        buf.set_string(x, screen_y, "│", border);
        buf.set_string(x + self.width - 1, screen_y, "│", border);

        let lines: Vec<&str> = self.item.lines().collect();
        let body = (self.end - self.first - 2).max(0);
        let top_pad = (body - lines.len() as i64).max(0) / 2;
        let line_idx = row - self.first - 1 - top_pad;
        if line_idx < 0 {
            return;
        }
        if let Some(text) = lines.get(line_idx as usize) {
            let span = Span::styled(*text, Theme::item_text_style());
            let text_width = span.width().min(inner_width);
            let pad = ((inner_width - text_width) / 2) as u16;
            buf.set_span(x + 1 + pad, screen_y, &span, inner_width as u16 - pad);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::props::MaxHeight;

    const UPR: f64 = 15.0;

    fn scroll(items: &[&str], tilted: bool) -> InfiniteScroll {
        let mut s = InfiniteScroll::new(ScrollProps {
            width: 20,
            max_height: MaxHeight::Rows(12),
            negative_margin: "0".into(),
            items: items.iter().map(|&t| Item::new(t)).collect(),
            item_min_height: 75.0,
            is_tilted: tilted,
            ..ScrollProps::default()
        });
        s.mount(|item| measure_item(item, UPR));
        s
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        let area = buf.area;
        (area.x..area.x + area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn viewport_is_centred_and_clamped() {
        let props = ScrollProps {
            width: 20,
            max_height: MaxHeight::Rows(50),
            ..ScrollProps::default()
        };
        let rect = viewport_rect(&props, Rect::new(10, 5, 40, 30));
        assert_eq!(rect, Rect::new(20, 5, 20, 30));

        let narrow = viewport_rect(&props, Rect::new(0, 0, 8, 4));
        assert_eq!(narrow, Rect::new(0, 0, 8, 4));
    }

    #[test]
    fn tilt_shift_leans_both_ways() {
        assert_eq!(tilt_shift(0, 11, 5, TiltDirection::Left), 0);
        assert_eq!(tilt_shift(10, 11, 5, TiltDirection::Left), 5);
        assert_eq!(tilt_shift(0, 11, 5, TiltDirection::Right), 5);
        assert_eq!(tilt_shift(10, 11, 5, TiltDirection::Right), 0);
        assert_eq!(tilt_shift(3, 1, 5, TiltDirection::Left), 0);
    }

    #[test]
    fn renders_boxed_items_from_the_top() {
        let s = scroll(&["alpha", "beta"], false);
        let area = Rect::new(0, 0, 20, 12);
        let mut buf = Buffer::empty(area);
        ScrollWidget::new(&s, UPR).render(area, &mut buf);

        // Row 0 is the viewport border; each item is 5 rows tall.
        assert!(row_text(&buf, 1).starts_with("│╭"));
        assert!(row_text(&buf, 3).contains("alpha"));
        assert!(row_text(&buf, 5).starts_with("│╰"));
        assert!(row_text(&buf, 6).starts_with("│╭"));
        assert!(row_text(&buf, 8).contains("beta"));
        assert!(row_text(&buf, 11).contains("grab"));
    }

    #[test]
    fn offset_translates_content_up() {
        let mut s = scroll(&["alpha", "beta"], false);
        // Two rows of units.
        s.update_position(2.0 * UPR);
        let area = Rect::new(0, 0, 20, 12);
        let mut buf = Buffer::empty(area);
        ScrollWidget::new(&s, UPR).render(area, &mut buf);

        assert!(row_text(&buf, 1).contains("alpha"));
        assert!(row_text(&buf, 3).starts_with("│╰"));
    }

    #[test]
    fn clones_fill_the_seam() {
        let mut s = scroll(&["alpha", "beta"], false);
        // Period is 150 units (10 rows); start 8 rows in.
        s.update_position(8.0 * UPR);
        let area = Rect::new(0, 0, 20, 12);
        let mut buf = Buffer::empty(area);
        ScrollWidget::new(&s, UPR).render(area, &mut buf);

        // The tail of "beta" is followed by the cloned "alpha".
        assert!(row_text(&buf, 2).starts_with("│╰"));
        assert!(row_text(&buf, 3).starts_with("│╭"));
        assert!(row_text(&buf, 5).contains("alpha"));
    }

    #[test]
    fn tilted_rows_shift_right_going_down() {
        let s = scroll(&["alpha", "beta"], true);
        let area = Rect::new(0, 0, 20, 12);
        let mut buf = Buffer::empty(area);
        ScrollWidget::new(&s, UPR).render(area, &mut buf);

        let top = row_text(&buf, 1);
        let bottom = row_text(&buf, 10);
        let top_corner = top.find('╭').unwrap();
        let bottom_corner = bottom.find('╰').unwrap();
        assert!(bottom_corner > top_corner);
    }

    #[test]
    fn grabbing_cursor_shows_in_hint() {
        let mut s = scroll(&["alpha"], false);
        s.pointer_down(30.0);
        s.pointer_move(0.0);
        assert_eq!(s.offset(), 30.0);
        let area = Rect::new(0, 0, 20, 12);
        let mut buf = Buffer::empty(area);
        ScrollWidget::new(&s, UPR).render(area, &mut buf);
        assert!(row_text(&buf, 11).contains("grabbing"));
    }

    #[test]
    fn empty_widget_draws_only_the_frame() {
        let mut s = InfiniteScroll::new(ScrollProps {
            width: 20,
            max_height: MaxHeight::Rows(6),
            ..ScrollProps::default()
        });
        s.mount(|item| measure_item(item, UPR));
        let area = Rect::new(0, 0, 20, 6);
        let mut buf = Buffer::empty(area);
        ScrollWidget::new(&s, UPR).render(area, &mut buf);
        assert_eq!(row_text(&buf, 2).trim(), "│                  │");
    }
}
