//! The demo host page: a fixed item list and two preset widgets.

use crate::core::{
    item::Item,
    props::{AutoplayDirection, MaxHeight, ScrollProps, TiltDirection},
    scroller::InfiniteScroll,
};
use crate::ui::scroll_widget::measure_item;

pub const PAGE_TITLE: &str = "Infinite Scroll Demo";

/// Viewport width shared by both presets, in columns.
const PRESET_WIDTH: u16 = 40;

/// Viewport height shared by both presets, in units.
const PRESET_MAX_HEIGHT: f64 = 500.0;

const DEMO_ITEMS: &[&str] = &[
    "🚀 Item 1: Welcome to Infinite Scroll",
    "⭐ Item 2: Smooth scrolling experience",
    "🎨 Item 3: Beautiful animations",
    "💡 Item 4: Powered by ratatui",
    "🔥 Item 5: Drag to scroll",
    "🌟 Item 6: Wheel support",
    "🎯 Item 7: Touch enabled",
    "🚦 Item 8: Auto-play option",
    "🎪 Item 9: Customizable",
    "🏆 Item 10: Performance optimized",
];

pub fn demo_items() -> Vec<Item> {
    DEMO_ITEMS.iter().map(|&s| Item::new(s)).collect()
}

fn preset_max_height(units_per_row: f64) -> MaxHeight {
    MaxHeight::Rows((PRESET_MAX_HEIGHT / units_per_row).round() as u16)
}

/// Plain vertical loop, user driven only.
pub fn default_scroll_props(items: Vec<Item>, units_per_row: f64) -> ScrollProps {
    ScrollProps {
        items,
        width: PRESET_WIDTH,
        max_height: preset_max_height(units_per_row),
        ..ScrollProps::default()
    }
}

/// Tilted loop that autoplays downward and pauses under the pointer.
pub fn tilted_autoplay_props(items: Vec<Item>, units_per_row: f64) -> ScrollProps {
    ScrollProps {
        items,
        width: PRESET_WIDTH,
        max_height: preset_max_height(units_per_row),
        is_tilted: true,
        tilt_direction: TiltDirection::Left,
        autoplay: true,
        autoplay_speed: 0.5,
        autoplay_direction: AutoplayDirection::Down,
        pause_on_hover: true,
        ..ScrollProps::default()
    }
}

/// One titled widget on the page.
pub struct DemoPanel {
    pub heading: &'static str,
    pub scroll: InfiniteScroll,
}

/// Everything the page shows.
pub struct HostPage {
    pub panels: Vec<DemoPanel>,
    units_per_row: f64,
}

impl HostPage {
    /// The two demo panels, not yet mounted.
    pub fn demo(units_per_row: f64, drag_tolerance: f64) -> Self {
        let items = demo_items();
        let panels = vec![
            DemoPanel {
                heading: "Default Scroll",
                scroll: InfiniteScroll::new(default_scroll_props(items.clone(), units_per_row))
                    .with_drag_tolerance(drag_tolerance),
            },
            DemoPanel {
                heading: "Tilted with Autoplay",
                scroll: InfiniteScroll::new(tilted_autoplay_props(items, units_per_row))
                    .with_drag_tolerance(drag_tolerance),
            },
        ];
        Self {
            panels,
            units_per_row,
        }
    }

    pub fn units_per_row(&self) -> f64 {
        self.units_per_row
    }

    pub fn mount_all(&mut self) {
        let upr = self.units_per_row;
        for panel in &mut self.panels {
            panel.scroll.mount(|item| measure_item(item, upr));
        }
        let mounted = self.panels.iter().filter(|p| p.scroll.is_mounted()).count();
        tracing::debug!(mounted, total = self.panels.len(), "page mounted");
    }

    pub fn teardown_all(&mut self) {
        for panel in &mut self.panels {
            panel.scroll.teardown();
        }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn panel_mut(&mut self, index: usize) -> Option<&mut InfiniteScroll> {
        self.panels.get_mut(index).map(|p| &mut p.scroll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_page_mounts_both_presets() {
        let mut page = HostPage::demo(15.0, 10.0);
        page.mount_all();
        assert_eq!(page.len(), 2);

        for panel in &page.panels {
            assert!(panel.scroll.is_mounted());
            assert_eq!(panel.scroll.strip().len(), 20);
            // Ten one-line items all hit the 150 unit minimum.
            assert_eq!(panel.scroll.period(), 1495.0);
        }

        let tilted = page.panels[1].scroll.props();
        assert!(tilted.is_tilted && tilted.autoplay && tilted.pause_on_hover);
        assert_eq!(tilted.max_height, MaxHeight::Rows(33));
        assert!(page.panels[0].scroll.listeners().frame.is_none());
        assert!(page.panels[1].scroll.listeners().frame.is_some());

        page.teardown_all();
        assert!(page.panels.iter().all(|p| p.scroll.strip().len() == 10));
    }
}
