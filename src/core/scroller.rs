//! The infinite-scroll engine.
//!
//! [`InfiniteScroll`] owns one widget's strip, offset and interaction state.
//! It knows nothing about terminals: the host measures items, converts
//! pointer rows into units, and forwards frames, gestures and hover changes
//! through the [`ScrollInput`] hooks or the finer-grained pointer methods.
//!
//! Lifecycle mirrors a mounted view:
//!
//! * [`InfiniteScroll::new`] renders the `N` primaries.
//! * [`InfiniteScroll::mount`] measures them, appends the clones, resets the
//!   offset and attaches listeners (frame loop, gestures, hover).
//! * [`InfiniteScroll::teardown`] detaches everything and drops the clones.

use super::item::Item;
use super::position::ScrollOffset;
use super::props::ScrollProps;
use super::strip::RenderedStrip;

/// Pointer travel (in units) before a press turns into a drag.
pub const DEFAULT_DRAG_TOLERANCE: f64 = 10.0;

/// Hooks every input source funnels through.
pub trait ScrollInput {
    /// One animation frame elapsed.
    fn on_frame(&mut self);
    /// A wheel or drag step produced a signed position delta.
    fn on_gesture_delta(&mut self, delta: f64);
    /// The pointer entered (`true`) or left (`false`) the viewport.
    fn on_hover_change(&mut self, hovered: bool);
}

/// Cursor shown over the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Grab,
    Grabbing,
}

/// Handle of the pending frame callback, like a `requestAnimationFrame` id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRequest(u64);

/// Which listeners are currently attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Listeners {
    pub gestures: bool,
    pub hover: bool,
    pub frame: Option<FrameRequest>,
}

impl Listeners {
    pub fn any(&self) -> bool {
        self.gestures || self.hover || self.frame.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum DragState {
    #[default]
    Idle,
    /// Button is down but has not moved past the tolerance yet.
    Pressed { origin: f64 },
    Dragging { last: f64 },
}

/// One widget instance.
#[derive(Debug)]
pub struct InfiniteScroll {
    props: ScrollProps,
    strip: RenderedStrip,
    offset: ScrollOffset,
    /// Wrap period, `adjustedHeight`.  Zero until mounted.
    period: f64,
    mounted: bool,
    /// The host asked for a mount (even if the empty guard skipped it).
    mount_requested: bool,
    listeners: Listeners,
    next_frame: u64,
    paused: bool,
    drag: DragState,
    cursor: Cursor,
    drag_tolerance: f64,
}

impl InfiniteScroll {
    pub fn new(props: ScrollProps) -> Self {
        let strip = RenderedStrip::with_primaries(props.items.len());
        Self {
            props,
            strip,
            offset: ScrollOffset::default(),
            period: 0.0,
            mounted: false,
            mount_requested: false,
            listeners: Listeners::default(),
            next_frame: 0,
            paused: false,
            drag: DragState::Idle,
            cursor: Cursor::Grab,
            drag_tolerance: DEFAULT_DRAG_TOLERANCE,
        }
    }

    pub fn with_drag_tolerance(mut self, tolerance: f64) -> Self {
        self.drag_tolerance = tolerance.max(0.0);
        self
    }

    // ── accessors ────────────────────────────────────────────

    pub fn props(&self) -> &ScrollProps {
        &self.props
    }

    pub fn items(&self) -> &[Item] {
        &self.props.items
    }

    pub fn strip(&self) -> &RenderedStrip {
        &self.strip
    }

    /// Current offset `y`, always inside `[0, period)` once mounted.
    pub fn offset(&self) -> f64 {
        self.offset.y()
    }

    pub fn translate_y(&self) -> f64 {
        self.offset.translate_y()
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn listeners(&self) -> Listeners {
        self.listeners
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    // ── lifecycle ────────────────────────────────────────────

    /// Measure, clone and attach.  `measure` returns the natural height of
    /// an item in units; the configured minimum height is applied on top.
    ///
    /// Does nothing for an empty item list.
    pub fn mount(&mut self, measure: impl Fn(&Item) -> f64) {
        if self.mounted {
            self.teardown();
        }
        self.mount_requested = true;
        if self.props.items.is_empty() {
            tracing::debug!("infinite scroll: no items, skipping mount");
            return;
        }

        let min_height = self.props.item_min_height;
        let items = &self.props.items;
        self.strip.measure(|i| measure(&items[i]).max(min_height));

        let total_height = self.strip.total_height();
        let count = self.strip.len() as f64;
        self.period = total_height + self.props.spacing() * count;

        self.strip.clone_all();
        self.offset.reset();

        self.listeners.gestures = true;
        if self.props.autoplay {
            self.listeners.frame = Some(self.request_frame());
            self.listeners.hover = self.props.pause_on_hover;
        }
        self.mounted = true;

        tracing::debug!(
            items = self.props.items.len(),
            period = self.period,
            autoplay = self.props.autoplay,
            "infinite scroll mounted"
        );
    }

    /// Detach listeners, cancel the pending frame and drop the clones.
    pub fn teardown(&mut self) {
        self.mount_requested = false;
        if !self.mounted {
            return;
        }
        self.listeners = Listeners::default();
        let removed = self.strip.remove_back_half();
        self.paused = false;
        self.drag = DragState::Idle;
        self.cursor = Cursor::Grab;
        self.mounted = false;
        tracing::debug!(removed, "infinite scroll torn down");
    }

    /// Replace the props.  Changes to the items, spacing or autoplay settings
    /// re-run the whole mount; anything else only affects rendering.
    pub fn set_props(&mut self, props: ScrollProps, measure: impl Fn(&Item) -> f64) {
        if !self.props.needs_remount(&props) {
            self.props = props;
            return;
        }
        tracing::debug!("infinite scroll dependencies changed, remounting");
        let remount = self.mount_requested;
        self.teardown();
        self.strip = RenderedStrip::with_primaries(props.items.len());
        self.props = props;
        if remount {
            self.mount(measure);
        }
    }

    fn request_frame(&mut self) -> FrameRequest {
        self.next_frame = self.next_frame.wrapping_add(1);
        FrameRequest(self.next_frame)
    }

    // ── position ─────────────────────────────────────────────

    /// Add `delta` to the offset and wrap it into the period.
    pub fn update_position(&mut self, delta: f64) {
        if !self.mounted {
            return;
        }
        self.offset.apply(delta, self.period);
    }

    // ── gestures ─────────────────────────────────────────────

    /// A wheel step.  Wheel speed is `-1`, so the delta is inverted.
    pub fn wheel(&mut self, wheel_delta: f64) {
        self.on_gesture_delta(-wheel_delta);
    }

    /// Primary button (or touch) went down at `y` units.
    pub fn pointer_down(&mut self, y: f64) {
        if !self.listeners.gestures {
            return;
        }
        self.drag = DragState::Pressed { origin: y };
    }

    /// Pointer moved to `y` units while the button is held.
    pub fn pointer_move(&mut self, y: f64) {
        if !self.listeners.gestures {
            return;
        }
        match self.drag {
            DragState::Idle => {}
            DragState::Pressed { origin } => {
                if (y - origin).abs() >= self.drag_tolerance {
                    self.drag_start(origin);
                    self.drag_move(y);
                }
            }
            DragState::Dragging { .. } => self.drag_move(y),
        }
    }

    /// Button (or touch) released.
    pub fn pointer_up(&mut self) {
        if self.is_dragging() {
            self.drag_end();
        }
        self.drag = DragState::Idle;
    }

    fn drag_start(&mut self, y: f64) {
        self.drag = DragState::Dragging { last: y };
        self.cursor = Cursor::Grabbing;
    }

    fn drag_move(&mut self, y: f64) {
        let DragState::Dragging { last } = self.drag else {
            return;
        };
        // Content follows the pointer: moving down lowers `y`.
        let delta_y = last - y;
        self.drag = DragState::Dragging { last: y };
        self.on_gesture_delta(delta_y);
    }

    fn drag_end(&mut self) {
        self.drag = DragState::Idle;
        self.cursor = Cursor::Grab;
    }
}

impl ScrollInput for InfiniteScroll {
    fn on_frame(&mut self) {
        if self.listeners.frame.is_none() {
            return;
        }
        if !self.paused {
            let delta = self
                .props
                .autoplay_direction
                .delta(self.props.autoplay_speed);
            self.update_position(delta);
        }
        let next = self.request_frame();
        tracing::trace!(frame = next.0, offset = self.offset.y(), "frame");
        self.listeners.frame = Some(next);
    }

    fn on_gesture_delta(&mut self, delta: f64) {
        if !self.listeners.gestures {
            return;
        }
        tracing::trace!(delta, "gesture");
        self.update_position(delta);
    }

    fn on_hover_change(&mut self, hovered: bool) {
        if self.listeners.hover {
            self.paused = hovered;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::props::AutoplayDirection;

    fn items(n: usize) -> Vec<Item> {
        (0..n).map(|i| Item::new(format!("Item {}", i + 1))).collect()
    }

    fn mounted(props: ScrollProps) -> InfiniteScroll {
        let mut scroll = InfiniteScroll::new(props);
        scroll.mount(|_| 150.0);
        scroll
    }

    #[test]
    fn wheel_past_period_wraps() {
        let mut scroll = mounted(ScrollProps {
            items: items(10),
            ..ScrollProps::default()
        });
        assert_eq!(scroll.period(), 1495.0);

        // Raw wheel delta of -2000 becomes a position delta of +2000.
        scroll.wheel(-2000.0);
        assert_eq!(scroll.offset(), 505.0);
        assert_eq!(scroll.translate_y(), -505.0);
    }

    #[test]
    fn min_height_applies_to_short_items() {
        let mut scroll = InfiniteScroll::new(ScrollProps {
            items: items(4),
            negative_margin: "0".into(),
            item_min_height: 50.0,
            ..ScrollProps::default()
        });
        scroll.mount(|item| if item.content() == "Item 2" { 80.0 } else { 10.0 });
        assert_eq!(scroll.period(), 50.0 + 80.0 + 50.0 + 50.0);
    }

    #[test]
    fn hover_pauses_autoplay_only() {
        let mut scroll = mounted(ScrollProps {
            items: items(10),
            autoplay: true,
            autoplay_speed: 0.5,
            autoplay_direction: AutoplayDirection::Down,
            pause_on_hover: true,
            ..ScrollProps::default()
        });

        scroll.on_hover_change(true);
        for _ in 0..100 {
            scroll.on_frame();
        }
        assert_eq!(scroll.offset(), 0.0);

        // Gestures still move the content while paused.
        scroll.on_gesture_delta(20.0);
        assert_eq!(scroll.offset(), 20.0);

        scroll.on_hover_change(false);
        for _ in 0..100 {
            scroll.on_frame();
        }
        assert_eq!(scroll.offset(), 70.0);
    }

    #[test]
    fn hover_ignored_without_pause_on_hover() {
        let mut scroll = mounted(ScrollProps {
            items: items(3),
            autoplay: true,
            autoplay_direction: AutoplayDirection::Up,
            autoplay_speed: 1.0,
            ..ScrollProps::default()
        });
        assert!(!scroll.listeners().hover);

        scroll.on_hover_change(true);
        scroll.on_frame();
        assert!(!scroll.is_paused());
        assert_eq!(scroll.offset(), scroll.period() - 1.0);
    }

    #[test]
    fn frames_do_nothing_without_autoplay() {
        let mut scroll = mounted(ScrollProps {
            items: items(3),
            ..ScrollProps::default()
        });
        assert!(scroll.listeners().frame.is_none());
        scroll.on_frame();
        assert_eq!(scroll.offset(), 0.0);
    }

    #[test]
    fn each_frame_requests_the_next() {
        let mut scroll = mounted(ScrollProps {
            items: items(3),
            autoplay: true,
            ..ScrollProps::default()
        });
        let first = scroll.listeners().frame;
        scroll.on_frame();
        let second = scroll.listeners().frame;
        assert!(first.is_some() && second.is_some());
        assert_ne!(first, second);
    }

    #[test]
    fn empty_list_never_mounts() {
        let mut scroll = InfiniteScroll::new(ScrollProps {
            autoplay: true,
            pause_on_hover: true,
            ..ScrollProps::default()
        });
        scroll.mount(|_| 150.0);

        assert!(!scroll.is_mounted());
        assert!(scroll.strip().is_empty());
        assert!(!scroll.listeners().any());

        scroll.wheel(100.0);
        scroll.on_frame();
        scroll.pointer_down(0.0);
        scroll.pointer_move(200.0);
        assert_eq!(scroll.offset(), 0.0);
        assert_eq!(scroll.cursor(), Cursor::Grab);
    }

    #[test]
    fn teardown_removes_only_clones() {
        let mut scroll = mounted(ScrollProps {
            items: items(10),
            autoplay: true,
            pause_on_hover: true,
            ..ScrollProps::default()
        });
        assert_eq!(scroll.strip().len(), 20);
        assert!(scroll.listeners().frame.is_some());

        scroll.teardown();
        assert_eq!(scroll.strip().len(), 10);
        let logical: Vec<usize> = scroll.strip().slots().iter().map(|s| s.item).collect();
        assert_eq!(logical, (0..10).collect::<Vec<_>>());
        assert!(!scroll.listeners().any());

        // A second teardown is harmless.
        scroll.teardown();
        assert_eq!(scroll.strip().len(), 10);
    }

    #[test]
    fn remount_does_not_stack_clones() {
        let mut scroll = mounted(ScrollProps {
            items: items(5),
            ..ScrollProps::default()
        });
        scroll.wheel(-40.0);
        scroll.mount(|_| 150.0);
        assert_eq!(scroll.strip().len(), 10);
        assert_eq!(scroll.offset(), 0.0);
    }

    #[test]
    fn drag_follows_pointer() {
        let mut scroll = mounted(ScrollProps {
            items: items(10),
            ..ScrollProps::default()
        });

        scroll.pointer_down(300.0);
        assert!(!scroll.is_dragging());
        assert_eq!(scroll.cursor(), Cursor::Grab);

        // Within tolerance: still just a press.
        scroll.pointer_move(305.0);
        assert!(!scroll.is_dragging());
        assert_eq!(scroll.offset(), 0.0);

        // Crossing tolerance starts the drag from the press point.
        scroll.pointer_move(270.0);
        assert!(scroll.is_dragging());
        assert_eq!(scroll.cursor(), Cursor::Grabbing);
        assert_eq!(scroll.offset(), 30.0);

        scroll.pointer_move(280.0);
        assert_eq!(scroll.offset(), 20.0);

        scroll.pointer_up();
        assert!(!scroll.is_dragging());
        assert_eq!(scroll.cursor(), Cursor::Grab);

        // Moves after release are ignored.
        scroll.pointer_move(500.0);
        assert_eq!(scroll.offset(), 20.0);
    }

    #[test]
    fn drag_there_and_back_restores_offset() {
        let mut scroll = mounted(ScrollProps {
            items: items(10),
            ..ScrollProps::default()
        });
        scroll.wheel(-700.0);
        let start = scroll.offset();

        scroll.pointer_down(0.0);
        scroll.pointer_move(900.0);
        scroll.pointer_move(0.0);
        scroll.pointer_up();
        assert_eq!(scroll.offset(), start);
    }

    #[test]
    fn autoplay_and_drag_are_additive() {
        let mut scroll = mounted(ScrollProps {
            items: items(10),
            autoplay: true,
            autoplay_speed: 1.0,
            ..ScrollProps::default()
        });
        scroll.pointer_down(100.0);
        scroll.pointer_move(50.0);
        scroll.on_frame();
        assert_eq!(scroll.offset(), 51.0);
    }

    #[test]
    fn dragging_down_moves_content_down() {
        let mut scroll = mounted(ScrollProps {
            items: items(10),
            ..ScrollProps::default()
        });
        scroll.wheel(-500.0);
        let before = scroll.translate_y();
        assert_eq!(before, -500.0);

        scroll.pointer_down(100.0);
        scroll.pointer_move(160.0);
        assert!(scroll.translate_y() > before);
        assert_eq!(scroll.offset(), 440.0);
    }

    #[test]
    fn infinite_delta_leaves_offset_alone() {
        let mut scroll = mounted(ScrollProps {
            items: items(10),
            ..ScrollProps::default()
        });
        scroll.wheel(-200.0);
        scroll.wheel(f64::INFINITY);
        scroll.wheel(f64::NEG_INFINITY);
        scroll.on_gesture_delta(f64::NAN);
        assert_eq!(scroll.offset(), 200.0);

        scroll.wheel(-10.0);
        assert_eq!(scroll.offset(), 210.0);
    }

    #[test]
    fn cosmetic_props_keep_offset() {
        let props = ScrollProps {
            items: items(10),
            ..ScrollProps::default()
        };
        let mut scroll = mounted(props.clone());
        scroll.wheel(-100.0);

        scroll.set_props(
            ScrollProps {
                is_tilted: true,
                width: 50,
                ..props.clone()
            },
            |_| 150.0,
        );
        assert_eq!(scroll.offset(), 100.0);
        assert!(scroll.props().is_tilted);
        assert_eq!(scroll.strip().len(), 20);
    }

    #[test]
    fn dependency_props_remount() {
        let props = ScrollProps {
            items: items(10),
            ..ScrollProps::default()
        };
        let mut scroll = mounted(props.clone());
        scroll.wheel(-100.0);

        scroll.set_props(
            ScrollProps {
                items: items(4),
                autoplay: true,
                ..props
            },
            |_| 150.0,
        );
        assert!(scroll.is_mounted());
        assert_eq!(scroll.offset(), 0.0);
        assert_eq!(scroll.strip().len(), 8);
        assert_eq!(scroll.period(), 600.0 - 2.0);
        assert!(scroll.listeners().frame.is_some());
    }

    #[test]
    fn items_arriving_later_mount() {
        let mut scroll = InfiniteScroll::new(ScrollProps::default());
        scroll.mount(|_| 150.0);
        assert!(!scroll.is_mounted());

        scroll.set_props(
            ScrollProps {
                items: items(2),
                ..ScrollProps::default()
            },
            |_| 150.0,
        );
        assert!(scroll.is_mounted());
        assert_eq!(scroll.strip().len(), 4);
    }

    #[test]
    fn zero_height_items_skip_updates() {
        let mut scroll = InfiniteScroll::new(ScrollProps {
            items: items(2),
            negative_margin: "0".into(),
            item_min_height: 0.0,
            ..ScrollProps::default()
        });
        scroll.mount(|_| 0.0);
        assert!(scroll.is_mounted());
        assert_eq!(scroll.period(), 0.0);
        scroll.wheel(-10.0);
        assert_eq!(scroll.offset(), 0.0);
    }
}
