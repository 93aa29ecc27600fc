//! The rendered strip: primaries followed by one clone of each.
//!
//! Instead of cloning display nodes, the strip is a flat buffer of slots that
//! point back at logical items by index.  Before mount it holds the `N`
//! primaries; mounting appends `N` clones so the content tiles without a
//! seam, and teardown drops exactly that back half again.

/// One rendered slot in the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    /// Index of the logical item this slot displays.
    pub item: usize,
    /// Measured height in units (`0` until measured).
    pub height: f64,
}

/// A slot positioned along the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedSlot {
    pub index: usize,
    pub slot: Slot,
    /// Distance from the top of the strip to the top of this slot.
    pub top: f64,
}

/// Ordered buffer of `N` primaries, optionally followed by `N` clones.
#[derive(Debug, Clone, Default)]
pub struct RenderedStrip {
    slots: Vec<Slot>,
}

impl RenderedStrip {
    /// One unmeasured primary per item.
    pub fn with_primaries(count: usize) -> Self {
        Self {
            slots: (0..count).map(|item| Slot { item, height: 0.0 }).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Record a measured height for every current slot.
    pub fn measure(&mut self, mut height_of: impl FnMut(usize) -> f64) {
        for slot in &mut self.slots {
            slot.height = height_of(slot.item);
        }
    }

    /// Summed height of the slots currently in the strip.
    pub fn total_height(&self) -> f64 {
        self.slots.iter().map(|s| s.height).sum()
    }

    /// Append one copy of every slot currently present.
    pub fn clone_all(&mut self) {
        self.slots.extend_from_within(..);
    }

    /// Remove the back half of the strip (the clones).  Returns how many
    /// slots were removed.
    pub fn remove_back_half(&mut self) -> usize {
        let half = self.slots.len() / 2;
        let removed = self.slots.len() - half;
        self.slots.truncate(half);
        removed
    }

    /// Walk the strip top to bottom with `spacing` added after each slot.
    pub fn layout(&self, spacing: f64) -> impl Iterator<Item = PlacedSlot> + '_ {
        self.slots
            .iter()
            .enumerate()
            .scan(0.0_f64, move |top, (index, &slot)| {
                let placed = PlacedSlot {
                    index,
                    slot,
                    top: *top,
                };
                *top += slot.height + spacing;
                Some(placed)
            })
    }
}
