//! Screen-region registry used to map pointer positions back to panes
//!
//! The registry is owned by the panel and refreshed whenever the layout
//! changes. Nothing about it is global.

use ratatui::layout::{Position, Rect};
use rustc_hash::FxHashMap;

#[derive(Debug, Default, Clone)]
pub struct ZoneRegistry {
    zones: FxHashMap<usize, Rect>,
}

impl ZoneRegistry {
    pub fn new() -> Self {
        ZoneRegistry {
            zones: FxHashMap::default(),
        }
    }

    pub fn clear(&mut self) {
        self.zones.clear();
    }

    /// Record the area occupied by zone `id`, replacing any previous entry
    pub fn mark(&mut self, id: usize, area: Rect) {
        self.zones.insert(id, area);
    }

    pub fn get(&self, id: usize) -> Option<Rect> {
        self.zones.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Zone containing the cell at (`column`, `row`), if any
    pub fn hit(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.zones
            .iter()
            .filter(|(_, area)| area.contains(pos))
            .map(|(id, _)| *id)
            .min()
    }
}
