//! Single-focus navigation between the sidebar and the content grid.

use serde::Serialize;
use zenith_types::input::Button;

/// Which UI region holds input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FocusRegion {
    Sidebar,
    Grid,
}

/// Result of feeding one button to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusOutcome {
    /// Button means nothing in the current region.
    Ignored,
    /// A directional press was handled (even if clamped to a no-op).
    Navigated,
    /// Confirm on the grid item at this index.
    Activate(usize),
    /// Cancel returned focus to the sidebar.
    Back,
}

/// Focus state: region, selected category, and grid index.
#[derive(Debug, Clone)]
pub struct FocusController {
    region: FocusRegion,
    category: usize,
    index: usize,
    cols: usize,
    category_count: usize,
}

impl FocusController {
    /// Start on the sidebar at the first category.
    pub fn new(cols: usize, category_count: usize) -> Self {
        Self {
            region: FocusRegion::Sidebar,
            category: 0,
            index: 0,
            cols: cols.max(1),
            category_count: category_count.max(1),
        }
    }

    pub fn region(&self) -> FocusRegion {
        self.region
    }

    pub fn category(&self) -> usize {
        self.category
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Route a button given the number of items in the active grid.
    pub fn handle_input(&mut self, button: &Button, count: usize) -> FocusOutcome {
        match self.region {
            FocusRegion::Sidebar => self.sidebar_input(button),
            FocusRegion::Grid => self.grid_input(button, count),
        }
    }

    fn sidebar_input(&mut self, button: &Button) -> FocusOutcome {
        match button {
            Button::Up => {
                if self.category > 0 {
                    self.category -= 1;
                    self.index = 0;
                }
                FocusOutcome::Navigated
            },
            Button::Down => {
                if self.category + 1 < self.category_count {
                    self.category += 1;
                    self.index = 0;
                }
                FocusOutcome::Navigated
            },
            Button::Right | Button::Confirm => {
                self.region = FocusRegion::Grid;
                self.index = 0;
                FocusOutcome::Navigated
            },
            Button::Cancel => FocusOutcome::Back,
            _ => FocusOutcome::Ignored,
        }
    }

    fn grid_input(&mut self, button: &Button, count: usize) -> FocusOutcome {
        let cols = self.cols;
        match button {
            Button::Left => {
                if self.index % cols == 0 {
                    self.region = FocusRegion::Sidebar;
                } else {
                    self.index -= 1;
                }
                FocusOutcome::Navigated
            },
            Button::Right => {
                if self.index + 1 < count {
                    self.index += 1;
                }
                FocusOutcome::Navigated
            },
            Button::Up => {
                if self.index >= cols {
                    self.index -= cols;
                }
                FocusOutcome::Navigated
            },
            Button::Down => {
                if self.index + cols < count {
                    self.index += cols;
                }
                FocusOutcome::Navigated
            },
            Button::Confirm => {
                if self.index < count {
                    FocusOutcome::Activate(self.index)
                } else {
                    FocusOutcome::Ignored
                }
            },
            Button::Cancel => {
                self.region = FocusRegion::Sidebar;
                FocusOutcome::Back
            },
            _ => FocusOutcome::Ignored,
        }
    }

    /// Select a category directly: grid focus at index 0.
    pub fn select_category(&mut self, category: usize) {
        self.category = category.min(self.category_count - 1);
        self.region = FocusRegion::Grid;
        self.index = 0;
    }

    /// Pointer hover over grid tile `index`.
    ///
    /// Out-of-range targets are ignored. Returns `true` when the focused
    /// index changed.
    pub fn hover(&mut self, index: usize, count: usize) -> bool {
        if index >= count {
            return false;
        }
        let changed = self.index != index;
        self.region = FocusRegion::Grid;
        self.index = index;
        changed
    }
}
