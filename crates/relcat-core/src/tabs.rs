//! One-of-N panel switching for the download page.
//!
//! The controller owns only the active index. The container (headers and
//! panels) is passed into every call, so the same controller logic drives a
//! DOM adapter, a terminal UI, or the in-memory [`TabStrip`].

use thiserror::Error;
use tracing::trace;

/// Errors from [`TabController`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TabError {
    /// Header and content groups differ in length.
    #[error("tab container has {headers} headers but {panels} panels")]
    Mismatch {
        /// Number of headers
        headers: usize,
        /// Number of content panels
        panels: usize,
    },

    /// Selected index is past the end.
    #[error("tab index {index} out of range (0..{len})")]
    OutOfRange {
        /// Requested index
        index: usize,
        /// Number of tabs
        len: usize,
    },
}

/// Headers and content panels of a tabbed container, matched 1:1 by index.
pub trait TabContainer {
    /// Number of header items.
    fn header_count(&self) -> usize;

    /// Number of content panels.
    fn panel_count(&self) -> usize;

    /// Whether header `index` carries the default marker.
    fn is_default(&self, index: usize) -> bool;

    /// Show or hide content panel `index`.
    fn set_panel_visible(&mut self, index: usize, visible: bool);

    /// Emphasize or reset header `index`.
    fn set_header_active(&mut self, index: usize, active: bool);
}

/// Tracks which panel of a [`TabContainer`] is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabController {
    len: usize,
    active: Option<usize>,
}

impl TabController {
    /// Create a controller for `container`. Nothing is selected until
    /// [`init`](Self::init) runs.
    ///
    /// # Errors
    ///
    /// Returns [`TabError::Mismatch`] if header and panel counts differ.
    pub fn new<C: TabContainer + ?Sized>(container: &C) -> Result<Self, TabError> {
        let headers = container.header_count();
        let panels = container.panel_count();
        if headers != panels {
            return Err(TabError::Mismatch { headers, panels });
        }
        Ok(Self {
            len: headers,
            active: None,
        })
    }

    /// Active index, `None` before the first selection.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Number of tabs.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the container has no tabs.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Select the first default-marked header, or the first tab.
    /// Every other panel is hidden and every other header reset, whatever
    /// state the container started in. An empty container leaves nothing
    /// selected.
    pub fn init<C: TabContainer + ?Sized>(&mut self, container: &mut C) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        for i in 0..self.len {
            container.set_panel_visible(i, false);
            container.set_header_active(i, false);
        }
        self.active = None;
        let initial = (0..self.len)
            .find(|&i| container.is_default(i))
            .unwrap_or(0);
        self.apply(container, initial);
        Some(initial)
    }

    /// Show panel `index` and hide the previously active one.
    ///
    /// Returns `true` if the active tab changed. Selecting the active tab
    /// again reapplies the same state and returns `false`.
    ///
    /// # Errors
    ///
    /// Returns [`TabError::OutOfRange`] if `index` is past the end.
    pub fn select<C: TabContainer + ?Sized>(
        &mut self,
        container: &mut C,
        index: usize,
    ) -> Result<bool, TabError> {
        if index >= self.len {
            return Err(TabError::OutOfRange {
                index,
                len: self.len,
            });
        }
        let changed = self.active != Some(index);
        self.apply(container, index);
        Ok(changed)
    }

    /// Header `index` was clicked.
    ///
    /// # Errors
    ///
    /// Same as [`select`](Self::select).
    pub fn click<C: TabContainer + ?Sized>(
        &mut self,
        container: &mut C,
        index: usize,
    ) -> Result<bool, TabError> {
        trace!(index, "tab header clicked");
        self.select(container, index)
    }

    fn apply<C: TabContainer + ?Sized>(&mut self, container: &mut C, index: usize) {
        if let Some(previous) = self.active {
            container.set_panel_visible(previous, false);
            container.set_header_active(previous, false);
        }
        container.set_panel_visible(index, true);
        container.set_header_active(index, true);
        self.active = Some(index);
    }
}

/// A tab header as held by [`TabStrip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabHeader {
    /// Header text
    pub label: String,
    /// Default marker
    pub default: bool,
    /// Emphasized
    pub active: bool,
}

/// In-memory [`TabContainer`]: a row of headers over a stack of panels.
///
/// Panels start hidden, as on a page before the controller initializes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabStrip {
    headers: Vec<TabHeader>,
    panels: Vec<bool>,
}

impl TabStrip {
    /// One header and one hidden panel per label.
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        let headers: Vec<TabHeader> = labels
            .into_iter()
            .map(|label| TabHeader {
                label: label.into(),
                default: false,
                active: false,
            })
            .collect();
        let panels = vec![false; headers.len()];
        Self { headers, panels }
    }

    /// Mark header `index` as the default. Out-of-range indices are ignored.
    pub fn with_default(mut self, index: usize) -> Self {
        if let Some(header) = self.headers.get_mut(index) {
            header.default = true;
        }
        self
    }

    /// Headers in order.
    pub fn headers(&self) -> &[TabHeader] {
        &self.headers
    }

    /// Indices of visible panels.
    pub fn visible_panels(&self) -> Vec<usize> {
        self.panels
            .iter()
            .enumerate()
            .filter_map(|(i, visible)| visible.then_some(i))
            .collect()
    }

    /// Indices of emphasized headers.
    pub fn active_headers(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .filter_map(|(i, h)| h.active.then_some(i))
            .collect()
    }
}

impl TabContainer for TabStrip {
    fn header_count(&self) -> usize {
        self.headers.len()
    }

    fn panel_count(&self) -> usize {
        self.panels.len()
    }

    fn is_default(&self, index: usize) -> bool {
        self.headers.get(index).is_some_and(|h| h.default)
    }

    fn set_panel_visible(&mut self, index: usize, visible: bool) {
        if let Some(panel) = self.panels.get_mut(index) {
            *panel = visible;
        }
    }

    fn set_header_active(&mut self, index: usize, active: bool) {
        if let Some(header) = self.headers.get_mut(index) {
            header.active = active;
        }
    }
}
