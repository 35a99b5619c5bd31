use super::projects::{Project, ProjectTable};

/// Open/closed state of one toggled menu class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// State as read back from the markup, e.g. whether the class is present.
    #[inline]
    pub fn from_open(open: bool) -> Self {
        Self { open }
    }

    /// Flip the state; returns whether the menu is now open.
    #[inline]
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Which part of the modal overlay a click landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalClick {
    Backdrop,
    Content,
    CloseControl,
}

impl ModalClick {
    #[inline]
    pub fn dismisses(self) -> bool {
        matches!(self, ModalClick::Backdrop | ModalClick::CloseControl)
    }
}

/// Tracks which project (if any) the modal is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    current: Option<String>,
}

impl ModalState {
    /// Show `id` if the table knows it. Unknown ids leave the state untouched.
    pub fn open<'a>(&mut self, table: &'a ProjectTable, id: &str) -> Option<&'a Project> {
        let project = table.get(id)?;
        self.current = Some(id.to_string());
        Some(project)
    }

    /// Returns whether the modal was open before the call.
    pub fn close(&mut self) -> bool {
        self.current.take().is_some()
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    #[inline]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

/// Element id referenced by an in-page anchor, e.g. `#about` -> `about`.
pub fn fragment_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

/// One-shot reveal bookkeeping for the observed fade-in elements.
#[derive(Clone, Debug, Default)]
pub struct FadeTracker {
    shown: Vec<bool>,
}

impl FadeTracker {
    pub fn new(count: usize) -> Self {
        Self {
            shown: vec![false; count],
        }
    }

    /// Feed one intersection entry; true only on the element's first reveal.
    pub fn observe(&mut self, index: usize, is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
        let Some(shown) = self.shown.get_mut(index) else {
            return false;
        };
        if *shown || !is_intersecting || ratio < threshold {
            return false;
        }
        *shown = true;
        true
    }

    #[inline]
    pub fn is_shown(&self, index: usize) -> bool {
        self.shown.get(index).copied().unwrap_or(false)
    }

    pub fn remaining(&self) -> usize {
        self.shown.iter().filter(|s| !**s).count()
    }
}
