

/// Dropdown state of the search bar. Movement is clamped; there is no
/// wraparound in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Closed,
    Open { selected: Option<usize> },
}

impl SelectionState {

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }


    pub fn selected(&self) -> Option<usize> {
        match self {
            Self::Open { selected } => *selected,
            Self::Closed => None,
        }
    }


    pub fn focus(&mut self) {
        if !self.is_open() {
            *self = Self::Open { selected: None };
        }
    }

    /// Open with nothing highlighted; used when the displayed list changes.
    pub fn reset(&mut self) {
        *self = Self::Open { selected: None };
    }


    pub fn close(&mut self) {
        *self = Self::Closed;
    }


    pub fn move_down(&mut self, len: usize) {
        let Self::Open { selected } = self else {
            return;
        };
        if len == 0 {
            *selected = None;
            return;
        }
        *selected = Some(match *selected {
            None => 0,
            Some(i) => (i + 1).min(len - 1),
        });
    }


    pub fn move_up(&mut self) {
        if let Self::Open { selected } = self {
            *selected = match *selected {
                None | Some(0) => None,
                Some(i) => Some(i - 1),
            };
        }
    }
}
