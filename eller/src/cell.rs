use std::fmt;

use crate::{algorithms::GeneratorError, dims::Dims};

/// Identifier of a connectivity set.
///
/// Two cells in the same row are connected (no wall proven between them yet) iff they share
/// a set id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SetId(pub u32);

impl fmt::Display for SetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues fresh set ids for a single generation run.
///
/// Ids are never reused within the run. A new counter starts at 0, so two runs with the same
/// seed issue the same ids.
#[derive(Debug, Clone, Default)]
pub struct SetIdCounter {
    next: u32,
}

impl SetIdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Result<SetId, GeneratorError> {
        let id = SetId(self.next);
        self.next = self
            .next
            .checked_add(1)
            .ok_or(GeneratorError::SetIdOverflow)?;
        Ok(id)
    }

    /// Number of ids issued so far.
    pub fn issued(&self) -> u32 {
        self.next
    }

    /// Every id issued so far is strictly lower than this one.
    pub fn peek(&self) -> SetId {
        SetId(self.next)
    }
}

/// State of a single cell of the row that's currently being processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeCell {
    coord: Dims,
    set: SetId,
    bottom_wall: bool,
}

impl MazeCell {
    pub fn new(coord: Dims, set: SetId) -> Self {
        Self {
            coord,
            set,
            bottom_wall: false,
        }
    }

    pub fn coord(&self) -> Dims {
        self.coord
    }

    pub fn set(&self) -> SetId {
        self.set
    }

    pub fn has_bottom_wall(&self) -> bool {
        self.bottom_wall
    }

    pub(crate) fn set_coord(&mut self, coord: Dims) {
        self.coord = coord;
    }

    pub(crate) fn join(&mut self, set: SetId) {
        self.set = set;
    }

    pub(crate) fn set_bottom_wall(&mut self, value: bool) {
        self.bottom_wall = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_issues_increasing_ids() {
        let mut counter = SetIdCounter::new();
        assert_eq!(counter.issue().unwrap(), SetId(0));
        assert_eq!(counter.issue().unwrap(), SetId(1));
        assert_eq!(counter.issued(), 2);
        assert_eq!(counter.peek(), SetId(2));
    }

    #[test]
    fn counter_overflow_is_an_error() {
        let mut counter = SetIdCounter { next: u32::MAX };
        assert!(matches!(
            counter.issue(),
            Err(GeneratorError::SetIdOverflow)
        ));
    }
}
