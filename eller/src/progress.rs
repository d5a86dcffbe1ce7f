use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared view of a generation run, counted in rows.
///
/// Cloning the handle shares the same state, so a consumer can keep a clone and poll
/// [`ProgressHandle::is_done`] before it starts placing anything into the maze.
#[derive(Clone, Debug, Default)]
pub struct ProgressHandle {
    progress: Arc<Mutex<Progress>>,
}

impl ProgressHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self) -> MutexGuard<Progress> {
        self.progress.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn progress(&self) -> Progress {
        *self.lock()
    }

    pub fn is_done(&self) -> bool {
        self.lock().is_done
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub done: usize,
    pub from: usize,
    pub is_done: bool,
}

impl Progress {
    pub fn new(done: usize, from: usize) -> Self {
        Self {
            done,
            from,
            is_done: false,
        }
    }

    pub fn new_empty() -> Self {
        Self::new(0, 0)
    }

    pub fn percent(&self) -> f32 {
        if self.from == 0 {
            return if self.is_done { 1.0 } else { 0.0 };
        }
        self.done as f32 / self.from as f32
    }

    pub fn restart(&mut self, from: usize) {
        *self = Self::new(0, from);
    }

    pub fn finish(&mut self) {
        self.done = self.from;
        self.is_done = true;
    }
}
