use super::status_reporter::Alert;
use crate::alert;
use std::collections::VecDeque;

/// Bounded history of raised alerts, oldest first.
#[derive(Debug)]
pub struct AlertLog {
    entries: VecDeque<Alert>,
    capacity: usize,
}

impl AlertLog {
    pub fn new(capacity: usize) -> Self {
        Self { entries: VecDeque::with_capacity(capacity), capacity }
    }

    /// Prints the alert and appends it, evicting the oldest entry when full.
    pub fn record(&mut self, entry: &Alert) {
        alert!("{} ({})", entry.message(), entry.kind());
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry.clone());
    }

    pub fn recent(&self) -> Vec<Alert> { self.entries.iter().cloned().collect() }
}
