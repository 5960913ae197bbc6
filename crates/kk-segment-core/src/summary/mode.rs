//! Frequency counting with first-encountered tie-breaking.

use std::collections::HashMap;

/// Counts values in encounter order.
///
/// The mode is the most frequent value; among equally frequent values the
/// one seen first wins.
#[derive(Debug, Clone, Default)]
pub struct ModeCounter {
    counts: Vec<(String, usize)>,
    /// Position of each value in `counts`.
    index: HashMap<String, usize>,
}

impl ModeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a value. Absent and empty values are ignored.
    pub fn observe(&mut self, value: Option<&str>) {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            return;
        };
        match self.index.get(value) {
            Some(&pos) => self.counts[pos].1 += 1,
            None => {
                self.index.insert(value.to_string(), self.counts.len());
                self.counts.push((value.to_string(), 1));
            }
        }
    }

    pub fn mode(&self) -> Option<&str> {
        let mut best: Option<&(String, usize)> = None;
        for entry in &self.counts {
            if best.map_or(true, |b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(value, _)| value.as_str())
    }

    /// (value, count) pairs in encounter order.
    pub fn entries(&self) -> &[(String, usize)] {
        &self.counts
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<'a> FromIterator<Option<&'a str>> for ModeCounter {
    fn from_iter<I: IntoIterator<Item = Option<&'a str>>>(iter: I) -> Self {
        let mut counter = ModeCounter::new();
        for value in iter {
            counter.observe(value);
        }
        counter
    }
}
