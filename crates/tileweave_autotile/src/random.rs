//! Weighted random selection

use rand::Rng;

/// Picks entries at random with probability proportional to their weight.
///
/// [`pick`](Self::pick) samples with replacement; [`take`](Self::take)
/// removes the sampled entry, so repeated calls draw without replacement
/// until the picker is exhausted. The caller supplies (and seeds) the random
/// source.
#[derive(Debug, Clone)]
pub struct RandomPicker<T> {
    entries: Vec<(f32, T)>,
    total_weight: f32,
}

impl<T> Default for RandomPicker<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            total_weight: 0.0,
        }
    }
}

impl<T> RandomPicker<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries with a non-positive weight can never be selected and are not
    /// added.
    pub fn add(&mut self, weight: f32, value: T) {
        if weight > 0.0 {
            self.total_weight += weight;
            self.entries.push((weight, value));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.total_weight = 0.0;
    }

    fn sample_index(&self, rng: &mut impl Rng) -> Option<usize> {
        if self.entries.is_empty() || self.total_weight <= 0.0 {
            return None;
        }

        let mut remaining = rng.gen_range(0.0..self.total_weight);
        for (idx, (weight, _)) in self.entries.iter().enumerate() {
            if remaining < *weight {
                return Some(idx);
            }
            remaining -= weight;
        }

        // Accumulated rounding can leave a sliver past the last entry.
        Some(self.entries.len() - 1)
    }

    /// Weighted random sample, leaving the picker unchanged.
    pub fn pick(&self, rng: &mut impl Rng) -> Option<&T> {
        self.sample_index(rng).map(|idx| &self.entries[idx].1)
    }

    /// Weighted random sample, removing the selected entry.
    pub fn take(&mut self, rng: &mut impl Rng) -> Option<T> {
        let idx = self.sample_index(rng)?;
        let (_, value) = self.entries.swap_remove(idx);
        // Recompute rather than subtract, so float drift cannot accumulate
        // across many removals.
        self.total_weight = self.entries.iter().map(|(w, _)| *w).sum();
        Some(value)
    }
}
