use std::collections::BTreeMap;

/// Number of accepted disks per number of rejected tries before acceptance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttemptHistogram {
    counts: BTreeMap<usize, usize>,
}

impl AttemptHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a disk which was accepted after `n_rejections` rejected tries.
    pub fn record(&mut self, n_rejections: usize) {
        *self.counts.entry(n_rejections).or_insert(0) += 1;
    }

    /// Number of disks accepted after exactly `n_rejections` rejected tries
    pub fn count(&self, n_rejections: usize) -> usize {
        self.counts.get(&n_rejections).copied().unwrap_or(0)
    }

    /// `(n_rejections, count)` pairs, sorted by `n_rejections`
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().map(|(&a, &c)| (a, c))
    }

    /// Total number of recorded disks
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_grouped_and_sorted() {
        let mut hist = AttemptHistogram::new();
        for a in [3, 0, 0, 7, 3, 0] {
            hist.record(a);
        }
        assert_eq!(hist.iter().collect::<Vec<_>>(), vec![(0, 3), (3, 2), (7, 1)]);
        assert_eq!(hist.count(3), 2);
        assert_eq!(hist.count(5), 0);
        assert_eq!(hist.total(), 6);
    }
}
