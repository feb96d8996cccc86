//! Split an inclusive integer range into consecutive fixed-size sub-ranges.

/// Divide `[range_start, range_end]` into consecutive sub-ranges of
/// `chunk_size` values each, the last one clipped to `range_end`.
///
/// The returned iterator is lazy and restartable (clone it to iterate
/// again). An empty range (`range_end < range_start`) yields nothing.
///
/// # Panics
///
/// Panics when `chunk_size` is zero.
///
/// # Examples
///
/// ```rust
/// use primepool::chunker::chunks;
///
/// let parts: Vec<_> = chunks(2, 30, 10).collect();
/// assert_eq!(parts, [(2, 11), (12, 21), (22, 30)]);
/// ```
pub fn chunks(range_start: u64, range_end: u64, chunk_size: u64) -> Chunks {
    assert!(chunk_size >= 1, "chunk size must be at least 1");
    Chunks {
        next: range_start,
        end: range_end,
        step: chunk_size,
    }
}

/// Iterator over `(start, end)` sub-ranges, created by [`chunks`].
#[derive(Clone, Debug)]
pub struct Chunks {
    next: u64,
    end: u64,
    step: u64,
}

impl Iterator for Chunks {
    type Item = (u64, u64);

    fn next(&mut self) -> Option<(u64, u64)> {
        if self.next > self.end {
            return None;
        }
        let start = self.next;
        let end = start.saturating_add(self.step - 1).min(self.end);
        if end == u64::MAX {
            // cannot represent end + 1; mark the iterator exhausted
            self.next = u64::MAX;
            self.end = 0;
        } else {
            self.next = end + 1;
        }
        Some((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::chunks;
    use rand::{thread_rng, Rng};

    #[test]
    fn empty_range_yields_nothing() {
        assert_eq!(chunks(10, 9, 5).count(), 0);
    }

    #[test]
    fn single_chunk_covers_whole_range() {
        let parts: Vec<_> = chunks(2, 10, 10).collect();
        assert_eq!(parts, [(2, 10)]);
    }

    #[test]
    fn last_chunk_is_clipped() {
        let parts: Vec<_> = chunks(2, 30, 10).collect();
        assert_eq!(parts, [(2, 11), (12, 21), (22, 30)]);
    }

    #[test]
    fn iterator_is_restartable() {
        let first = chunks(0, 99, 7);
        let second = first.clone();
        assert_eq!(first.collect::<Vec<_>>(), second.collect::<Vec<_>>());
    }

    #[test]
    fn random_ranges_are_covered_without_gaps() {
        let mut rng = thread_rng();
        for _ in 0..100 {
            let start = rng.gen_range(0..1000u64);
            let end = start + rng.gen_range(0..1000u64);
            let step = rng.gen_range(1..50u64);

            let mut expected_start = start;
            for (s, e) in chunks(start, end, step) {
                assert_eq!(s, expected_start);
                assert!(e >= s && e <= end);
                if e != end {
                    assert_eq!(e - s + 1, step);
                }
                expected_start = e + 1;
            }
            assert_eq!(expected_start, end + 1);
        }
    }

    #[test]
    fn range_ending_at_u64_max_terminates() {
        let parts: Vec<_> = chunks(u64::MAX - 5, u64::MAX, 4).collect();
        assert_eq!(
            parts,
            [(u64::MAX - 5, u64::MAX - 2), (u64::MAX - 1, u64::MAX)]
        );
    }

    #[test]
    #[should_panic(expected = "chunk size must be at least 1")]
    fn zero_chunk_size_is_rejected() {
        let _ = chunks(0, 10, 0);
    }
}
