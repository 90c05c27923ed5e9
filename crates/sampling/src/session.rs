/// Progress state for one point stream.
///
/// `points_sent` only moves forward and never exceeds `total_points`;
/// once the two are equal the session is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSession {
    total_points: u64,
    points_sent: u64,
    max_batch_size: usize,
}

impl StreamSession {
    /// `max_batch_size` bounds every batch and must be non-zero.
    pub fn new(total_points: u64, max_batch_size: usize) -> Self {
        debug_assert!(max_batch_size > 0);
        Self {
            total_points,
            points_sent: 0,
            max_batch_size,
        }
    }

    pub fn total_points(&self) -> u64 {
        self.total_points
    }

    pub fn points_sent(&self) -> u64 {
        self.points_sent
    }

    pub fn remaining(&self) -> u64 {
        self.total_points - self.points_sent
    }

    pub fn is_complete(&self) -> bool {
        self.points_sent == self.total_points
    }

    /// Size of the next batch: the configured maximum or whatever is
    /// left, whichever is smaller. `None` once the session is complete.
    pub fn next_batch_size(&self) -> Option<usize> {
        if self.is_complete() {
            return None;
        }
        Some((self.max_batch_size as u64).min(self.remaining()) as usize)
    }

    /// Advances the cumulative count after a batch has been emitted.
    pub fn record_sent(&mut self, count: usize) {
        let count = count as u64;
        debug_assert!(count <= self.remaining());
        self.points_sent += count;
    }

    /// Number of batches a fully drained session emits.
    pub fn batch_count(&self) -> u64 {
        self.total_points.div_ceil(self.max_batch_size as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(mut session: StreamSession) -> Vec<usize> {
        let mut sizes = Vec::new();
        while let Some(size) = session.next_batch_size() {
            session.record_sent(size);
            sizes.push(size);
        }
        assert!(session.is_complete());
        sizes
    }

    #[test]
    fn small_request_fits_in_a_single_batch() {
        let session = StreamSession::new(50, 10000);
        assert_eq!(session.batch_count(), 1);
        assert_eq!(drain(session), vec![50]);
    }

    #[test]
    fn exact_multiple_has_no_trailing_partial_batch() {
        let session = StreamSession::new(30000, 10000);
        assert_eq!(session.batch_count(), 3);
        assert_eq!(drain(session), vec![10000, 10000, 10000]);
    }

    #[test]
    fn remainder_becomes_a_final_short_batch() {
        let session = StreamSession::new(1000001, 10000);
        assert_eq!(session.batch_count(), 101);

        let sizes = drain(session);
        assert_eq!(sizes.len(), 101);
        assert!(sizes[..100].iter().all(|&size| size == 10000));
        assert_eq!(sizes[100], 1);
        assert_eq!(sizes.iter().map(|&size| size as u64).sum::<u64>(), 1000001);
    }

    #[test]
    fn no_batch_is_empty_or_oversized() {
        let session = StreamSession::new(25, 10);
        for size in drain(session) {
            assert!(size > 0);
            assert!(size <= 10);
        }
    }

    #[test]
    fn points_sent_is_monotone_and_capped() {
        let mut session = StreamSession::new(25, 10);
        let mut previous = 0;
        while let Some(size) = session.next_batch_size() {
            session.record_sent(size);
            assert!(session.points_sent() > previous);
            assert!(session.points_sent() <= session.total_points());
            previous = session.points_sent();
        }
        assert_eq!(session.points_sent(), 25);
    }
}
