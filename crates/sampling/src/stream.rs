use shared::protocol::{BatchPayload, StreamFrame, StreamTotals};
use tracing::debug;

use crate::{PointSampler, StreamSession};

enum Phase {
    Start,
    Batches,
    End,
    Done,
}

/// Lazy frame source for one stream: exactly one `start` frame, then
/// `batch` frames until the session total is reached, then one `end`.
///
/// Points for a batch are drawn only when that batch is pulled, so
/// dropping the iterator mid-stream (client disconnect) stops generation.
pub struct FrameStream {
    sampler: PointSampler,
    session: StreamSession,
    phase: Phase,
}

impl FrameStream {
    pub fn new(session: StreamSession, sampler: PointSampler) -> Self {
        Self {
            sampler,
            session,
            phase: Phase::Start,
        }
    }

    /// Cumulative points emitted so far; equals the requested total once
    /// the stream is drained.
    pub fn points_sent(&self) -> u64 {
        self.session.points_sent()
    }
}

impl Iterator for FrameStream {
    type Item = StreamFrame;

    fn next(&mut self) -> Option<StreamFrame> {
        match self.phase {
            Phase::Start => {
                self.phase = if self.session.is_complete() {
                    Phase::End
                } else {
                    Phase::Batches
                };
                Some(StreamFrame::Start(StreamTotals {
                    total_points: self.session.total_points(),
                }))
            }
            Phase::Batches => match self.session.next_batch_size() {
                Some(size) => {
                    let points = self.sampler.sample_batch(size);
                    self.session.record_sent(points.len());
                    if self.session.is_complete() {
                        self.phase = Phase::End;
                    }
                    debug!(
                        points_sent = self.session.points_sent(),
                        total_points = self.session.total_points(),
                        "emitting batch frame"
                    );
                    Some(StreamFrame::Batch(BatchPayload {
                        points,
                        points_sent: self.session.points_sent(),
                    }))
                }
                None => {
                    self.phase = Phase::End;
                    self.next()
                }
            },
            Phase::End => {
                self.phase = Phase::Done;
                Some(StreamFrame::End(StreamTotals {
                    total_points: self.session.points_sent(),
                }))
            }
            Phase::Done => None,
        }
    }
}
