use crate::measurement::Sample;
use crate::report::{Row, Sink};
use crate::tracker::{Tracker, Update};
use crate::ErrorBox;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct Summary {
    pub samples: usize,
    pub accepted: usize,
    pub rejected: usize,
}

/// Feeds measurements through a tracker, recording one row per measurement.
pub struct Pipeline {
    tracker: Tracker,
    lookahead: f64,
}

impl Pipeline {
    pub fn new(tracker: Tracker, lookahead: f64) -> Self {
        Self { tracker, lookahead }
    }

    pub fn run<I>(&mut self, samples: I, sink: &mut dyn Sink) -> Result<Summary, ErrorBox>
    where
        I: IntoIterator<Item = Result<Sample, ErrorBox>>,
    {
        let mut summary = Summary::default();

        for sample in samples {
            let (update, row) = self.step(sample?);

            summary.samples += 1;
            match update {
                Update::Rejected => summary.rejected += 1,
                Update::Initialized | Update::Corrected => summary.accepted += 1,
            }

            sink.record(&row)?;
        }

        if !self.tracker.is_initialized() {
            log::warn!("No measurements were read");
        }

        sink.finish()?;
        Ok(summary)
    }

    fn step(&mut self, sample: Sample) -> (Update, Row) {
        let update = self.tracker.update(sample.t, sample.mx, sample.my);
        if update == Update::Rejected {
            log::trace!(
                "Rejected measurement at t = {}, last accepted t = {}",
                sample.t,
                self.tracker.last_time()
            );
        }

        let (fx, fy) = self.tracker.predict(self.lookahead);
        let row = Row {
            sample,
            x: self.tracker.x(),
            y: self.tracker.y(),
            vx: self.tracker.vx(),
            vy: self.tracker.vy(),
            fx,
            fy,
        };

        log::trace!("{:?}", row);
        (update, row)
    }
}
