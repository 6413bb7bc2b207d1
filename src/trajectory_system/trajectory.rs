use super::kinematics::KinematicState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub height: f64,
    pub velocity: f64,
}

impl Sample {
    pub fn new(time: f64, state: KinematicState) -> Self {
        Sample {
            time,
            height: state.height,
            velocity: state.velocity,
        }
    }

    pub fn state(&self) -> KinematicState {
        KinematicState::new(self.height, self.velocity)
    }
}

/// Chronological samples produced by one of the simulators.
///
/// Samples can only be appended from inside the crate, so a trajectory handed
/// out to callers is read-only.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trajectory {
    samples: Vec<Sample>,
}

impl Trajectory {
    pub fn starting_at(state: KinematicState) -> Self {
        Trajectory {
            samples: vec![Sample::new(0.0, state)],
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Trajectory {
            samples: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    pub(crate) fn extend<I: IntoIterator<Item = Sample>>(&mut self, samples: I) {
        self.samples.extend(samples);
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|sample| sample.time).collect()
    }

    pub fn heights(&self) -> Vec<f64> {
        self.samples.iter().map(|sample| sample.height).collect()
    }

    pub fn velocities(&self) -> Vec<f64> {
        self.samples.iter().map(|sample| sample.velocity).collect()
    }

    pub fn duration(&self) -> f64 {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => last.time - first.time,
            _ => 0.0,
        }
    }
}
