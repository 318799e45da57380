//! Forum state
//!
//! Pure business logic with no I/O dependencies

use rand::Rng;
use shared::{Freelancer, SharedError, SharedResult};

use super::average::AverageRate;
use super::generator::RecordGenerator;

/// Insertion-ordered list of freelancers plus the generator that feeds it
///
/// Records are only ever appended. The average is recomputed from the list
/// on every call and never cached.
#[derive(Debug, Clone, Default)]
pub struct ForumState {
    generator: RecordGenerator,
    freelancers: Vec<Freelancer>,
}

impl ForumState {
    /// Empty forum
    pub fn new(generator: RecordGenerator) -> Self {
        Self {
            generator,
            freelancers: Vec::new(),
        }
    }

    /// Forum seeded with `count` generated freelancers
    pub fn with_initial_records<R: Rng + ?Sized>(generator: RecordGenerator, count: usize, rng: &mut R) -> Self {
        let freelancers = generator.generate_many(count, rng);
        Self { generator, freelancers }
    }

    /// Forum with known records, each checked against the generator's catalog and bounds
    pub fn from_records(generator: RecordGenerator, freelancers: Vec<Freelancer>) -> SharedResult<Self> {
        if let Some(invalid) = freelancers.iter().find(|f| !generator.accepts(f)) {
            return Err(SharedError::InvalidConfig {
                field: "freelancer".to_string(),
                value: format!("{} / {} / {}", invalid.name, invalid.occupation, invalid.rate),
            });
        }
        Ok(Self { generator, freelancers })
    }

    /// Generate one freelancer and append it
    pub fn append_generated<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Freelancer {
        let freelancer = self.generator.generate(rng);
        self.freelancers.push(freelancer);
        &self.freelancers[self.freelancers.len() - 1]
    }

    pub fn freelancers(&self) -> &[Freelancer] {
        &self.freelancers
    }

    pub fn len(&self) -> usize {
        self.freelancers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.freelancers.is_empty()
    }

    pub fn average_rate(&self) -> AverageRate {
        AverageRate::of(&self.freelancers)
    }

    pub fn generator(&self) -> &RecordGenerator {
        &self.generator
    }
}
