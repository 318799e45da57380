//! Random freelancer generation

use rand::Rng;
use shared::{Freelancer, RateBounds};

use super::catalog::Catalog;

/// Produces freelancers from a catalog and rate bounds
///
/// Holds no mutable state. Each call picks name, occupation and rate
/// independently and uniformly from the supplied generator.
#[derive(Debug, Clone, Default)]
pub struct RecordGenerator {
    catalog: Catalog,
    bounds: RateBounds,
}

impl RecordGenerator {
    pub fn new(catalog: Catalog, bounds: RateBounds) -> Self {
        Self { catalog, bounds }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Freelancer {
        // Catalog guarantees both lists are non-empty
        let names = self.catalog.names();
        let occupations = self.catalog.occupations();

        let name = &names[rng.gen_range(0..names.len())];
        let occupation = &occupations[rng.gen_range(0..occupations.len())];
        let rate = rng.gen_range(self.bounds.min()..=self.bounds.max());

        Freelancer::new(name.as_str(), occupation.as_str(), rate)
    }

    pub fn generate_many<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Freelancer> {
        (0..count).map(|_| self.generate(rng)).collect()
    }

    /// Whether a record could have come from this generator
    pub fn accepts(&self, freelancer: &Freelancer) -> bool {
        self.catalog.contains_name(&freelancer.name)
            && self.catalog.contains_occupation(&freelancer.occupation)
            && self.bounds.contains(freelancer.rate)
    }
}
