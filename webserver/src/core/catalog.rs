//! Fixed catalogs of names and occupations

use shared::{NAMES, OCCUPATIONS, SharedError, SharedResult};

/// Read-only selection lists for generated freelancers
///
/// Both lists are guaranteed non-empty, so picking an entry can never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    names: Vec<String>,
    occupations: Vec<String>,
}

impl Catalog {
    pub fn new<N, O>(names: N, occupations: O) -> SharedResult<Self>
    where
        N: IntoIterator,
        N::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let occupations: Vec<String> = occupations.into_iter().map(Into::into).collect();

        if names.is_empty() {
            return Err(SharedError::EmptyCatalog { catalog: "names".to_string() });
        }
        if occupations.is_empty() {
            return Err(SharedError::EmptyCatalog { catalog: "occupations".to_string() });
        }

        Ok(Self { names, occupations })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn occupations(&self) -> &[String] {
        &self.occupations
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn contains_occupation(&self, occupation: &str) -> bool {
        self.occupations.iter().any(|o| o == occupation)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            names: NAMES.iter().map(|n| n.to_string()).collect(),
            occupations: OCCUPATIONS.iter().map(|o| o.to_string()).collect(),
        }
    }
}
