//! Average hourly rate

use std::fmt;

use shared::Freelancer;

/// Mean hourly rate rounded to two decimal places
///
/// Kept as hundredths so the rounding happens once, on exact integers.
/// An empty forum has no mean and reports zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AverageRate {
    hundredths: Option<u64>,
}

impl AverageRate {
    pub fn of(freelancers: &[Freelancer]) -> Self {
        if freelancers.is_empty() {
            return Self { hundredths: None };
        }

        let count = freelancers.len() as u64;
        let total: u64 = freelancers.iter().map(|f| u64::from(f.rate)).sum();

        // round half up: (total * 100 / count) + 0.5
        let hundredths = (total * 200 + count) / (count * 2);
        Self { hundredths: Some(hundredths) }
    }

    pub fn is_empty(&self) -> bool {
        self.hundredths.is_none()
    }
}

impl fmt::Display for AverageRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hundredths {
            Some(h) => write!(f, "{}.{:02}", h / 100, h % 100),
            None => write!(f, "0"),
        }
    }
}
