//! Core shared types and constants

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::errors::{SharedError, SharedResult};

/// Names a freelancer can be generated with
pub const NAMES: &[&str] = &["Alice", "Bob", "Carol", "David", "Eve", "Frank", "Grace", "Henry"];

/// Occupations a freelancer can be generated with
pub const OCCUPATIONS: &[&str] = &["Writer", "Teacher", "Programmer", "Designer", "Consultant", "Tutor"];

pub const MIN_RATE: u32 = 30;
pub const MAX_RATE: u32 = 100;

/// Number of freelancers present before the first update tick
pub const INITIAL_FREELANCERS: usize = 5;

/// Delay between appended freelancers
pub const UPDATE_INTERVAL: Duration = Duration::from_secs(5);

/// One generated forum entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Freelancer {
    pub name: String,
    pub occupation: String,
    pub rate: u32,
}

impl Freelancer {
    pub fn new(name: impl Into<String>, occupation: impl Into<String>, rate: u32) -> Self {
        Self {
            name: name.into(),
            occupation: occupation.into(),
            rate,
        }
    }

    /// Hourly rate as shown in the table, e.g. `$45/hr`
    pub fn formatted_rate(&self) -> String {
        format!("${}/hr", self.rate)
    }
}

/// Inclusive hourly rate bounds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateBounds {
    min: u32,
    max: u32,
}

impl RateBounds {
    pub fn new(min: u32, max: u32) -> SharedResult<Self> {
        if min > max {
            return Err(SharedError::InvalidConfig {
                field: "rate_bounds".to_string(),
                value: format!("[{min}, {max}]"),
            });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, rate: u32) -> bool {
        (self.min..=self.max).contains(&rate)
    }
}

impl Default for RateBounds {
    fn default() -> Self {
        Self {
            min: MIN_RATE,
            max: MAX_RATE,
        }
    }
}

/// Component tag attached to every log event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    WebServer,
    UpdateLoop,
    WebSocket,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::WebServer => write!(f, "webserver"),
            Component::UpdateLoop => write!(f, "update-loop"),
            Component::WebSocket => write!(f, "websocket"),
        }
    }
}
