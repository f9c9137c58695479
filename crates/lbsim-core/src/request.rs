//! Request model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Request category marker. Carried through dispatch but never used to
/// prioritize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    P,
    S,
}

impl Category {
    pub fn as_char(&self) -> char {
        match self {
            Category::P => 'P',
            Category::S => 'S',
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single unit of simulated work.
///
/// Immutable once built; dispatch clones it into the worker that runs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    source_address: String,
    dest_address: String,
    duration_ticks: u32,
    category: Category,
}

impl Request {
    /// Create a request.
    ///
    /// A zero duration is bumped to one tick so every request occupies
    /// its worker for at least one advance.
    pub fn new(
        source_address: impl Into<String>,
        dest_address: impl Into<String>,
        duration_ticks: u32,
        category: Category,
    ) -> Self {
        Self {
            source_address: source_address.into(),
            dest_address: dest_address.into(),
            duration_ticks: duration_ticks.max(1),
            category,
        }
    }

    pub fn source_address(&self) -> &str {
        &self.source_address
    }

    pub fn dest_address(&self) -> &str {
        &self.dest_address
    }

    pub fn duration_ticks(&self) -> u32 {
        self.duration_ticks
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_is_clamped_to_one_tick() {
        let req = Request::new("1.2.3.4", "5.6.7.8", 0, Category::P);
        assert_eq!(req.duration_ticks(), 1);
    }

    #[test]
    fn accessors_return_fields() {
        let req = Request::new("1.2.3.4", "5.6.7.8", 12, Category::S);
        assert_eq!(req.source_address(), "1.2.3.4");
        assert_eq!(req.dest_address(), "5.6.7.8");
        assert_eq!(req.duration_ticks(), 12);
        assert_eq!(req.category(), Category::S);
        assert_eq!(req.category().to_string(), "S");
    }
}
