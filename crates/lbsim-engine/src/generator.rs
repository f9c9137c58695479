//! Request sources.
//!
//! The engine pulls requests through the `RequestGenerator` trait so tests
//! can script exact arrival sequences.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lbsim_core::{Category, Request};

/// Produces the next synthetic request.
pub trait RequestGenerator: Send {
    fn generate(&mut self) -> Request;
}

/// Seeded PRNG source: random IPv4 addresses, uniform duration and category.
pub struct RandomRequestGenerator {
    rng: StdRng,
    min_duration: u32,
    max_duration: u32,
}

impl RandomRequestGenerator {
    /// Create a generator with a fixed seed for reproducible runs.
    pub fn seeded(seed: u64, min_duration: u32, max_duration: u32) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), min_duration, max_duration)
    }

    /// Create a generator seeded from OS entropy.
    pub fn from_entropy(min_duration: u32, max_duration: u32) -> Self {
        Self::with_rng(StdRng::from_entropy(), min_duration, max_duration)
    }

    fn with_rng(rng: StdRng, min_duration: u32, max_duration: u32) -> Self {
        let min_duration = min_duration.max(1);
        Self {
            rng,
            min_duration,
            max_duration: max_duration.max(min_duration),
        }
    }

    fn random_ip(&mut self) -> String {
        let octets: [u8; 4] = self.rng.r#gen();
        format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
    }
}

impl RequestGenerator for RandomRequestGenerator {
    fn generate(&mut self) -> Request {
        let source = self.random_ip();
        let dest = self.random_ip();
        let duration = self.rng.gen_range(self.min_duration..=self.max_duration);
        let category = if self.rng.gen_bool(0.5) {
            Category::P
        } else {
            Category::S
        };
        Request::new(source, dest, duration, category)
    }
}

/// Replays a fixed list of requests, cycling when exhausted.
pub struct SequenceGenerator {
    requests: Vec<Request>,
    next: usize,
}

impl SequenceGenerator {
    /// Panics if `requests` is empty.
    pub fn new(requests: Vec<Request>) -> Self {
        assert!(!requests.is_empty(), "sequence generator needs at least one request");
        Self { requests, next: 0 }
    }
}

impl RequestGenerator for SequenceGenerator {
    fn generate(&mut self) -> Request {
        let request = self.requests[self.next].clone();
        self.next = (self.next + 1) % self.requests.len();
        request
    }
}
