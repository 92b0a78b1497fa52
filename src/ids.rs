//! Identifier generation for tickets and spots
//!
//! Generators own their counters; nothing here is global, so a test can
//! hand the service a [`SequentialIdGenerator`] and predict every id.

use chrono::Utc;
use uuid::Uuid;

/// Mints identifiers that are unique for the lifetime of the generator
pub trait IdGenerator {
    /// Next identifier, starting with `prefix`
    fn next(&mut self, prefix: &str) -> String;
}

/// Deterministic `prefix` + counter ids (`T-1`, `T-2`, ...)
#[derive(Debug, Clone, Default)]
pub struct SequentialIdGenerator {
    counter: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.counter
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next(&mut self, prefix: &str) -> String {
        self.counter += 1;
        format!("{}{}", prefix, self.counter)
    }
}

/// Upper-cased `prefix` + base36 epoch millis + counter
///
/// The counter keeps ids distinct when several are minted in the same
/// millisecond.
#[derive(Debug, Clone, Default)]
pub struct TimestampIdGenerator {
    counter: u64,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next(&mut self, prefix: &str) -> String {
        self.counter += 1;
        let millis = Utc::now().timestamp_millis().max(0) as u64;
        format!("{}{}{}", prefix, to_base36(millis), self.counter).to_uppercase()
    }
}

/// `prefix` + random v4 uuid in simple (hyphen-free) form
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next(&mut self, prefix: &str) -> String {
        format!("{}{}", prefix, Uuid::new_v4().simple())
    }
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}
