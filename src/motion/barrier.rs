use std::collections::BTreeSet;

/// Counts section registrations so global work can wait for every section.
///
/// A section arrives once it has registered all of its triggers (or decided to render
/// nothing). Repeated arrivals by the same name count once.
#[derive(Clone, Debug)]
pub struct RegistrationBarrier {
    expected: BTreeSet<String>,
    arrived: BTreeSet<String>,
}

impl RegistrationBarrier {
    pub fn new<I, S>(expected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expected: expected.into_iter().map(Into::into).collect(),
            arrived: BTreeSet::new(),
        }
    }

    /// Record `name` as registered. Returns `true` once every expected section has arrived.
    pub fn arrive(&mut self, name: &str) -> bool {
        if !self.expected.contains(name) {
            tracing::warn!(section = name, "unexpected section arrived at barrier");
        } else if self.arrived.insert(name.to_owned()) {
            tracing::trace!(section = name, remaining = self.remaining().len(), "section registered");
        }
        self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        self.expected.is_subset(&self.arrived)
    }

    /// Sections still missing, in name order.
    pub fn remaining(&self) -> Vec<&str> {
        self.expected
            .difference(&self.arrived)
            .map(String::as_str)
            .collect()
    }

    pub fn expected(&self) -> usize {
        self.expected.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/barrier.rs"]
mod tests;
