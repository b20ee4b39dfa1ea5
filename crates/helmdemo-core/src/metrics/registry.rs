use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{DemoError, Result};

use super::exposition;

/// Monotonic counter. Only ever incremented by 1.
#[derive(Debug)]
pub struct Counter {
    name: String,
    help: String,
    value: AtomicU64,
}

impl Counter {
    fn new(name: String, help: String) -> Self {
        Self {
            name,
            help,
            value: AtomicU64::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    /// Increment by 1.
    #[inline]
    pub fn inc(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    fn sample(&self) -> CounterSample {
        CounterSample {
            name: self.name.clone(),
            help: self.help.clone(),
            value: self.get(),
        }
    }
}

/// Point-in-time reading of one counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSample {
    pub name: String,
    pub help: String,
    pub value: u64,
}

/// Collects counter definitions before the registry is frozen.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    counters: Vec<Counter>,
    index: HashMap<String, usize>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a counter. Names must be unique and match
    /// `[a-zA-Z_:][a-zA-Z0-9_:]*`.
    pub fn counter(&mut self, name: impl Into<String>, help: impl Into<String>) -> Result<()> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(DemoError::InvalidMetricName(name));
        }
        if self.index.contains_key(&name) {
            return Err(DemoError::DuplicateMetric(name));
        }

        self.index.insert(name.clone(), self.counters.len());
        self.counters.push(Counter::new(name, help.into()));
        Ok(())
    }

    pub fn build(self) -> Registry {
        Registry {
            counters: self.counters,
            index: self.index,
        }
    }
}

/// Fixed set of counters, rendered in registration order.
#[derive(Debug)]
pub struct Registry {
    counters: Vec<Counter>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn counter(&self, name: &str) -> Option<&Counter> {
        self.index.get(name).and_then(|&i| self.counters.get(i))
    }

    /// Increment the named counter by 1.
    /// Unregistered names fail with `UnknownMetric` rather than being ignored.
    pub fn increment(&self, name: &str) -> Result<()> {
        self.lookup(name)?.inc();
        Ok(())
    }

    pub fn value(&self, name: &str) -> Result<u64> {
        Ok(self.lookup(name)?.get())
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Read every counter once, in registration order.
    pub fn snapshot(&self) -> Vec<CounterSample> {
        self.counters.iter().map(Counter::sample).collect()
    }

    /// Render all counters in Prometheus text exposition format.
    pub fn render(&self) -> String {
        exposition::render(&self.snapshot())
    }

    fn lookup(&self, name: &str) -> Result<&Counter> {
        self.counter(name)
            .ok_or_else(|| DemoError::UnknownMetric(name.to_string()))
    }
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}
