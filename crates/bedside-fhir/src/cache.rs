//! Per-session observation cache.
//!
//! Keyed by (patient id, code) and owned by a `ResolverSession`, so a new
//! session starts empty; that is the explicit invalidation point. Nothing cached
//! here can outlive the patient context it was fetched for.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::gateway::Observation;

#[derive(Debug, Default)]
pub struct ObservationCache {
    entries: Mutex<HashMap<(String, String), Observation>>,
}

impl ObservationCache {
    pub fn new() -> Self {
        ObservationCache::default()
    }

    pub fn get(&self, patient_id: &str, code: &str) -> Option<Observation> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries
            .get(&(patient_id.to_string(), code.to_string()))
            .cloned()
    }

    pub fn put(&self, patient_id: &str, code: &str, observation: Observation) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert((patient_id.to_string(), code.to_string()), observation);
    }

    pub fn clear(&self) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.clear();
    }

    pub fn len(&self) -> usize {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(value: f64) -> Observation {
        Observation {
            value,
            unit: None,
            observed_at: None,
        }
    }

    #[test]
    fn entries_are_scoped_to_the_patient() {
        let cache = ObservationCache::new();
        cache.put("p1", "2160-0", obs(1.2));

        assert_eq!(cache.get("p1", "2160-0"), Some(obs(1.2)));
        assert_eq!(cache.get("p2", "2160-0"), None);
    }

    #[test]
    fn clear_empties_the_cache() {
        let cache = ObservationCache::new();
        cache.put("p1", "2160-0", obs(1.2));
        cache.clear();
        assert!(cache.is_empty());
    }
}
