//! The auto-population resolver.
//!
//! For every field that declares a source, fetch the backing data,
//! normalize it into the field's standard unit, bounds-check it, annotate
//! it with a staleness verdict, and hand back a batch of value-map
//! updates. Fields resolve independently: one bad lookup never aborts the
//! rest, and a missing observation simply leaves its field unset so the
//! calculator stays usable by manual entry.
//!
//! Fetches for distinct codes run concurrently; fields sharing a code are
//! fanned out from a single fetch. Manual edits always win: the caller's
//! current map is consulted before anything is written, and
//! `ValueMap::apply_updates` re-checks on merge, which covers the edit
//! racing a slow fetch. Cancellation is dropping the returned future; a
//! torn-down session's updates are never applied anywhere.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use futures::future::join_all;
use jiff::Timestamp;
use jiff::tz::TimeZone;
use tracing::{debug, warn};

use bedside_core::config::{AutoSource, CalculatorConfig, FieldSpec, ScoringRules};
use bedside_core::validate::validate_field;
use bedside_core::values::{Provenance, ResolvedValue, Value, ValueMap};

use crate::cache::ObservationCache;
use crate::gateway::{Observation, ObservationGateway};
use crate::patient::{PatientContext, Sex};
use crate::staleness;

fn auto(value: Value) -> ResolvedValue {
    ResolvedValue {
        value,
        provenance: Provenance::AutoPopulated,
        observed_at: None,
        staleness: None,
        touched: false,
    }
}

/// One patient's resolution session. Owns the observation cache, so
/// starting a new session is the cache invalidation point: nothing
/// fetched for a previous patient context survives into this one.
pub struct ResolverSession {
    gateway: Arc<dyn ObservationGateway>,
    patient: PatientContext,
    cache: ObservationCache,
}

impl ResolverSession {
    pub fn new(gateway: Arc<dyn ObservationGateway>, patient: PatientContext) -> Self {
        ResolverSession {
            gateway,
            patient,
            cache: ObservationCache::new(),
        }
    }

    pub fn patient(&self) -> &PatientContext {
        &self.patient
    }

    /// Resolve every sourced field of `config` that the user has not
    /// touched. Returns only the updates; the caller merges them with
    /// `ValueMap::apply_updates` while the session is still live.
    pub async fn resolve(
        &self,
        config: &CalculatorConfig,
        current: &ValueMap,
        now: Timestamp,
    ) -> ValueMap {
        let mut updates = ValueMap::new();
        self.resolve_observations(config, current, now, &mut updates)
            .await;
        self.resolve_conditions(config, current, &mut updates).await;
        self.resolve_demographics(config, current, now, &mut updates);
        debug!(
            calculator = %config.id,
            resolved = updates.len(),
            "auto-population pass complete"
        );
        updates
    }

    async fn resolve_observations(
        &self,
        config: &CalculatorConfig,
        current: &ValueMap,
        now: Timestamp,
        updates: &mut ValueMap,
    ) {
        let targets: Vec<(&FieldSpec, &str)> = config
            .fields
            .iter()
            .filter_map(|field| match &field.source {
                Some(AutoSource::Observation { code }) if !current.is_touched(&field.id) => {
                    Some((field, code.as_str()))
                }
                _ => None,
            })
            .collect();
        if targets.is_empty() {
            return;
        }

        // One fetch per distinct code; shared codes fan out below.
        let codes: BTreeSet<&str> = targets.iter().map(|(_, code)| *code).collect();
        let fetches = codes
            .iter()
            .map(|code| async move { (*code, self.fetch(code).await) });
        let mut by_code: BTreeMap<&str, Observation> = BTreeMap::new();
        for (code, observation) in join_all(fetches).await {
            if let Some(observation) = observation {
                by_code.insert(code, observation);
            }
        }

        for (field, code) in targets {
            let Some(observation) = by_code.get(code) else {
                continue;
            };
            let Some(value) = self.standardized_value(field, observation) else {
                continue;
            };
            if validate_field(field, Some(&Value::Number(value))).blocks() {
                warn!(
                    field = %field.id,
                    value,
                    "auto-populated value outside declared bounds, leaving field unset"
                );
                continue;
            }
            let staleness = observation
                .observed_at
                .map(|t| staleness::classify(t, now, field.quantity));
            updates.set_resolved(
                &field.id,
                ResolvedValue {
                    observed_at: observation.observed_at,
                    staleness,
                    ..auto(Value::Number(value))
                },
            );
        }
    }

    /// Value in the field's standard unit, or `None` when the reported
    /// unit cannot be converted; garbage never propagates as a number.
    fn standardized_value(&self, field: &FieldSpec, observation: &Observation) -> Option<f64> {
        let (Some(standard), Some(unit)) = (&field.standard_unit, &observation.unit) else {
            return Some(observation.value);
        };
        let kind = field.quantity?;
        match bedside_units::convert(observation.value, unit, standard, kind) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(field = %field.id, error = %err, "unit conversion failed, leaving field unset");
                None
            }
        }
    }

    async fn fetch(&self, code: &str) -> Option<Observation> {
        if let Some(hit) = self.cache.get(&self.patient.patient_id, code) {
            return Some(hit);
        }
        match self.gateway.most_recent_observation(code).await {
            Ok(Some(observation)) => {
                self.cache
                    .put(&self.patient.patient_id, code, observation.clone());
                Some(observation)
            }
            Ok(None) => None,
            Err(err) => {
                warn!(code, error = %err, "observation fetch failed, degrading to manual entry");
                None
            }
        }
    }

    async fn resolve_conditions(
        &self,
        config: &CalculatorConfig,
        current: &ValueMap,
        updates: &mut ValueMap,
    ) {
        let mut targets: Vec<(String, Vec<String>)> = Vec::new();
        match &config.rules {
            ScoringRules::CheckboxSum { sections, .. } | ScoringRules::RadioSum { sections } => {
                for opt in sections.iter().flat_map(|s| &s.options) {
                    if let Some(code) = &opt.condition_code {
                        targets.push((opt.id.clone(), vec![code.clone()]));
                    }
                }
            }
            ScoringRules::YesNoSum { questions } => {
                for q in questions {
                    if let Some(code) = &q.condition_code {
                        targets.push((q.id.clone(), vec![code.clone()]));
                    }
                }
            }
            ScoringRules::WeightedList { .. } | ScoringRules::Formula { .. } => {}
        }
        for field in &config.fields {
            if let Some(AutoSource::Condition { codes }) = &field.source {
                targets.push((field.id.clone(), codes.clone()));
            }
        }
        targets.retain(|(id, _)| !current.is_touched(id));
        if targets.is_empty() {
            return;
        }

        let mut distinct: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (_, codes) in &targets {
            distinct
                .entry(codes.join(","))
                .or_insert_with(|| codes.clone());
        }
        let lookups = distinct
            .iter()
            .map(|(key, codes)| async move { (key.clone(), self.check_condition(codes).await) });
        let present: BTreeMap<String, bool> = join_all(lookups).await.into_iter().collect();

        for (id, codes) in targets {
            // Presence checks the box; absence never writes an explicit
            // false, so a clinician's manual check survives.
            if present.get(&codes.join(",")).copied().unwrap_or(false) {
                updates.set_resolved(id, auto(Value::Flag(true)));
            }
        }
    }

    async fn check_condition(&self, codes: &[String]) -> bool {
        match self.gateway.has_condition(codes).await {
            Ok(present) => present,
            Err(err) => {
                warn!(codes = ?codes, error = %err, "condition lookup failed");
                false
            }
        }
    }

    fn resolve_demographics(
        &self,
        config: &CalculatorConfig,
        current: &ValueMap,
        now: Timestamp,
        updates: &mut ValueMap,
    ) {
        let today = now.to_zoned(TimeZone::UTC).date();
        for field in &config.fields {
            if current.is_touched(&field.id) {
                continue;
            }
            match &field.source {
                Some(AutoSource::PatientAge) => {
                    if let Some(age) = self.patient.age_years(today) {
                        updates.set_resolved(&field.id, auto(Value::Number(f64::from(age))));
                    }
                }
                Some(AutoSource::PatientSex {
                    male_value,
                    female_value,
                }) => {
                    if let Some(sex) = self.patient.sex {
                        let value = match sex {
                            Sex::Male => male_value.clone(),
                            Sex::Female => female_value.clone(),
                        };
                        updates.set_resolved(&field.id, auto(Value::Text(value)));
                    }
                }
                _ => {}
            }
        }
    }
}
