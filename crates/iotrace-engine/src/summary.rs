use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use iotrace_types::DeviceRegistry;
use serde::{Deserialize, Serialize};

use crate::timeline::Timeline;

/// Per-source analyst summary of one reconstruction pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineSummary {
    pub event_count: usize,
    /// Events per semantic category, keyed by the category label
    pub events_by_kind: BTreeMap<String, usize>,
    /// Distinct device identities referenced by the pass
    pub device_count: usize,
    pub first_event: Option<DateTime<Utc>>,
    pub last_event: Option<DateTime<Utc>>,
}

/// Summarize an assembled timeline against its run's registry
pub fn summarize(timeline: &Timeline, registry: &DeviceRegistry) -> TimelineSummary {
    let mut events_by_kind: BTreeMap<String, usize> = BTreeMap::new();
    for event in timeline.iter() {
        *events_by_kind
            .entry(event.kind.label().to_string())
            .or_insert(0) += 1;
    }

    let (first_event, last_event) = match timeline.span() {
        Some((first, last)) => (Some(first), Some(last)),
        None => (None, None),
    };

    TimelineSummary {
        event_count: timeline.len(),
        events_by_kind,
        device_count: registry.len(),
        first_event,
        last_event,
    }
}
