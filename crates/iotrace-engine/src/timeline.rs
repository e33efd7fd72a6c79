use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use iotrace_types::TimelineEvent;
use serde::{Deserialize, Serialize};

/// Timestamp-only event ordering.
///
/// Two events with the same timestamp compare `Equal` no matter what else
/// they carry; the legacy timelines depend on exactly this, which is why
/// it is a standalone comparator instead of an `Ord` impl on the event
/// type. The ordering is total.
pub fn by_timestamp(a: &TimelineEvent, b: &TimelineEvent) -> Ordering {
    a.timestamp.cmp(&b.timestamp)
}

/// Chronologically ordered collection of classified events
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Timeline {
    events: Vec<TimelineEvent>,
}

impl Timeline {
    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// First and last event timestamps, if any events exist
    pub fn span(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match (self.events.first(), self.events.last()) {
            (Some(first), Some(last)) => Some((first.timestamp, last.timestamp)),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimelineEvent> {
        self.events.iter()
    }
}

/// Assemble a timeline from classified events.
///
/// The sort is stable: events with equal timestamps keep the order their
/// classifiers emitted them in.
pub fn build_timeline(mut events: Vec<TimelineEvent>) -> Timeline {
    events.sort_by(by_timestamp);
    Timeline { events }
}
