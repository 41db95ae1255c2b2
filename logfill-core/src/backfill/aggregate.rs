use crate::backfill::types::ViewRecord;
use indexmap::IndexMap;
use indexmap::map::Entry;

/// First qualifying view per message url, in input order.
///
/// Each key is written at most once: the first hit wins and later duplicates
/// are discarded. Iteration yields insertion order, which becomes the order
/// of the rendered UPDATE statements.
#[derive(Debug, Default)]
pub struct FirstViews {
    views: IndexMap<String, String>,
}

impl FirstViews {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a view unless its message url has been seen before.
    /// Returns whether the record was kept.
    pub fn record(&mut self, view: ViewRecord) -> bool {
        match self.views.entry(view.message_url) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(view.viewed_at);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Entries as `(message_url, viewed_at)`, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.views
            .iter()
            .map(|(url, ts)| (url.as_str(), ts.as_str()))
    }
}
