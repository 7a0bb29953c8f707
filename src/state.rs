//! Dashboard view state and the decisions derived from it.
use std::collections::HashSet;
use crate::models::IpoRecord;

pub const TITLE: &str = "IPO Dashboard";
pub const LOADING_MESSAGE: &str = "Loading IPO data...";
pub const EMPTY_MESSAGE: &str = "No IPOs available";

/// How the single fetch ended.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome {
    Loaded(Vec<IpoRecord>),
    Failed,
}

/// What the page shows for a given state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Empty,
    Cards(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub records: Vec<IpoRecord>,
    pub is_loading: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            is_loading: true,
        }
    }
}

impl DashboardState {
    /// A failure looks exactly like an empty response from here on.
    pub fn apply(&mut self, outcome: LoadOutcome) {
        match outcome {
            LoadOutcome::Loaded(records) => self.records = records,
            LoadOutcome::Failed => self.records.clear(),
        }
        self.is_loading = false;
    }

    pub fn screen(&self) -> Screen {
        if self.is_loading {
            Screen::Loading
        } else if self.records.is_empty() {
            Screen::Empty
        } else {
            Screen::Cards(self.records.len())
        }
    }

    /// Records paired with a render key, in response order. The key is the
    /// record id; rows without one, or whose id renders the same as an
    /// earlier one (`1` and `"1"`), fall back to their position.
    pub fn keyed_records(&self) -> Vec<(String, IpoRecord)> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let key = record
                    .id
                    .as_ref()
                    .map(|id| format!("id-{}", id))
                    .filter(|key| seen.insert(key.clone()))
                    .unwrap_or_else(|| format!("row-{}", index));
                (key, record.clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordId;

    fn record(id: Option<i64>, name: &str) -> IpoRecord {
        IpoRecord {
            id: id.map(RecordId::Number),
            company_name: name.to_string(),
            price_band: None,
            open_date: None,
            close_date: None,
            issue_size: None,
            issue_type: None,
            listing_date: None,
            status: "Open".to_string(),
            ipo_price: None,
            listing_price: None,
            listing_gain: None,
        }
    }

    #[test]
    fn starts_loading_with_no_cards() {
        let state = DashboardState::default();
        assert_eq!(state.screen(), Screen::Loading);
        assert!(state.keyed_records().is_empty());
    }

    #[test]
    fn empty_response_shows_empty_state() {
        let mut state = DashboardState::default();
        state.apply(LoadOutcome::Loaded(vec![]));
        assert_eq!(state.screen(), Screen::Empty);
    }

    #[test]
    fn failure_ends_in_empty_state() {
        let mut state = DashboardState::default();
        state.apply(LoadOutcome::Failed);
        assert!(!state.is_loading);
        assert_eq!(state.screen(), Screen::Empty);
    }

    #[test]
    fn one_card_per_record_in_order() {
        let mut state = DashboardState::default();
        state.apply(LoadOutcome::Loaded(vec![
            record(Some(3), "Gamma"),
            record(Some(1), "Alpha"),
            record(Some(2), "Beta"),
        ]));

        assert_eq!(state.screen(), Screen::Cards(3));
        let keyed = state.keyed_records();
        let keys: Vec<_> = keyed.iter().map(|(k, _)| k.as_str()).collect();
        let names: Vec<_> = keyed.iter().map(|(_, r)| r.company_name.as_str()).collect();
        assert_eq!(keys, vec!["id-3", "id-1", "id-2"]);
        assert_eq!(names, vec!["Gamma", "Alpha", "Beta"]);
    }

    #[test]
    fn missing_and_repeated_ids_get_positional_keys() {
        let mut state = DashboardState::default();
        state.apply(LoadOutcome::Loaded(vec![
            record(Some(1), "Local"),
            record(None, "External"),
            record(Some(1), "Duplicate"),
        ]));

        let keys: Vec<_> = state.keyed_records().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["id-1", "row-1", "row-2"]);
    }

    #[test]
    fn numeric_and_text_ids_with_same_digits_stay_distinct() {
        let mut text_id = record(None, "Text Id");
        text_id.id = Some(RecordId::Text("1".to_string()));

        let mut state = DashboardState::default();
        state.apply(LoadOutcome::Loaded(vec![record(Some(1), "Number Id"), text_id]));

        let keys: Vec<_> = state.keyed_records().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["id-1", "row-1"]);

        let unique: HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len());
    }
}
