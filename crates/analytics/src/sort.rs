//! Column sorting of the transaction table
//!
//! `sorted_view` returns an ordered copy of the records; the source
//! collection is never reordered. The sort is stable, so records whose key
//! values are equal (or not comparable at all) keep their received order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use antiscam_core::{SortKey, TransactionRecord};

/// Sort direction for the active column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The caller-owned sort selection.
///
/// Starts as `{key: None, direction: Ascending}` for every fresh result set
/// and changes only through [`SortState::select`]. It is never carried over
/// to a new upload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortState {
    /// Apply a column click: re-selecting the active column flips the
    /// direction, selecting a new column resets to ascending.
    pub fn select(&mut self, key: SortKey) {
        if self.key == Some(key) {
            self.direction = self.direction.toggled();
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Order a copy of `records` by the current sort state.
///
/// With no active key the received order comes back unchanged. Otherwise the
/// raw value of the key decides: numeric order for numbers, lexicographic
/// for text. Absent values, NaN, and mismatched value kinds compare as ties,
/// and ties keep their original relative order.
pub fn sorted_view(records: &[TransactionRecord], state: &SortState) -> Vec<TransactionRecord> {
    let mut view = records.to_vec();

    let Some(key) = state.key else {
        return view;
    };

    view.sort_by(|a, b| {
        let ordering = match (a.field(key), b.field(key)) {
            (Some(left), Some(right)) => left.partial_cmp(&right).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        };
        match state.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    debug!(records = view.len(), key = %key, "sorted transaction view");
    view
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: usize, account: Option<&str>, amount: f64, score: f64) -> TransactionRecord {
        TransactionRecord {
            id,
            transaction_id: Some(format!("TXN{:04}", id + 1)),
            account_id: account.map(str::to_string),
            amount,
            balance: 1000.0,
            duration_secs: 20.0,
            login_attempts: 1,
            customer_age: 35,
            fraud_score: score,
        }
    }

    fn ids(view: &[TransactionRecord]) -> Vec<usize> {
        view.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_no_key_returns_received_order() {
        let records = vec![
            record(0, None, 30.0, 0.3),
            record(1, None, 10.0, 0.1),
            record(2, None, 20.0, 0.2),
        ];
        let view = sorted_view(&records, &SortState::default());
        assert_eq!(ids(&view), vec![0, 1, 2]);
    }

    #[test]
    fn test_source_is_not_mutated() {
        let records = vec![record(0, None, 30.0, 0.3), record(1, None, 10.0, 0.1)];
        let state = SortState {
            key: Some(SortKey::TransactionAmount),
            direction: SortDirection::Ascending,
        };
        let _ = sorted_view(&records, &state);
        assert_eq!(ids(&records), vec![0, 1]);
    }

    #[test]
    fn test_numeric_ascending_and_descending() {
        let records = vec![
            record(0, None, 0.0, 0.85),
            record(1, None, 0.0, 0.45),
            record(2, None, 0.0, 0.65),
        ];
        let mut state = SortState::default();
        state.select(SortKey::FraudScore);

        let asc = sorted_view(&records, &state);
        let scores: Vec<f64> = asc.iter().map(|r| r.fraud_score).collect();
        assert_eq!(scores, vec![0.45, 0.65, 0.85]);

        state.select(SortKey::FraudScore);
        let desc = sorted_view(&records, &state);
        let scores: Vec<f64> = desc.iter().map(|r| r.fraud_score).collect();
        assert_eq!(scores, vec![0.85, 0.65, 0.45]);
    }

    #[test]
    fn test_toggle_reverses_exactly_without_duplicates() {
        let records: Vec<_> = [5.0, 3.0, 9.0, 1.0, 7.0]
            .iter()
            .enumerate()
            .map(|(i, amount)| record(i, None, *amount, 0.5))
            .collect();

        let asc = sorted_view(
            &records,
            &SortState {
                key: Some(SortKey::TransactionAmount),
                direction: SortDirection::Ascending,
            },
        );
        let desc = sorted_view(
            &records,
            &SortState {
                key: Some(SortKey::TransactionAmount),
                direction: SortDirection::Descending,
            },
        );

        let mut reversed = ids(&asc);
        reversed.reverse();
        assert_eq!(ids(&desc), reversed);
    }

    #[test]
    fn test_stability_on_equal_values() {
        let records = vec![
            record(0, Some("B"), 50.0, 0.5),
            record(1, Some("A"), 50.0, 0.5),
            record(2, Some("C"), 50.0, 0.5),
        ];
        let state = SortState {
            key: Some(SortKey::TransactionAmount),
            direction: SortDirection::Descending,
        };
        let view = sorted_view(&records, &state);
        assert_eq!(ids(&view), vec![0, 1, 2]);
    }

    #[test]
    fn test_idempotent_under_same_state() {
        let records = vec![
            record(0, None, 30.0, 0.3),
            record(1, None, 10.0, 0.1),
            record(2, None, 20.0, 0.2),
        ];
        let state = SortState {
            key: Some(SortKey::TransactionAmount),
            direction: SortDirection::Ascending,
        };
        let once = sorted_view(&records, &state);
        let twice = sorted_view(&once, &state);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn test_text_sort_is_lexicographic() {
        let records = vec![
            record(0, Some("ACC3"), 0.0, 0.5),
            record(1, Some("ACC1"), 0.0, 0.5),
            record(2, Some("ACC2"), 0.0, 0.5),
        ];
        let state = SortState {
            key: Some(SortKey::AccountId),
            direction: SortDirection::Ascending,
        };
        let view = sorted_view(&records, &state);
        assert_eq!(ids(&view), vec![1, 2, 0]);
    }

    #[test]
    fn test_absent_values_do_not_reorder() {
        // No AccountID anywhere: every comparison is a tie.
        let records = vec![
            record(0, None, 0.0, 0.9),
            record(1, None, 0.0, 0.1),
            record(2, None, 0.0, 0.5),
        ];
        let state = SortState {
            key: Some(SortKey::AccountId),
            direction: SortDirection::Descending,
        };
        let view = sorted_view(&records, &state);
        assert_eq!(ids(&view), vec![0, 1, 2]);
    }

    #[test]
    fn test_nan_scores_keep_original_order() {
        let records = vec![
            record(0, None, 0.0, f64::NAN),
            record(1, None, 0.0, f64::NAN),
        ];
        let state = SortState {
            key: Some(SortKey::FraudScore),
            direction: SortDirection::Ascending,
        };
        let view = sorted_view(&records, &state);
        assert_eq!(ids(&view), vec![0, 1]);
    }

    #[test]
    fn test_select_toggle_rule() {
        let mut state = SortState::default();

        state.select(SortKey::CustomerAge);
        assert_eq!(state.key, Some(SortKey::CustomerAge));
        assert_eq!(state.direction, SortDirection::Ascending);

        state.select(SortKey::CustomerAge);
        assert_eq!(state.direction, SortDirection::Descending);

        state.select(SortKey::CustomerAge);
        assert_eq!(state.direction, SortDirection::Ascending);

        // New column resets to ascending even from descending
        state.select(SortKey::CustomerAge);
        state.select(SortKey::AccountBalance);
        assert_eq!(state.key, Some(SortKey::AccountBalance));
        assert_eq!(state.direction, SortDirection::Ascending);
    }
}
