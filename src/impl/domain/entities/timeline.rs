use std::collections::HashMap;

use super::calendar_month::CalendarMonth;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde_derive::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectFilter {
    #[default]
    All,
    FundedOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Deserialize)]
#[serde(default)]
pub struct TimelineOptions {
    /// Hide months before the current one.
    pub only_current_and_future: bool,
    pub project_filter: ProjectFilter,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            only_current_and_future: true,
            project_filter: ProjectFilter::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SumKey {
    pub type_index: usize,
    pub month_index: usize,
}

/// Sparse `(type, month) -> summed quantity` map; absent keys sum to 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SumMap(pub(crate) HashMap<SumKey, f64>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    /// Indices (into the record store) of the projects the timeline covers.
    pub project_indices: Vec<usize>,
    pub months: Vec<CalendarMonth>,
    /// Distinct position types, in first-seen order.
    pub types: Vec<String>,
    pub sums: SumMap,
}

// --

impl SumMap {
    pub fn get(&self, type_index: usize, month_index: usize) -> f64 {
        self.0
            .get(&SumKey {
                type_index,
                month_index,
            })
            .copied()
            .unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SumKey, &f64)> {
        self.0.iter()
    }
}

impl Timeline {
    pub fn type_index(&self, position_type: &str) -> Option<usize> {
        self.types.iter().position(|t| t == position_type)
    }

    pub fn month_index(&self, month: &CalendarMonth) -> Option<usize> {
        self.months.binary_search(month).ok()
    }

    /// Sum for a `(type, month)` pair by value; 0 when either is not part of
    /// the timeline.
    pub fn sum_for(&self, position_type: &str, month: &CalendarMonth) -> f64 {
        match (self.type_index(position_type), self.month_index(month)) {
            (Some(t), Some(m)) => self.sums.get(t, m),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_fill_missing_fields_with_defaults() {
        let options: TimelineOptions =
            serde_json::from_str(r#"{"project_filter": "funded_only"}"#).unwrap();
        assert_eq!(
            options,
            TimelineOptions {
                only_current_and_future: true,
                project_filter: ProjectFilter::FundedOnly,
            }
        );

        let options: TimelineOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, TimelineOptions::default());
        assert!(options.only_current_and_future);
        assert_eq!(options.project_filter, ProjectFilter::All);
    }

    #[test]
    fn options_accept_explicit_values() {
        let options: TimelineOptions = serde_json::from_str(
            r#"{"only_current_and_future": false, "project_filter": "all"}"#,
        )
        .unwrap();
        assert!(!options.only_current_and_future);
        assert_eq!(options.project_filter, ProjectFilter::All);
        let unknown = serde_json::from_str::<TimelineOptions>(r#"{"project_filter": "Funded"}"#);
        assert!(unknown.is_err());
    }
}
