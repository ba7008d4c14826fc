use std::collections::HashMap;

use crate::entities::{
    CalendarMonth, Project, ProjectFilter, RecordStore, SumKey, SumMap, Timeline, TimelineOptions,
};

use super::utils::month_range;

/// Derives the month-by-type staffing table from a set of projects. Pure:
/// "today" is passed in, never read from the clock.
pub(crate) struct TimelineProcessor<'a> {
    projects: &'a [Project],
    options: TimelineOptions,
    today: CalendarMonth,
}

impl<'a> TimelineProcessor<'a> {
    pub(crate) fn new(
        projects: &'a [Project],
        options: TimelineOptions,
        today: CalendarMonth,
    ) -> Self {
        Self {
            projects,
            options,
            today,
        }
    }

    pub(crate) fn process(self) -> Timeline {
        let selected: Vec<(usize, &Project)> = self
            .projects
            .iter()
            .enumerate()
            .filter(|(_, p)| match self.options.project_filter {
                ProjectFilter::All => true,
                ProjectFilter::FundedOnly => p.funded,
            })
            .collect();

        let months = self.visible_months(selected.iter().map(|(_, p)| *p));
        let types = Self::type_universe(selected.iter().map(|(_, p)| *p));
        let sums = Self::sum_map(selected.iter().map(|(_, p)| *p), &months, &types);

        tracing::debug!(
            projects = selected.len(),
            months = months.len(),
            types = types.len(),
            cells = sums.len(),
            "computed timeline"
        );

        Timeline {
            project_indices: selected.into_iter().map(|(i, _)| i).collect(),
            months,
            types,
            sums,
        }
    }

    fn visible_months<'p>(
        &self,
        projects: impl Iterator<Item = &'p Project>,
    ) -> Vec<CalendarMonth> {
        let bounds = projects.fold(None::<(CalendarMonth, CalendarMonth)>, |acc, p| {
            Some(match acc {
                None => (p.start, p.end),
                Some((min, max)) => (
                    if p.start.is_before(&min) { p.start } else { min },
                    if p.end.is_after(&max) { p.end } else { max },
                ),
            })
        });
        let Some((min_month, max_month)) = bounds else {
            return Vec::new();
        };

        let clamp_to_today =
            self.options.only_current_and_future && self.today.is_after(&min_month);
        let min_month = if clamp_to_today {
            self.today
        } else {
            min_month
        };

        // Projects entirely in the past leave min after max here; that is an
        // empty timeline, not an error.
        month_range(min_month, max_month)
    }

    fn type_universe<'p>(projects: impl Iterator<Item = &'p Project>) -> Vec<String> {
        let mut types: Vec<String> = Vec::new();
        for position in projects.flat_map(|p| p.positions.iter()) {
            if !types.contains(&position.position_type) {
                types.push(position.position_type.clone());
            }
        }
        types
    }

    fn sum_map<'p>(
        projects: impl Iterator<Item = &'p Project> + Clone,
        months: &[CalendarMonth],
        types: &[String],
    ) -> SumMap {
        let type_index: HashMap<&str, usize> = types
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i))
            .collect();

        let mut sums: HashMap<SumKey, f64> = HashMap::new();
        for (month_index, month) in months.iter().enumerate() {
            for position in projects.clone().flat_map(|p| p.positions.iter()) {
                if !position.is_active_in(month) {
                    continue;
                }
                let Some(&type_index) = type_index.get(position.position_type.as_str()) else {
                    continue;
                };
                *sums
                    .entry(SumKey {
                        type_index,
                        month_index,
                    })
                    .or_insert(0.0) += position.quantity;
            }
        }
        SumMap(sums)
    }
}

impl RecordStore {
    /// Visible months, type universe and per-(type, month) sums for the
    /// current store contents.
    pub fn timeline(&self, options: TimelineOptions, today: CalendarMonth) -> Timeline {
        TimelineProcessor::new(&self.projects, options, today).process()
    }
}

#[cfg(test)]
mod tests {
    use crate::entities::Position;

    use super::*;

    fn m(year: i32, month: i64) -> CalendarMonth {
        CalendarMonth::new(year, month).unwrap()
    }

    fn position(
        position_type: &str,
        quantity: f64,
        start: CalendarMonth,
        end: CalendarMonth,
    ) -> Position {
        Position {
            description: format!("{position_type} role"),
            quantity,
            position_type: position_type.into(),
            start,
            end,
        }
    }

    fn project(
        name: &str,
        start: CalendarMonth,
        end: CalendarMonth,
        funded: bool,
        positions: Vec<Position>,
    ) -> Project {
        Project {
            name: name.into(),
            start,
            end,
            funded,
            positions,
        }
    }

    fn all_months() -> TimelineOptions {
        TimelineOptions {
            only_current_and_future: false,
            project_filter: ProjectFilter::All,
        }
    }

    #[test]
    fn sums_overlapping_positions_of_the_same_type() {
        let projects = vec![project(
            "Software",
            m(2024, 5),
            m(2024, 7),
            false,
            vec![
                position("Dev", 2.0, m(2024, 5), m(2024, 6)),
                position("Dev", 1.0, m(2024, 6), m(2024, 7)),
            ],
        )];
        let timeline = TimelineProcessor::new(&projects, all_months(), m(2030, 1)).process();
        assert_eq!(timeline.months, vec![m(2024, 5), m(2024, 6), m(2024, 7)]);
        assert_eq!(timeline.types, vec!["Dev".to_string()]);
        assert_eq!(timeline.sums.get(0, 0), 2.0);
        assert_eq!(timeline.sums.get(0, 1), 3.0);
        assert_eq!(timeline.sums.get(0, 2), 1.0);
        assert_eq!(timeline.sums.len(), 3);
    }

    #[test]
    fn types_keep_first_seen_order_across_projects() {
        let projects = vec![
            project(
                "A",
                m(2024, 1),
                m(2024, 2),
                false,
                vec![
                    position("Postdoc", 1.0, m(2024, 1), m(2024, 2)),
                    position("PhD", 0.5, m(2024, 1), m(2024, 2)),
                ],
            ),
            project(
                "B",
                m(2024, 1),
                m(2024, 2),
                false,
                vec![
                    position("Dev", 2.0, m(2024, 1), m(2024, 1)),
                    position("PhD", 1.0, m(2024, 2), m(2024, 2)),
                ],
            ),
        ];
        let timeline = TimelineProcessor::new(&projects, all_months(), m(2024, 1)).process();
        assert_eq!(timeline.types, vec!["Postdoc", "PhD", "Dev"]);
        assert_eq!(timeline.sums.get(1, 0), 0.5);
        assert_eq!(timeline.sums.get(1, 1), 1.5);
        assert_eq!(timeline.sums.get(2, 1), 0.0);
    }

    #[test]
    fn range_spans_earliest_start_to_latest_end() {
        let projects = vec![
            project("A", m(2024, 3), m(2024, 4), false, vec![]),
            project("B", m(2023, 12), m(2024, 2), false, vec![]),
        ];
        let timeline = TimelineProcessor::new(&projects, all_months(), m(2024, 1)).process();
        assert_eq!(timeline.months.first(), Some(&m(2023, 12)));
        assert_eq!(timeline.months.last(), Some(&m(2024, 4)));
        assert_eq!(timeline.months.len(), 5);
        assert!(timeline.types.is_empty());
        assert!(timeline.sums.is_empty());
    }

    #[test]
    fn current_and_future_clamps_start_to_today() {
        let projects = vec![project(
            "A",
            m(2024, 1),
            m(2024, 6),
            false,
            vec![position("Dev", 1.0, m(2024, 1), m(2024, 6))],
        )];
        let options = TimelineOptions::default();
        let timeline = TimelineProcessor::new(&projects, options, m(2024, 4)).process();
        assert_eq!(timeline.months, vec![m(2024, 4), m(2024, 5), m(2024, 6)]);
        assert_eq!(timeline.sums.get(0, 0), 1.0);

        // Today before the first month leaves the range untouched.
        let timeline = TimelineProcessor::new(&projects, options, m(2023, 1)).process();
        assert_eq!(timeline.months.len(), 6);
    }

    #[test]
    fn past_projects_in_current_and_future_mode_yield_no_months() {
        let projects = vec![project(
            "Old",
            m(2020, 1),
            m(2020, 6),
            false,
            vec![position("Dev", 1.0, m(2020, 1), m(2020, 6))],
        )];
        let timeline =
            TimelineProcessor::new(&projects, TimelineOptions::default(), m(2024, 1)).process();
        assert!(timeline.months.is_empty());
        assert!(timeline.sums.is_empty());
        assert_eq!(timeline.types, vec!["Dev"]);
    }

    #[test]
    fn funded_only_filter_restricts_every_output() {
        let projects = vec![
            project(
                "Unfunded",
                m(2023, 1),
                m(2024, 1),
                false,
                vec![position("Manager", 0.2, m(2023, 1), m(2024, 1))],
            ),
            project(
                "Funded",
                m(2024, 1),
                m(2024, 2),
                true,
                vec![position("Dev", 1.0, m(2024, 1), m(2024, 2))],
            ),
        ];
        let options = TimelineOptions {
            only_current_and_future: false,
            project_filter: ProjectFilter::FundedOnly,
        };
        let timeline = TimelineProcessor::new(&projects, options, m(2024, 1)).process();
        assert_eq!(timeline.project_indices, vec![1]);
        assert_eq!(timeline.months, vec![m(2024, 1), m(2024, 2)]);
        assert_eq!(timeline.types, vec!["Dev"]);
        assert_eq!(timeline.sum_for("Dev", &m(2024, 2)), 1.0);
        assert_eq!(timeline.sum_for("Manager", &m(2024, 1)), 0.0);
    }

    #[test]
    fn empty_store_yields_empty_timeline() {
        let store = RecordStore::new();
        let timeline = store.timeline(all_months(), m(2024, 1));
        assert_eq!(timeline, Timeline::default());
    }
}
