use crate::{entities::Timeline, errors::TimelineError};

use super::utils::format_quantity;

fn csv_error(e: impl std::fmt::Display) -> TimelineError {
    TimelineError::Csv {
        details: e.to_string(),
    }
}

pub(crate) struct TimelineCsvExporter;

impl TimelineCsvExporter {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Header `month,<type...>`, then one row per visible month with the
    /// month in canonical form and the two-decimal sum of every type.
    pub(crate) fn export(&self, timeline: &Timeline) -> Result<String, TimelineError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(
                std::iter::once("month").chain(timeline.types.iter().map(String::as_str)),
            )
            .map_err(csv_error)?;
        for (month_index, month) in timeline.months.iter().enumerate() {
            let row = std::iter::once(month.to_string()).chain(
                (0..timeline.types.len())
                    .map(|type_index| format_quantity(timeline.sums.get(type_index, month_index))),
            );
            writer.write_record(row).map_err(csv_error)?;
        }
        let bytes = writer.into_inner().map_err(csv_error)?;
        String::from_utf8(bytes).map_err(csv_error)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::entities::{CalendarMonth, SumKey, SumMap};

    use super::*;

    #[test]
    fn writes_header_and_one_row_per_month() {
        let timeline = Timeline {
            project_indices: vec![0],
            months: vec![
                CalendarMonth::new(2024, 5).unwrap(),
                CalendarMonth::new(2024, 6).unwrap(),
            ],
            types: vec!["Dev".into(), "Lead, Senior".into()],
            sums: SumMap(HashMap::from([
                (
                    SumKey {
                        type_index: 0,
                        month_index: 0,
                    },
                    2.0,
                ),
                (
                    SumKey {
                        type_index: 1,
                        month_index: 1,
                    },
                    0.25,
                ),
            ])),
        };
        let csv = TimelineCsvExporter::new().export(&timeline).unwrap();
        assert_eq!(
            csv,
            "month,Dev,\"Lead, Senior\"\n2024-05,2.00,0.00\n2024-06,0.00,0.25\n"
        );
    }

    #[test]
    fn empty_timeline_has_only_a_header() {
        let csv = TimelineCsvExporter::new().export(&Timeline::default()).unwrap();
        assert_eq!(csv, "month\n");
    }
}
