use crate::entities::{CalendarMonth, Project, Timeline};

use super::utils::{format_quantity, format_row};

/// Plain-text rendering of a timeline: one row per visible month, one column
/// per covered project, and a final column with the per-type sums.
pub(crate) struct TimelineTablePrinter;

impl TimelineTablePrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print_table(&self, projects: &[Project], timeline: &Timeline) -> String {
        let columns: Vec<&Project> = timeline
            .project_indices
            .iter()
            .filter_map(|&i| projects.get(i))
            .collect();

        let mut rows: Vec<Vec<String>> = Vec::with_capacity(timeline.months.len() + 1);
        rows.push(
            std::iter::once("Month".to_string())
                .chain(columns.iter().map(|p| self.project_header(p)))
                .chain(std::iter::once("Sum per type".to_string()))
                .collect(),
        );
        for (month_index, month) in timeline.months.iter().enumerate() {
            rows.push(
                std::iter::once(month.short_label())
                    .chain(columns.iter().map(|p| self.project_cell(p, month)))
                    .chain(std::iter::once(self.sum_cell(timeline, month_index)))
                    .collect(),
            );
        }

        let column_count = columns.len() + 2;
        let widths: Vec<usize> = (0..column_count)
            .map(|c| {
                rows.iter()
                    .map(|row| row[c].chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut output = String::new();
        for (i, row) in rows.iter().enumerate() {
            output.push_str(&format_row(row, &widths));
            output.push('\n');
            if i == 0 {
                let rule_width = widths.iter().sum::<usize>() + 3 * (column_count - 1);
                output.push_str(&"-".repeat(rule_width));
                output.push('\n');
            }
        }
        output
    }

    fn project_header(&self, project: &Project) -> String {
        format!(
            "{}{} ({} - {})",
            project.name,
            if project.funded { " [funded]" } else { "" },
            project.start.short_label(),
            project.end.short_label(),
        )
    }

    fn project_cell(&self, project: &Project, month: &CalendarMonth) -> String {
        project
            .active_positions(month)
            .map(|(_, p)| format!("{} #{}", p.position_type, format_quantity(p.quantity)))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn sum_cell(&self, timeline: &Timeline, month_index: usize) -> String {
        timeline
            .types
            .iter()
            .enumerate()
            .map(|(type_index, t)| {
                format!(
                    "{}: {}",
                    t,
                    format_quantity(timeline.sums.get(type_index, month_index))
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
