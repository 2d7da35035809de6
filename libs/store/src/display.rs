use core::fmt;

use axial_interval::{DiscreteValue, Interval, sequence::IntervalSequence as _};

use crate::{DataStore, ValidData};

/// Column widths count characters, matching how the formatter pads.
fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Renders one grid line: each cell left-padded to its column width.
fn write_line(
    fmt: &mut fmt::Formatter<'_>,
    cells: &[String],
    widths: &[usize],
) -> fmt::Result {
    for (cell, width) in cells.iter().zip(widths) {
        write!(fmt, "| {cell:<width$} ")?;
    }
    fmt.write_str("|\n")
}

/// A Gantt-style grid over the axis: the intervals as the header, one line
/// per row with its value beneath its interval.
///
/// Diagnostic output only; the exact layout is pinned by tests but carries no
/// compatibility promise.
impl<A, V> fmt::Display for DataStore<Interval<A>, V>
where
    A: DiscreteValue,
    V: Clone + Eq + core::hash::Hash + fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<&ValidData<Interval<A>, V>> = self.get_all().collect();
        let headers: Vec<String> = rows.iter().map(|row| row.interval.to_string()).collect();
        let values: Vec<String> = rows.iter().map(|row| format!("{:?}", row.value)).collect();
        let widths: Vec<usize> = headers
            .iter()
            .zip(&values)
            .map(|(header, value)| text_width(header).max(text_width(value)))
            .collect();

        write_line(fmt, &headers, &widths)?;
        for (position, value) in values.iter().enumerate() {
            let mut cells = vec![String::new(); position];
            cells.push(value.clone());
            write_line(fmt, &cells, &widths[..=position])?;
        }
        Ok(())
    }
}

/// A table keyed by the unique horizontal intervals: one column per atom of
/// the first axis, one line per row sorted by vertical end, each occupied
/// cell printing `value (vertical_interval)`.
impl<A, B, V> fmt::Display for DataStore<(Interval<A>, Interval<B>), V>
where
    A: DiscreteValue,
    B: DiscreteValue,
    V: Clone + Eq + core::hash::Hash + fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let horizontals: Vec<Interval<A>> = self
            .get_all()
            .map(|row| row.interval.0.clone())
            .collect::<Vec<_>>()
            .unique_intervals();
        let headers: Vec<String> = horizontals
            .iter()
            .map(ToString::to_string)
            .collect();

        let mut rows: Vec<&ValidData<(Interval<A>, Interval<B>), V>> = self.get_all().collect();
        rows.sort_by(|lhs, rhs| {
            let lhs = &lhs.interval.1;
            let rhs = &rhs.interval.1;
            lhs.end().cmp(rhs.end()).then_with(|| lhs.start().cmp(rhs.start()))
        });

        let lines: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                horizontals
                    .iter()
                    .map(|column| {
                        if row.interval.0.contains_interval(column) {
                            format!("{:?} {}", row.value, row.interval.1)
                        } else {
                            String::new()
                        }
                    })
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(column, header)| {
                lines
                    .iter()
                    .map(|line| text_width(&line[column]))
                    .chain([text_width(header)])
                    .max()
                    .unwrap_or_default()
            })
            .collect();

        write_line(fmt, &headers, &widths)?;
        for line in &lines {
            write_line(fmt, line, &widths)?;
        }
        Ok(())
    }
}
