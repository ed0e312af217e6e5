//! Grouped Outlier Filter
//!
//! Rows are partitioned by the grouping column first; every partition then
//! gets its own fence from its own values. No fence ever sees another
//! group's rows.

use crate::fence::Fence;
use crate::OutlierError;
use dataset::{Cell, Column, ColumnAccess};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Split rows by the value of `key`, preserving row order inside each group.
///
/// Rows without a value for `key` are skipped; use [`ColumnAccess::has_column`]
/// first when that matters.
pub fn partition_by<R: ColumnAccess>(rows: &[R], key: Column) -> BTreeMap<Cell<'_>, Vec<&R>> {
    let mut groups: BTreeMap<Cell<'_>, Vec<&R>> = BTreeMap::new();
    for row in rows {
        if let Some(cell) = row.cell(key) {
            groups.entry(cell).or_default().push(row);
        }
    }
    groups
}

/// Interquartile outlier filter
#[derive(Debug, Clone, Copy)]
pub struct OutlierFilter {
    multiplier: f64,
}

impl OutlierFilter {
    /// Create a filter with a custom fence multiplier
    pub fn new(multiplier: f64) -> Self {
        Self { multiplier }
    }

    /// Keep the rows whose `target` value lies inside the fence of their
    /// `group_by` group.
    ///
    /// Output is grouped in ascending key order; rows keep their relative
    /// order within a group. A group may contribute no rows.
    pub fn filter<R: ColumnAccess + Clone>(
        &self,
        rows: &[R],
        target: &str,
        group_by: &str,
    ) -> Result<Vec<R>, OutlierError> {
        let target = resolve::<R>(target)?;
        let group_by = resolve::<R>(group_by)?;
        if !target.is_numeric() {
            return Err(OutlierError::NonNumericColumn(target));
        }

        let groups = partition_by(rows, group_by);
        let mut kept = Vec::with_capacity(rows.len());

        for (key, members) in &groups {
            let values = members
                .iter()
                .map(|row| numeric_value(*row, target))
                .collect::<Result<Vec<f64>, _>>()?;

            let Some(fence) = Fence::from_values(&values, self.multiplier) else {
                continue;
            };

            let before = kept.len();
            kept.extend(
                members
                    .iter()
                    .zip(&values)
                    .filter(|(_, v)| fence.contains(**v))
                    .map(|(row, _)| (*row).clone()),
            );
            debug!(
                "{}={}: fence [{:.2}, {:.2}] kept {} of {}",
                group_by,
                key,
                fence.lower,
                fence.upper,
                kept.len() - before,
                members.len()
            );
        }

        info!(
            "Outlier filter on {} by {}: kept {} of {} rows across {} groups",
            target,
            group_by,
            kept.len(),
            rows.len(),
            groups.len()
        );
        Ok(kept)
    }
}

impl Default for OutlierFilter {
    fn default() -> Self {
        Self::new(Fence::DEFAULT_MULTIPLIER)
    }
}

/// Look up a column by name and check the row type carries it
fn resolve<R: ColumnAccess>(name: &str) -> Result<Column, OutlierError> {
    name.parse::<Column>()
        .ok()
        .filter(|c| R::has_column(*c))
        .ok_or_else(|| OutlierError::InvalidColumn(name.to_string()))
}

fn numeric_value<R: ColumnAccess>(row: &R, column: Column) -> Result<f64, OutlierError> {
    match row.cell(column) {
        Some(Cell::Int(v)) => Ok(v as f64),
        Some(other) => Err(OutlierError::NonNumericValue {
            column,
            value: other.to_string(),
        }),
        None => Err(OutlierError::InvalidColumn(column.name().to_string())),
    }
}
