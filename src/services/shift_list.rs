//! Folds the flat shift listing join into one summary per shift time.
//!
//! The listing query returns one row per (shift time × position × assigned
//! volunteer). Rows of the same shift time are expected to be contiguous; the
//! [`ShiftGrouping`] policy decides what happens when they are not.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::database::models::{DepartmentRef, ShiftCategoryRef, ShiftSummary};
use crate::database::types::ShiftTimeRow;

/// How rows of a shift time that reappear after another shift time are grouped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShiftGrouping {
    /// Group by adjacency. A shift time that reappears later starts a second,
    /// duplicate summary and a warning is logged. Positions counted in an
    /// earlier run of that shift time do not add their slots again.
    #[default]
    Adjacent,
    /// Group by adjacency and fail on the first reappearing shift time.
    Strict,
    /// Group by shift time id regardless of row order, keeping first-seen order.
    Merged,
}

impl std::fmt::Display for ShiftGrouping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftGrouping::Adjacent => write!(f, "adjacent"),
            ShiftGrouping::Strict => write!(f, "strict"),
            ShiftGrouping::Merged => write!(f, "merged"),
        }
    }
}

impl std::str::FromStr for ShiftGrouping {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "adjacent" => Ok(ShiftGrouping::Adjacent),
            "strict" => Ok(ShiftGrouping::Strict),
            "merged" => Ok(ShiftGrouping::Merged),
            _ => Err(format!("Invalid shift grouping: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShiftListError {
    #[error("Malformed shift row {row}: {reason}")]
    MalformedRow { row: usize, reason: &'static str },

    #[error("Shift time {shift_times_id} reappears at row {row} after its rows ended")]
    OrderingViolation { shift_times_id: i64, row: usize },
}

// Validated keys of a single row.
#[derive(Debug, Clone, Copy)]
struct RowKey {
    shift_times_id: i64,
    time_position_id: i64,
    slots: u32,
    has_volunteer: bool,
}

impl RowKey {
    fn validate(row: &ShiftTimeRow, index: usize) -> Result<Self, ShiftListError> {
        let malformed = |reason| ShiftListError::MalformedRow { row: index, reason };

        let shift_times_id = row
            .shift_times_id
            .ok_or_else(|| malformed("shift_times_id is null"))?;
        let time_position_id = row
            .time_position_id
            .ok_or_else(|| malformed("time_position_id is null"))?;
        let slots = row.slots.ok_or_else(|| malformed("slots is null"))?;
        let slots = u32::try_from(slots).map_err(|_| malformed("slots is negative"))?;

        Ok(RowKey {
            shift_times_id,
            time_position_id,
            slots,
            has_volunteer: row.shiftboard_id.is_some(),
        })
    }
}

/// The summary under construction plus the positions already counted toward it.
struct ShiftAccumulator {
    summary: ShiftSummary,
    counted_positions: HashSet<i64>,
}

impl ShiftAccumulator {
    // The seeding row always contributes its slots, even for a position
    // already counted in an earlier run of the same shift time.
    fn seed(row: ShiftTimeRow, key: &RowKey, mut counted_positions: HashSet<i64>) -> Self {
        counted_positions.insert(key.time_position_id);

        let summary = ShiftSummary {
            id: key.shift_times_id,
            category: ShiftCategoryRef {
                id: row.shift_category_id,
            },
            department: DepartmentRef {
                name: row.department.unwrap_or_default(),
            },
            shift_type: row.shift_name.unwrap_or_default(),
            date_name: row.datename.unwrap_or_default(),
            start_time: row.start_time,
            end_time: row.end_time,
            slots_total: u64::from(key.slots),
            slots_filled: u64::from(key.has_volunteer),
        };

        ShiftAccumulator {
            summary,
            counted_positions,
        }
    }

    fn id(&self) -> i64 {
        self.summary.id
    }

    // A position repeats once per assigned volunteer; its capacity counts once.
    fn absorb(&mut self, key: &RowKey) {
        if self.counted_positions.insert(key.time_position_id) {
            self.summary.slots_total += u64::from(key.slots);
        }
        if key.has_volunteer {
            self.summary.slots_filled += 1;
        }
    }
}

/// Aggregates ordered listing rows into shift summaries in first-seen order.
///
/// Under [`ShiftGrouping::Adjacent`] and [`ShiftGrouping::Strict`] the caller
/// must deliver the rows of each shift time contiguously (the listing query
/// orders by shift time first). Empty input yields an empty list.
pub fn get_shift_list<I>(
    rows: I,
    grouping: ShiftGrouping,
) -> Result<Vec<ShiftSummary>, ShiftListError>
where
    I: IntoIterator<Item = ShiftTimeRow>,
{
    let summaries = match grouping {
        ShiftGrouping::Adjacent => fold_adjacent(rows, false)?,
        ShiftGrouping::Strict => fold_adjacent(rows, true)?,
        ShiftGrouping::Merged => fold_by_key(rows)?,
    };

    log::debug!(
        "Aggregated {} shift summaries (grouping: {})",
        summaries.len(),
        grouping
    );

    Ok(summaries)
}

fn fold_adjacent<I>(rows: I, strict: bool) -> Result<Vec<ShiftSummary>, ShiftListError>
where
    I: IntoIterator<Item = ShiftTimeRow>,
{
    let mut summaries = Vec::new();
    // Positions counted by finished groups, per shift time
    let mut closed: HashMap<i64, HashSet<i64>> = HashMap::new();
    let mut current: Option<ShiftAccumulator> = None;

    for (index, row) in rows.into_iter().enumerate() {
        let key = RowKey::validate(&row, index)?;

        if let Some(acc) = current.as_mut().filter(|acc| acc.id() == key.shift_times_id) {
            acc.absorb(&key);
            continue;
        }

        let prior = closed.remove(&key.shift_times_id);
        if prior.is_some() {
            if strict {
                return Err(ShiftListError::OrderingViolation {
                    shift_times_id: key.shift_times_id,
                    row: index,
                });
            }
            log::warn!(
                "Shift time {} reappears at row {}; emitting a duplicate summary",
                key.shift_times_id,
                index
            );
        }

        let seeded = ShiftAccumulator::seed(row, &key, prior.unwrap_or_default());
        if let Some(finished) = current.replace(seeded) {
            closed.insert(finished.id(), finished.counted_positions);
            summaries.push(finished.summary);
        }
    }

    if let Some(finished) = current {
        summaries.push(finished.summary);
    }

    Ok(summaries)
}

fn fold_by_key<I>(rows: I) -> Result<Vec<ShiftSummary>, ShiftListError>
where
    I: IntoIterator<Item = ShiftTimeRow>,
{
    let mut groups: Vec<ShiftAccumulator> = Vec::new();
    let mut positions: HashMap<i64, usize> = HashMap::new();

    for (index, row) in rows.into_iter().enumerate() {
        let key = RowKey::validate(&row, index)?;

        match positions.get(&key.shift_times_id) {
            Some(&position) => groups[position].absorb(&key),
            None => {
                positions.insert(key.shift_times_id, groups.len());
                groups.push(ShiftAccumulator::seed(row, &key, HashSet::new()));
            }
        }
    }

    Ok(groups.into_iter().map(|acc| acc.summary).collect())
}
