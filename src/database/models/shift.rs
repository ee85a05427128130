use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCategoryRef {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentRef {
    pub name: String,
}

/// One shift time with its staffing totals, as returned by the shift listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftSummary {
    pub id: i64,
    pub category: ShiftCategoryRef,
    pub department: DepartmentRef,
    #[serde(rename = "type")]
    pub shift_type: String,
    pub date_name: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub slots_total: u64,
    pub slots_filled: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftListQuery {
    pub category_id: Option<i64>,
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
}

impl ShiftListQuery {
    /// Returns an error message when the time window is inverted.
    pub fn validate(&self) -> Result<(), String> {
        match (self.from, self.to) {
            (Some(from), Some(to)) if from > to => Err(format!(
                "Invalid time window: 'from' ({}) is after 'to' ({})",
                from, to
            )),
            _ => Ok(()),
        }
    }
}
