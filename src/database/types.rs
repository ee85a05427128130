use chrono::NaiveDateTime;

// Database row types that match the shift listing join
//
// One record per (shift time × position × assigned volunteer). Key and slot
// columns stay nullable here; the shift list aggregator rejects rows where
// they are missing instead of failing the decode.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ShiftTimeRow {
    pub shift_times_id: Option<i64>,
    pub time_position_id: Option<i64>,
    pub shiftboard_id: Option<i64>,
    pub slots: Option<i32>,
    pub shift_category_id: i64,
    pub department: Option<String>,
    pub shift_name: Option<String>,
    pub datename: Option<String>,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}
