use anyhow::Result;
use sqlx::PgPool;

use crate::database::models::ShiftListQuery;
use crate::database::types::ShiftTimeRow;

// Leading sort key keeps the rows of each shift time contiguous.
const SHIFT_ROWS_QUERY: &str = r#"
    SELECT
        st.shift_times_id,
        stp.time_position_id,
        vs.shiftboard_id,
        stp.slots,
        sn.shift_category_id,
        sc.category AS department,
        sn.shift_name,
        d.datename,
        st.start_time,
        st.end_time
    FROM op_shift_times st
    INNER JOIN op_shift_name sn ON sn.shift_name_id = st.shift_name_id
    INNER JOIN op_shift_category sc ON sc.shift_category_id = sn.shift_category_id
    INNER JOIN op_shift_time_position stp ON stp.shift_times_id = st.shift_times_id
    LEFT JOIN op_dates d ON d.date = st.date
    LEFT JOIN op_volunteer_shifts vs
        ON vs.time_position_id = stp.time_position_id AND vs.remove_shift = false
    WHERE sn.remove_shift_name = false
        AND ($1::BIGINT IS NULL OR sn.shift_category_id = $1)
        AND ($2::TIMESTAMP IS NULL OR st.start_time >= $2)
        AND ($3::TIMESTAMP IS NULL OR st.end_time <= $3)
    ORDER BY st.start_time, st.shift_times_id, stp.time_position_id, vs.shiftboard_id
"#;

#[derive(Clone)]
pub struct ShiftRepository {
    pool: PgPool,
}

impl ShiftRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the flat shift listing rows, one per shift time, position and assigned volunteer.
    pub async fn get_shift_rows(&self, query: &ShiftListQuery) -> Result<Vec<ShiftTimeRow>> {
        let rows = sqlx::query_as::<_, ShiftTimeRow>(SHIFT_ROWS_QUERY)
            .bind(query.category_id)
            .bind(query.from)
            .bind(query.to)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}
