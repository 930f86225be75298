use chrono::{NaiveDateTime, SubsecRound, Utc};

/// Current UTC time, truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(0)
}

/// Postgres `TIMESTAMP` keeps microseconds; anything finer is dropped on write.
pub fn to_db_precision(dt: NaiveDateTime) -> NaiveDateTime {
    dt.trunc_subsecs(6)
}
