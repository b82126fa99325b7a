//! Reminder models live in `classcue-models`; re-exported here along with
//! the column list shared by every reminder query.

pub use classcue_models::reminders::*;

pub(crate) const REMINDER_COLUMNS: &str = "id, user_id, title, period_id, days, timing, \
     reminder_type, priority, category, recurrence, due_date, completed, term_id, notes, \
     created_at, updated_at";
