use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use classcue_models::{DayCode, PeriodId, Recurrence, ReminderId};

/// A non-fatal data-quality note produced while building a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A schedule start time could not be parsed; the period was sorted last.
    MalformedTime {
        period_id: PeriodId,
        period_name: String,
        day: DayCode,
        value: String,
        reason: String,
    },
    /// The reminder's recurrence has no defined relation to its due date;
    /// it was evaluated by its weekly days only.
    UnspecifiedRecurrence {
        reminder_id: ReminderId,
        recurrence: Recurrence,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MalformedTime {
                period_name,
                day,
                value,
                reason,
                ..
            } => write!(
                f,
                "period '{}' on {} has an unreadable start time '{}': {}",
                period_name, day, value, reason
            ),
            Diagnostic::UnspecifiedRecurrence {
                reminder_id,
                recurrence,
            } => write!(
                f,
                "reminder {} uses '{}' recurrence, evaluated by weekly days",
                reminder_id, recurrence
            ),
        }
    }
}
