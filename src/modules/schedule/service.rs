use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::{instrument, warn};

use classcue_core::AppError;
use classcue_models::{DayCode, Reminder, SchoolSetup, UserId};
use classcue_schedule::{
    DashboardStats, DaySchedule, Diagnostic, PeriodIndex, TodayView, WeekView,
};

use crate::metrics;
use crate::modules::reminders::service::ReminderService;
use crate::modules::school_setup::service::SchoolSetupService;

pub struct ScheduleService;

impl ScheduleService {
    async fn load(
        db: &PgPool,
        user_id: UserId,
    ) -> Result<(Option<SchoolSetup>, Vec<Reminder>), AppError> {
        tokio::try_join!(
            SchoolSetupService::get_school_setup(db, user_id),
            ReminderService::get_all_reminders(db, user_id),
        )
    }

    fn report(diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            warn!(%diagnostic, "Schedule data issue");
        }
        metrics::track_schedule_diagnostics(diagnostics.len());
    }

    #[instrument(skip(db))]
    pub async fn get_today(
        db: &PgPool,
        user_id: UserId,
        date: NaiveDate,
    ) -> Result<TodayView, AppError> {
        let (setup, reminders) = Self::load(db, user_id).await?;
        let view = TodayView::build(setup.as_ref(), &reminders, date);
        Self::report(&view.diagnostics);
        Ok(view)
    }

    #[instrument(skip(db))]
    pub async fn get_week(
        db: &PgPool,
        user_id: UserId,
        date: NaiveDate,
    ) -> Result<WeekView, AppError> {
        let (setup, reminders) = Self::load(db, user_id).await?;
        let view = WeekView::build(setup.as_ref(), &reminders, date);
        for day in &view.days {
            Self::report(&day.diagnostics);
        }
        Ok(view)
    }

    #[instrument(skip(db))]
    pub async fn get_day(
        db: &PgPool,
        user_id: UserId,
        day: DayCode,
    ) -> Result<DaySchedule, AppError> {
        let (setup, reminders) = Self::load(db, user_id).await?;
        let periods = setup.as_ref().map(|s| s.periods.as_slice()).unwrap_or_default();

        let mut schedule = DaySchedule::for_day(periods, &reminders, day);
        schedule.is_school_day = setup.as_ref().is_none_or(|s| s.teaches_on(day));
        Self::report(&schedule.diagnostics);
        Ok(schedule)
    }

    #[instrument(skip(db))]
    pub async fn get_dashboard(
        db: &PgPool,
        user_id: UserId,
        date: NaiveDate,
    ) -> Result<DashboardStats, AppError> {
        let (setup, reminders) = Self::load(db, user_id).await?;
        let periods = setup.as_ref().map(|s| s.periods.as_slice()).unwrap_or_default();
        let index = PeriodIndex::new(periods);
        let school_day = classcue_schedule::school_day_code(setup.as_ref(), date);
        let classification =
            classcue_schedule::classify_on(&reminders, date, school_day, Some(&index));
        Ok(DashboardStats::from_classification(&classification))
    }
}
