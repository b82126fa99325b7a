use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use classcue_models::{
    BulkCompleteRequest, BulkCompleteResponse, DayCode, LoginRequest, LoginResponse,
    MessageResponse, Period, Priority, Recurrence, RefreshTokenRequest, RegisterRequest, Reminder,
    SaveReminderDto, SaveSchoolSetupDto, ScheduleEntry, SchoolSetup, Term, User,
};
use classcue_schedule::{
    ClassifiedReminders, DashboardStats, DaySchedule, Diagnostic, DueState, ReminderRow,
    ScheduledPeriod, TodayView, WeekView,
};

use crate::modules::auth::model::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::refresh_token,
        crate::modules::auth::controller::logout_user,
        crate::modules::auth::controller::get_current_user,
        crate::modules::school_setup::controller::get_school_setup,
        crate::modules::school_setup::controller::save_school_setup,
        crate::modules::school_setup::controller::delete_school_setup,
        crate::modules::reminders::controller::get_reminders,
        crate::modules::reminders::controller::create_reminder,
        crate::modules::reminders::controller::get_reminder,
        crate::modules::reminders::controller::update_reminder,
        crate::modules::reminders::controller::delete_reminder,
        crate::modules::reminders::controller::toggle_complete,
        crate::modules::reminders::controller::bulk_complete,
        crate::modules::reminders::controller::get_past_due,
        crate::modules::schedule::controller::get_today,
        crate::modules::schedule::controller::get_week,
        crate::modules::schedule::controller::get_day,
        crate::modules::schedule::controller::get_dashboard,
    ),
    components(
        schemas(
            User,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            RefreshTokenRequest,
            MessageResponse,
            ErrorResponse,
            DayCode,
            Term,
            Period,
            ScheduleEntry,
            SchoolSetup,
            SaveSchoolSetupDto,
            Priority,
            Recurrence,
            Reminder,
            SaveReminderDto,
            BulkCompleteRequest,
            BulkCompleteResponse,
            DueState,
            Diagnostic,
            ReminderRow,
            ScheduledPeriod,
            DaySchedule,
            ClassifiedReminders,
            DashboardStats,
            TodayView,
            WeekView,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, sign-in and tokens"),
        (name = "School Setup", description = "Terms, periods, categories and teaching days"),
        (name = "Reminders", description = "Reminder management"),
        (name = "Schedule", description = "Today, week and dashboard views")
    ),
    info(
        title = "ClassCue API",
        version = "0.1.0",
        description = "Reminders and weekly schedules for teachers, built with Rust, Axum and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in [
            "/api/auth/login",
            "/api/school-setup",
            "/api/reminders/{id}/toggle-complete",
            "/api/reminders/bulk-complete",
            "/api/schedule/today",
            "/api/schedule/day/{code}",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {}",
                expected
            );
        }
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
