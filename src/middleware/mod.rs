//! Request extractors shared by the feature modules.
//!
//! - [`auth`]: bearer-token authentication ([`auth::AuthUser`])
//!
//! Every route outside `/api/auth/{register,login,refresh}` takes an
//! `AuthUser`, so a missing or invalid token is rejected with 401 before the
//! handler runs. All data access is then scoped to `AuthUser::user_id`.

pub mod auth;
