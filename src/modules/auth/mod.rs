//! Account registration, sign-in, token refresh and sign-out.
//!
//! Sign-in issues a short-lived access token plus a refresh token whose
//! `jti` is recorded in `refresh_tokens`. Refreshing rotates that record;
//! signing out revokes it.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
