//! # ClassCue Auth
//!
//! Authentication types and JWT utilities for the ClassCue API.
//!
//! - [`claims`]: JWT claim structures for access and refresh tokens
//! - [`jwt`]: Token creation and verification utilities
//!
//! A teacher signs in once and receives two tokens:
//!
//! - **Access Token** ([`Claims`]): short-lived, sent as `Authorization: Bearer`
//! - **Refresh Token** ([`RefreshTokenClaims`]): long-lived, identified by a
//!   `jti` that the server records so sign-out can revoke it
//!
//! # Example
//!
//! ```ignore
//! use classcue_auth::{create_access_token, verify_token};
//! use classcue_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(user_id, "teacher@school.edu", &config)?;
//! let claims = verify_token(&token, &config)?;
//! ```

pub mod claims;
pub mod jwt;

pub use claims::{Claims, RefreshTokenClaims};
pub use jwt::{create_access_token, create_refresh_token, verify_refresh_token, verify_token};
