//! School setup models live in `classcue-models`; re-exported here for the
//! controller and service.

pub use classcue_models::school_setup::*;

pub(crate) const SCHOOL_SETUP_COLUMNS: &str =
    "user_id, terms, periods, categories, school_days, created_at, updated_at";
