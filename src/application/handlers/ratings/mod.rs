//! Rating command handlers.

mod update_ratings;

pub use update_ratings::{
    UpdateRatingsCommand, UpdateRatingsError, UpdateRatingsHandler, UpdateRatingsResult,
};
