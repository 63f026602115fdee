//! Game domain types.

pub mod bulls_cows;
