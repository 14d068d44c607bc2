//! Core domain types
//!
//! The entities callers work with. Values are immutable snapshots: every
//! repository call returns a fresh copy and nothing here is shared between
//! calls.
//!
//! String attributes use the empty string for "unset". Numeric attributes,
//! timestamps and flags are `Option`s so that an explicit `0` or `false`
//! survives the trip to the wire.

pub mod admin;
pub mod company;
pub mod contact;
pub mod message;
pub mod pages;
pub mod person;
pub mod segment;
pub mod tag;
pub mod user;
