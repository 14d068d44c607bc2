//! Intercom Core
//!
//! Core types and wire handling for the Intercom REST API client.
//!
//! This crate contains:
//! - Domain types: the entities callers work with (User, Contact, Company, ...)
//! - DTOs: the wire shapes sent to and received from the API
//! - Codec: normalization of the dual-typed `id` field
//! - Identifiers: lookup records and the route resolver
//! - Mapper: conversion between domain and wire representations

pub mod codec;
pub mod domain;
pub mod dto;
pub mod identifiers;
pub mod mapper;
pub mod query;

pub use codec::{WireError, WireId};
pub use identifiers::{CompanyIdentifiers, MissingIdentifier, Route, UserIdentifiers};
pub use mapper::{FromWire, ToWire, decode, decode_conversion};
pub use query::{Query, ToQuery};
