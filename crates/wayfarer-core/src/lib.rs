//! # wayfarer-core
//!
//! Core types, ID generation, and error types for Wayfarer.
//!
//! This crate provides the foundational types shared across all Wayfarer crates:
//! - Entity structs for stored records (clients, itineraries) and their daily plans
//! - Weather wire types reshaped from the upstream provider
//! - Recommendation result types returned by the AI proxy
//! - Enums for entity kinds, exploration modes, and outdoor ratings
//! - Timestamp-based ID generation
//! - Shallow-merge updates over the [`record::Record`] trait
//! - Activity advice and weather-driven daily plan assembly
//! - HTTP response envelopes

pub mod advice;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod planning;
pub mod record;
pub mod responses;
