//! Core types shared across Clear facilities
//!
//! This crate provides the canonical field keys and event names used by
//! both the error and logging facilities, so that every crate emits the
//! same structured log schema.

pub mod schema;
