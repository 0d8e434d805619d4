//! Flower Care Analyzer
//!
//! This library provides the core functionality for the flower-care-analyzer
//! service, which identifies a flower from an uploaded photo and returns care
//! guidance produced by a hosted vision language model, validated against a
//! fixed schema before it reaches the caller.

pub mod app_state;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;
