//! GoTrip – travel reservation management.
//!
//! A small server-rendered web application for listing, creating, editing
//! and deleting travel bookings, backed by a single MySQL table.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `db`: Database connection and pool management.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers and router assembly.
//! - `models`: Core data models.
//! - `repository`: Database operations over reservations.
//! - `validation`: Reservation field validation.
//! - `views`: Server-rendered HTML pages.

pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod validation;
pub mod views;
