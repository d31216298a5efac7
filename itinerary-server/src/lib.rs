//! Real-time itinerary planner server.
//!
//! A web application that answers: "Which trains can I take from here
//! to there, starting now?" using the live GTFS-Realtime feed.

pub mod domain;
pub mod feed;
pub mod format;
pub mod planner;
pub mod reference;
pub mod service;
pub mod web;
