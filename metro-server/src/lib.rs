//! Metro trip router server.
//!
//! Loads a fixed transit network (stations connected by lines) and
//! answers: "what is the shortest route between two stations, and what
//! should the rider be told and charged for it?"

pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
pub mod ticket;
pub mod web;
