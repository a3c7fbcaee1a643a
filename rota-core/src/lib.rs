//! Core types for the rota ecosystem.
//!
//! This crate provides everything the rota CLI needs short of terminal
//! rendering:
//! - weekly slot types and the `ScheduleEntry` persisted/draft union
//! - overlap detection for proposed schedules (`conflict`)
//! - schedule reconciliation against the backend's stored state (`diff`)
//! - the thin REST client for the school backend (`remote`)
//! - classroom directory and configuration management

pub mod classroom;
pub mod classroom_config;
pub mod conflict;
pub mod diff;
pub mod error;
pub mod remote;
pub mod rota;
pub mod rota_config;
pub mod slot;
