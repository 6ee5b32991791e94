//! HTTP handlers for the owner record controller.

pub mod owners;
