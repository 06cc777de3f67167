//! Registry use-case services.
//!
//! # Responsibility
//! - Sequence existence gating, field validation and store writes into the
//!   public operation surface.
//! - Keep callers decoupled from storage details.

pub mod registry_service;
