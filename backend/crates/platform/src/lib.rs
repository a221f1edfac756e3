//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Encoding and comparison utilities (Base64, constant-time equality)
//! - HTTP Basic authentication header parsing

pub mod basic_auth;
pub mod crypto;
