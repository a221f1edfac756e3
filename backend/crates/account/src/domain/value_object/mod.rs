//! Value Object Module

pub mod comment;
pub mod nickname;
pub mod password;
pub mod user_id;
pub mod validation;
