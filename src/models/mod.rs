//! Data types for the fixed response contract.
//!
//! These types are shared between the responder and the function handler.

pub mod response;
