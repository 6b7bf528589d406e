/// Fixed Responder — Shared Library
///
/// This crate contains the response envelope types and the
/// responder logic used by the function handler in `api/`.
///
/// The handler in `api/` imports from this library to keep the
/// entry point thin and the logic testable in isolation.

pub mod models;
pub mod responder;
