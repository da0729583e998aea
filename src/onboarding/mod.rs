//! Onboarding flow: registration, login, role selection, survey submission.

pub mod model;
pub mod routes;
pub mod service;
