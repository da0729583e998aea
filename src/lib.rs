//! HourSkill accounts — credential lifecycle and onboarding service.

pub mod config;
pub mod directory;
pub mod error;
pub mod onboarding;
pub mod password;
pub mod survey;
pub mod token;
