//! Profile Module
//!
//! Developer profiles, one per user, with embedded experience and
//! education entries. Listing and per-user lookup are public; everything
//! else acts on the requester's own profile.

pub mod db;
pub mod handlers;
pub mod service;
pub mod types;

pub use types::{EducationRequest, ExperienceRequest, MessageResponse, ProfileRequest};
