pub mod artifact;
pub mod job;
