// Brand health: completeness, consistency, uniqueness and relevance scoring,
// threshold-based insights, and the service that fetches and persists them.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod handlers;
pub mod insights;
pub mod models;
pub mod scoring;
pub mod service;
