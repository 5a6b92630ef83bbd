// Dashboard session: uploaded JDs, completed analyses, filtering and analytics.
// Everything is in memory; the analysis workflow never touches it.

pub mod analytics;
pub mod handlers;
pub mod store;
