// Text
pub mod clean;
pub mod tokenize;

// Markup
pub mod extract;
pub mod locate;

// Pipeline
pub mod batch;
pub mod fetch;
pub mod scrape;
