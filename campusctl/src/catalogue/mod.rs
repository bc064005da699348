//! Catalogue scraper and summarizer pipeline.
//!
//! Two outbound flows against the public book catalogue:
//!
//! - [`scrape`]: walks the paginated listing, extracts structured book
//!   records and hands them back for one bulk insert.
//! - [`summary`]: fetches a single book page, extracts title/description and
//!   forwards them to an OpenAI-compatible chat-completions endpoint.
//!
//! Both flows share the application's `reqwest` client. No timeouts are
//! configured on it, so a hanging remote stalls the calling request; callers
//! own that trade-off.

pub mod scrape;
pub mod summary;
