// Resume screening: text extraction, eligibility evaluation, and the HTTP handlers
// that tie them together. Each uploaded document is screened independently.

pub mod batch;
pub mod criteria;
pub mod evaluator;
pub mod extractor;
pub mod handlers;
