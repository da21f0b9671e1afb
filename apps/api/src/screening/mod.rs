// Resume screening: keyword extraction, scoring, ranking, narratives, export.
// All LLM calls go through llm_client via the Summarizer trait.

pub mod export;
pub mod handlers;
pub mod keywords;
pub mod matcher;
pub mod models;
pub mod normalizer;
pub mod pipeline;
pub mod prompts;
pub mod ranker;
pub mod stopwords;
pub mod summarizer;
