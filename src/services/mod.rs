pub mod fallback;
pub mod generation_service;
pub mod model_client;
pub mod normalizer;
pub mod notes;
pub mod prompt_builder;
pub mod session_service;
pub mod topic_extractor;
