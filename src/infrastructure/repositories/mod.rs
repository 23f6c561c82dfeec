pub mod openai_chat;
pub mod openai_relevance_repository;
pub mod openai_suggestion_repository;
pub mod session_repository;

pub use openai_chat::OpenAiChat;
pub use openai_relevance_repository::OpenAiRelevanceRepository;
pub use openai_suggestion_repository::OpenAiSuggestionRepository;
pub use session_repository::SessionRepository;
