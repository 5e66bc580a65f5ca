pub mod infrastructure;
pub mod search_audio_use_case;
pub mod search_executor;
