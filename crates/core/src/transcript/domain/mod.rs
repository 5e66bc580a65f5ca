pub mod segment;
pub mod time_parser;
pub mod transcriber;
pub mod transcript;
pub mod transcript_reader;
pub mod word_hit;
