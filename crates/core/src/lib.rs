pub mod matching;
pub mod pipeline;
pub mod report;
pub mod shared;
pub mod transcript;
