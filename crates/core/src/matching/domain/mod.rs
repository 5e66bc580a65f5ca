pub mod lite_stemmer;
pub mod match_config;
pub mod phrase_matcher;
pub mod text_normalizer;
pub mod token_similarity;
pub mod transcript_windower;
