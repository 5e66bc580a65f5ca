pub mod domain;
pub mod phrase_spotter;
