pub const AUDIO_EXTENSIONS: &[&str] = &[
    "wav", "mp3", "flac", "ogg", "m4a", "aac", "opus", "wma", "mp4", "webm",
];

pub const DEFAULT_WHISPER_BINARY: &str = "whisper-cli";
pub const DEFAULT_LANGUAGE: &str = "en";

/// File stem whisper writes its JSON under, inside a scratch directory.
pub const WHISPER_OUTPUT_STEM: &str = "transcript";
