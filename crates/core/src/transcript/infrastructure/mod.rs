pub mod whisper_cli_transcriber;
pub mod whisper_json_reader;
