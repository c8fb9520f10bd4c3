pub mod client;
pub mod speech_synthesizer;

pub use client::ElevenLabsClient;
pub use speech_synthesizer::SpeechSynthesizerElevenLabs;
