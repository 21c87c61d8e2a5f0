use base64::Engine;
use tracing::warn;

/// Text returned for every decodable clip
pub const PLACEHOLDER_TRANSCRIPT: &str =
    "这是一个语音转文字的测试。今天天气很好，我想记录一下这个美好的时刻。";

/// Text returned when the clip is not valid base64
pub const FALLBACK_TRANSCRIPT: &str = "无法识别语音内容";

/// Placeholder speech-to-text
pub fn transcribe(audio_base64: &str) -> String {
    match base64::engine::general_purpose::STANDARD.decode(audio_base64) {
        Ok(_) => PLACEHOLDER_TRANSCRIPT.to_string(),
        Err(e) => {
            warn!("Error processing audio: {}", e);
            FALLBACK_TRANSCRIPT.to_string()
        }
    }
}
