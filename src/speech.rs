//! Best-effort pronunciation playback through the host's speech synthesizer.

use crate::logger;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Something that can read a pronunciation aloud.
pub trait Speaker {
    fn is_available(&self) -> bool;

    /// Fire and forget; failures are only logged.
    fn speak(&self, text: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Engine {
    EspeakNg,
    Espeak,
    Say,
}

impl Engine {
    fn program(self) -> &'static str {
        match self {
            Engine::EspeakNg => "espeak-ng",
            Engine::Espeak => "espeak",
            Engine::Say => "say",
        }
    }

    /// Arguments for speaking at 0.8x the default rate with a Hindi voice.
    fn args(self, text: &str) -> Vec<String> {
        match self {
            Engine::EspeakNg | Engine::Espeak => vec![
                "-v".to_string(),
                "hi".to_string(),
                "-s".to_string(),
                "140".to_string(),
                text.to_string(),
            ],
            Engine::Say => vec!["-r".to_string(), "140".to_string(), text.to_string()],
        }
    }
}

#[derive(Debug, Clone)]
pub struct SystemSpeaker {
    engine: Option<(Engine, PathBuf)>,
}

impl SystemSpeaker {
    pub fn detect() -> Self {
        let path = std::env::var_os("PATH").unwrap_or_default();
        let dirs: Vec<PathBuf> = std::env::split_paths(&path).collect();
        Self::detect_in(&dirs)
    }

    fn detect_in(dirs: &[PathBuf]) -> Self {
        let engine = [Engine::EspeakNg, Engine::Espeak, Engine::Say]
            .into_iter()
            .find_map(|engine| find_program(dirs, engine.program()).map(|p| (engine, p)));
        Self { engine }
    }
}

fn find_program(dirs: &[PathBuf], name: &str) -> Option<PathBuf> {
    dirs.iter()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

impl Speaker for SystemSpeaker {
    fn is_available(&self) -> bool {
        self.engine.is_some()
    }

    fn speak(&self, text: &str) {
        let Some((engine, program)) = &self.engine else {
            return;
        };
        if text.trim().is_empty() {
            return;
        }

        match Command::new(program)
            .args(engine.args(text))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(mut child) => {
                std::thread::spawn(move || {
                    let _ = child.wait();
                });
            }
            Err(e) => logger::log(&format!("Speech synthesis failed: {}", e)),
        }
    }
}

/// Used when playback is muted or unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Speaker for Silent {
    fn is_available(&self) -> bool {
        false
    }

    fn speak(&self, _text: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_in_empty_path() {
        let speaker = SystemSpeaker::detect_in(&[]);
        assert!(!speaker.is_available());
        speaker.speak("Namaste");
    }

    #[test]
    fn test_detect_prefers_espeak_ng() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("espeak"), b"").unwrap();
        std::fs::write(dir.path().join("espeak-ng"), b"").unwrap();
        let speaker = SystemSpeaker::detect_in(&[dir.path().to_path_buf()]);
        assert!(speaker.is_available());
        assert_eq!(speaker.engine.as_ref().unwrap().0, Engine::EspeakNg);
    }

    #[test]
    fn test_engine_args_include_text() {
        let args = Engine::Say.args("Dhanyawad");
        assert_eq!(args.last().unwrap(), "Dhanyawad");
        assert!(Engine::Espeak.args("x").contains(&"hi".to_string()));
    }

    #[test]
    fn test_silent_speaker() {
        assert!(!Silent.is_available());
        Silent.speak("Vanakkam");
    }
}
