//! Test doubles for the model client and the backoff timer.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::analysis::models::Section;
use crate::analysis::retry::Delay;
use crate::llm_client::{LlmError, TextGenerator};

/// Records requested waits instead of sleeping.
#[derive(Default)]
pub struct RecordingDelay {
    waits: Mutex<Vec<Duration>>,
}

impl RecordingDelay {
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().unwrap().clone()
    }
}

#[async_trait]
impl Delay for RecordingDelay {
    async fn wait(&self, duration: Duration) {
        self.waits.lock().unwrap().push(duration);
    }
}

/// Works out which section a prompt was built for from its opening line.
pub fn section_of(prompt: &str) -> Section {
    if prompt.contains("Analyze the skills") {
        Section::Skills
    } else if prompt.contains("Analyze the professional experience") {
        Section::Experience
    } else if prompt.contains("Analyze the education") {
        Section::Education
    } else {
        panic!("prompt does not belong to any section: {prompt}")
    }
}

/// Replies to each section from its own queue of scripted results.
///
/// A section with an empty queue repeats its `fallback` reply forever, or
/// fails with an API error when no fallback was set.
#[derive(Default)]
pub struct ScriptedGenerator {
    scripts: Mutex<HashMap<Section, VecDeque<Result<String, LlmError>>>>,
    fallback: Mutex<HashMap<Section, String>>,
    calls: Mutex<Vec<(Section, String)>>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same reply every time for every section.
    pub fn always(reply_for: impl Fn(Section) -> String) -> Self {
        let generator = Self::new();
        for section in Section::ALL {
            generator.set_fallback(section, reply_for(section));
        }
        generator
    }

    pub fn set_fallback(&self, section: Section, reply: String) {
        self.fallback.lock().unwrap().insert(section, reply);
    }

    pub fn push(&self, section: Section, reply: Result<String, LlmError>) {
        self.scripts
            .lock()
            .unwrap()
            .entry(section)
            .or_default()
            .push_back(reply);
    }

    pub fn calls_for(&self, section: Section) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _)| *s == section)
            .count()
    }

    pub fn prompts(&self) -> Vec<(Section, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let section = section_of(prompt);
        self.calls
            .lock()
            .unwrap()
            .push((section, prompt.to_string()));

        let scripted = self
            .scripts
            .lock()
            .unwrap()
            .get_mut(&section)
            .and_then(|queue| queue.pop_front());

        match scripted {
            Some(reply) => reply,
            None => self
                .fallback
                .lock()
                .unwrap()
                .get(&section)
                .cloned()
                .ok_or_else(|| LlmError::Api {
                    status: 500,
                    message: format!("no scripted reply for {section}"),
                }),
        }
    }
}
