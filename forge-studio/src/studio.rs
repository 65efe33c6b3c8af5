use std::{fmt, time::SystemTime};

use pixelforge_core::{Breakpoint, DesignTokens, GeneratedArtifact, GenerationSettings, Platform};
use pixelforge_preview::RenderRequest;

use crate::{ChatMessage, DesignModel, HistoryEntry, ModelError, Role};

/// Reply appended to the chat after a successful refinement.
pub const REFINE_REPLY: &str = "Updated!";

const EXPORT_STEM: &str = "pixel-perfect-code";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessingStatus {
    #[default]
    Idle,
    Generating,
    Refining,
    Complete,
    Error,
}

impl ProcessingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingStatus::Idle => "idle",
            ProcessingStatus::Generating => "generating",
            ProcessingStatus::Refining => "refining",
            ProcessingStatus::Complete => "complete",
            ProcessingStatus::Error => "error",
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, ProcessingStatus::Generating | ProcessingStatus::Refining)
    }
}

impl fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generation session: the current artifact, its history and the
/// refinement chat, driven by a [`DesignModel`].
///
/// Model failures never escape as panics and never touch the current
/// artifact.
pub struct Studio<M> {
    model: M,
    settings: GenerationSettings,
    artifact: Option<GeneratedArtifact>,
    status: ProcessingStatus,
    error: Option<String>,
    history: Vec<HistoryEntry>,
    chat: Vec<ChatMessage>,
    next_id: u64,
}

impl<M: DesignModel> Studio<M> {
    pub fn new(model: M, settings: GenerationSettings) -> Self {
        Self {
            model,
            settings,
            artifact: None,
            status: ProcessingStatus::Idle,
            error: None,
            history: Vec::new(),
            chat: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate code from an image data URL.
    ///
    /// Starts a new conversation. On failure the status becomes
    /// [`ProcessingStatus::Error`] and the message is kept for display.
    pub async fn generate(&mut self, image_data_url: &str) -> Result<&GeneratedArtifact, ModelError> {
        self.status = ProcessingStatus::Generating;
        self.error = None;
        self.chat.clear();

        let generated = self.model.generate(image_data_url, &self.settings).await;
        match generated {
            Ok(artifact) if artifact.code.trim().is_empty() => {
                Err(self.fail_generation(ModelError::EmptyResponse))
            }
            Ok(artifact) => {
                tracing::debug!(
                    framework = self.settings.framework.slug(),
                    bytes = artifact.code.len(),
                    "generated code"
                );
                self.push_history(artifact.code.clone(), artifact.tokens.clone());
                self.status = ProcessingStatus::Complete;
                Ok(&*self.artifact.insert(artifact))
            }
            Err(e) => Err(self.fail_generation(e)),
        }
    }

    /// Refine the current code with a chat instruction.
    ///
    /// Returns `None` when there is nothing to refine yet. A failed refinement
    /// leaves the code as it was and returns the studio to
    /// [`ProcessingStatus::Complete`].
    pub async fn refine(&mut self, instruction: &str) -> Option<Result<&str, ModelError>> {
        let code = self.artifact.as_ref()?.code.clone();

        self.push_message(Role::User, instruction);
        self.status = ProcessingStatus::Refining;

        let refined = self.model.refine(&code, instruction, &self.settings).await;
        self.status = ProcessingStatus::Complete;
        let outcome = match refined {
            Ok(new_code) => {
                self.push_message(Role::Assistant, REFINE_REPLY);
                let tokens = self.artifact.as_ref().and_then(|a| a.tokens.clone());
                self.push_history(new_code.clone(), tokens);
                let artifact = self.artifact.as_mut()?;
                artifact.code = new_code;
                Ok(artifact.code.as_str())
            }
            Err(e) => {
                tracing::warn!(error = %e, "refinement failed, keeping previous code");
                Err(e)
            }
        };
        Some(outcome)
    }

    /// Bring back the code of a history entry. Tokens are restored only when
    /// the entry has them.
    pub fn restore(&mut self, id: u64) -> Option<&GeneratedArtifact> {
        let entry = self.history.iter().find(|entry| entry.id == id)?.clone();
        let artifact = self.artifact.get_or_insert_with(GeneratedArtifact::default);
        artifact.code = entry.code;
        if let Some(tokens) = entry.tokens {
            artifact.tokens = Some(tokens);
        }
        Some(&*artifact)
    }

    pub fn set_settings(&mut self, settings: GenerationSettings) {
        self.settings = settings;
    }

    /// Switch platform, coercing the framework to one the platform offers.
    pub fn set_platform(&mut self, platform: Platform) {
        self.settings = self.settings.with_platform(platform);
    }

    /// Suggested file name for downloading the current code.
    pub fn export_file_name(&self) -> String {
        format!(
            "{}.{}",
            EXPORT_STEM,
            self.settings.framework.file_extension()
        )
    }

    /// Request for previewing the current code, if there is any.
    pub fn render_request(&self, breakpoint: Breakpoint) -> Option<RenderRequest<'_>> {
        self.artifact
            .as_ref()
            .map(|a| RenderRequest::new(&a.code, self.settings.framework, breakpoint))
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    pub fn artifact(&self) -> Option<&GeneratedArtifact> {
        self.artifact.as_ref()
    }

    pub fn status(&self) -> ProcessingStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// History entries, newest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn chat(&self) -> &[ChatMessage] {
        &self.chat
    }

    fn fail_generation(&mut self, error: ModelError) -> ModelError {
        tracing::warn!(error = %error, "generation failed");
        self.status = ProcessingStatus::Error;
        self.error = Some(error.to_string());
        error
    }

    fn push_history(&mut self, code: String, tokens: Option<DesignTokens>) {
        let id = self.take_id();
        self.history.insert(
            0,
            HistoryEntry {
                id,
                code,
                tokens,
                created_at: SystemTime::now(),
            },
        );
    }

    fn push_message(&mut self, role: Role, content: &str) {
        let id = self.take_id();
        self.chat.push(ChatMessage {
            id,
            role,
            content: content.to_string(),
        });
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
