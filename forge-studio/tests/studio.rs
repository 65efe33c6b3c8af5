use async_trait::async_trait;
use pixelforge_core::{
    Breakpoint, ColorToken, DesignTokens, Framework, GeneratedArtifact, GenerationSettings,
    Platform,
};
use pixelforge_studio::{DesignModel, ModelError, ProcessingStatus, REFINE_REPLY, Role, Studio};

/// Model with canned answers; `None` means the call fails.
#[derive(Default)]
struct CannedModel {
    artifact: Option<GeneratedArtifact>,
    refined: Option<String>,
}

#[async_trait]
impl DesignModel for CannedModel {
    async fn generate(
        &self,
        _image_data_url: &str,
        _settings: &GenerationSettings,
    ) -> Result<GeneratedArtifact, ModelError> {
        self.artifact
            .clone()
            .ok_or_else(|| ModelError::Request("network unreachable".to_string()))
    }

    async fn refine(
        &self,
        code: &str,
        instruction: &str,
        _settings: &GenerationSettings,
    ) -> Result<String, ModelError> {
        match &self.refined {
            Some(refined) => Ok(format!("{refined} // {instruction} <- {}", code.len())),
            None => Err(ModelError::EmptyResponse),
        }
    }
}

fn tokens() -> DesignTokens {
    DesignTokens {
        colors: vec![ColorToken {
            name: "Primary".to_string(),
            hex: "#3b82f6".to_string(),
        }],
        ..Default::default()
    }
}

fn working_model() -> CannedModel {
    CannedModel {
        artifact: Some(GeneratedArtifact::new("export default () => <p/>").with_tokens(tokens())),
        refined: Some("export default () => <h1/>".to_string()),
    }
}

#[tokio::test]
async fn test_generate_stores_artifact_and_history() {
    let mut studio = Studio::new(working_model(), GenerationSettings::default());

    let artifact = studio.generate("data:image/png;base64,AAAA").await.unwrap();
    assert_eq!(artifact.code, "export default () => <p/>");

    assert_eq!(studio.status(), ProcessingStatus::Complete);
    assert_eq!(studio.history().len(), 1);
    assert_eq!(studio.history()[0].tokens, Some(tokens()));
    assert!(studio.error().is_none());
}

#[tokio::test]
async fn test_failed_generation_reports_error() {
    let mut failing = Studio::new(CannedModel::default(), GenerationSettings::default());
    let err = failing.generate("img").await.unwrap_err();
    assert_eq!(err, ModelError::Request("network unreachable".to_string()));
    assert_eq!(failing.status(), ProcessingStatus::Error);
    assert_eq!(
        failing.error(),
        Some("Model request failed: network unreachable")
    );
    assert!(failing.artifact().is_none());
    assert!(failing.history().is_empty());
}

#[tokio::test]
async fn test_blank_generation_is_an_empty_response() {
    let model = CannedModel {
        artifact: Some(GeneratedArtifact::new("  \n")),
        refined: None,
    };
    let mut studio = Studio::new(model, GenerationSettings::default());

    assert_eq!(
        studio.generate("img").await.unwrap_err(),
        ModelError::EmptyResponse
    );
    assert_eq!(studio.status(), ProcessingStatus::Error);
}

#[tokio::test]
async fn test_refine_without_artifact_is_noop() {
    let mut studio = Studio::new(working_model(), GenerationSettings::default());
    assert!(studio.refine("make it blue").await.is_none());
    assert!(studio.chat().is_empty());
    assert_eq!(studio.status(), ProcessingStatus::Idle);
}

#[tokio::test]
async fn test_refine_updates_code_chat_and_history() {
    let mut studio = Studio::new(working_model(), GenerationSettings::default());
    studio.generate("img").await.unwrap();

    let code = studio.refine("bigger title").await.unwrap().unwrap().to_string();
    assert_eq!(code, "export default () => <h1/> // bigger title <- 25");

    let chat = studio.chat();
    assert_eq!(chat.len(), 2);
    assert_eq!(chat[0].role, Role::User);
    assert_eq!(chat[0].content, "bigger title");
    assert_eq!(chat[1].role, Role::Assistant);
    assert_eq!(chat[1].content, REFINE_REPLY);
    assert!(chat[0].id < chat[1].id);

    let history = studio.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].code, code);
    assert!(history[0].id > history[1].id);
    assert_eq!(history[0].tokens, Some(tokens()));
    assert_eq!(studio.artifact().unwrap().tokens, Some(tokens()));
}

#[tokio::test]
async fn test_failed_refine_returns_to_complete() {
    let model = CannedModel {
        refined: None,
        ..working_model()
    };
    let mut studio = Studio::new(model, GenerationSettings::default());
    studio.generate("img").await.unwrap();

    let result = studio.refine("break it").await.unwrap();
    assert_eq!(result.unwrap_err(), ModelError::EmptyResponse);
    assert_eq!(studio.status(), ProcessingStatus::Complete);
    assert_eq!(studio.artifact().unwrap().code, "export default () => <p/>");
    assert_eq!(studio.chat().len(), 1);
    assert_eq!(studio.history().len(), 1);
}

#[tokio::test]
async fn test_generate_clears_chat() {
    let mut studio = Studio::new(working_model(), GenerationSettings::default());
    studio.generate("img").await.unwrap();
    let _ = studio.refine("tweak").await;
    assert_eq!(studio.chat().len(), 2);

    studio.generate("img").await.unwrap();
    assert!(studio.chat().is_empty());
}

#[tokio::test]
async fn test_restore_history_entry() {
    let mut studio = Studio::new(working_model(), GenerationSettings::default());
    studio.generate("img").await.unwrap();
    let _ = studio.refine("tweak").await;
    let original = studio.history()[1].id;

    let restored = studio.restore(original).unwrap();
    assert_eq!(restored.code, "export default () => <p/>");
    assert!(studio.restore(9999).is_none());
}

#[test]
fn test_platform_switch_and_export_name() {
    let mut studio = Studio::new(working_model(), GenerationSettings::default());
    assert_eq!(studio.export_file_name(), "pixel-perfect-code.tsx");

    studio.set_settings(GenerationSettings::default().with_framework(Framework::VueAntDesign));
    assert_eq!(studio.export_file_name(), "pixel-perfect-code.vue");

    studio.set_platform(Platform::Mobile);
    assert_eq!(studio.settings().platform, Platform::Mobile);
    assert!(Platform::Mobile.supports(studio.settings().framework));
}

#[tokio::test]
async fn test_render_request_follows_artifact() {
    let mut studio = Studio::new(working_model(), GenerationSettings::default());
    assert!(studio.render_request(Breakpoint::Mobile).is_none());

    studio.generate("img").await.unwrap();
    let request = studio.render_request(Breakpoint::Mobile).unwrap();
    assert_eq!(request.code, "export default () => <p/>");
    assert_eq!(request.framework, Framework::ReactTailwind);
}
