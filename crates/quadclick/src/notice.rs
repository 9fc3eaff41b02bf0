use quadclick_engine::core::SetupError;
use quadclick_engine::render::{ShaderError, ShaderStage};
use rfd::{MessageDialog, MessageLevel};

/// Shows a blocking dialog for `err`. Returns once the user dismisses it.
pub fn show_setup_error(err: &SetupError) {
    let (title, description) = notice_text(err);
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(description)
        .show();
}

/// Dialog title and body. Shader failures show the raw diagnostic.
fn notice_text(err: &SetupError) -> (&'static str, String) {
    match err {
        SetupError::ContextUnavailable(_) => ("Graphics unavailable", err.to_string()),
        SetupError::Shader(shader) => {
            let title = match shader {
                ShaderError::Compile {
                    stage: ShaderStage::Vertex,
                    ..
                } => "Vertex shader error",
                ShaderError::Compile {
                    stage: ShaderStage::Fragment,
                    ..
                } => "Fragment shader error",
                ShaderError::Link { .. } => "Shader link error",
            };
            (title, shader.log().to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_failure_keeps_full_message() {
        let err = SetupError::ContextUnavailable("no adapter".to_string());
        let (title, body) = notice_text(&err);
        assert_eq!(title, "Graphics unavailable");
        assert!(body.contains("no adapter"));
    }

    #[test]
    fn compile_failure_names_stage_and_shows_log() {
        let err = SetupError::from(ShaderError::Compile {
            stage: ShaderStage::Fragment,
            log: "expected `;`".to_string(),
        });
        assert_eq!(notice_text(&err), ("Fragment shader error", "expected `;`".to_string()));
    }

    #[test]
    fn link_failure_shows_log_without_prefix() {
        let err = SetupError::from(ShaderError::Link {
            log: "missing Vertex entry point `vs_main`".to_string(),
        });
        let (title, body) = notice_text(&err);
        assert_eq!(title, "Shader link error");
        assert_eq!(body, "missing Vertex entry point `vs_main`");
    }
}
