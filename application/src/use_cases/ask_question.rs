//! Ask Question use case.
//!
//! The full request pipeline shared by every entry point:
//!
//! ```text
//! raw input ─▶ Question::try_new ─▶ normalize ─▶ PromptTemplate::build ─▶ RemoteInvoker::invoke
//! ```
//!
//! Split in two steps so an interactive caller can show the normalized
//! text before the (blocking, billable) remote call happens:
//! [`prepare`](AskQuestionUseCase::prepare) is pure,
//! [`answer`](AskQuestionUseCase::answer) does the network call.

use crate::config::InvocationOptions;
use crate::ports::completion_gateway::CompletionGateway;
use crate::ports::progress::{AskProgressNotifier, NoProgress};
use crate::use_cases::invoke::{InvocationError, RemoteInvoker};
use llm_qa_domain::{
    BuiltPrompt, DomainError, NormalizedQuestion, PromptTemplate, Question, ResponseMetadata,
    ResponseShape, normalize, truncate,
};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while answering a question.
#[derive(Error, Debug)]
pub enum AskError {
    /// Empty or whitespace-only input; the remote service was not called.
    #[error("{0}")]
    Validation(#[from] DomainError),

    /// The remote call failed. Carries what was computed before the call
    /// so callers can still display it.
    #[error("{source}")]
    Invocation {
        question: Question,
        normalized: NormalizedQuestion,
        #[source]
        source: InvocationError,
    },
}

/// A validated question with its prompt, ready to send.
#[derive(Debug, Clone)]
pub struct PreparedQuestion {
    pub question: Question,
    pub normalized: NormalizedQuestion,
    pub prompt: BuiltPrompt,
}

/// Everything produced by one successful request.
#[derive(Debug, Clone)]
pub struct AskOutput {
    pub question: Question,
    pub normalized: NormalizedQuestion,
    pub answer: String,
    /// Full payload, for diagnostic display
    pub raw: Value,
    /// Redacted subset safe to render
    pub metadata: ResponseMetadata,
}

/// Use case for answering one question.
///
/// Cheap to clone; holds only shared, read-only state.
#[derive(Clone)]
pub struct AskQuestionUseCase {
    invoker: RemoteInvoker,
    template: PromptTemplate,
    options: InvocationOptions,
}

impl std::fmt::Debug for AskQuestionUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AskQuestionUseCase")
            .field("template", &self.template)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl AskQuestionUseCase {
    pub fn new(
        gateway: Arc<dyn CompletionGateway>,
        template: PromptTemplate,
        options: InvocationOptions,
    ) -> Self {
        if template.style() != options.shape.template_style() {
            warn!(
                "Template style '{}' does not match '{}' endpoint",
                template.style(),
                options.shape
            );
        }
        if options.model.is_completion_only() && options.shape != ResponseShape::Completion {
            warn!("Model {} only serves the completion endpoint", options.model);
        }
        Self {
            invoker: RemoteInvoker::new(gateway),
            template,
            options,
        }
    }

    /// Validate, normalize and build the prompt. No side effects.
    pub fn prepare(&self, raw: &str) -> Result<PreparedQuestion, DomainError> {
        let question = Question::try_new(raw)?;
        let normalized = normalize(question.content());
        let prompt = self.template.build(&normalized.text);

        Ok(PreparedQuestion {
            question,
            normalized,
            prompt,
        })
    }

    /// Send a prepared question to the remote model.
    pub async fn answer(
        &self,
        prepared: PreparedQuestion,
        progress: &dyn AskProgressNotifier,
    ) -> Result<AskOutput, AskError> {
        info!(
            "Asking {}: {}",
            self.options.model,
            truncate(&prepared.normalized.text, 100)
        );

        progress.on_request_start(&self.options.model);
        let result = self.invoker.invoke(&prepared.prompt, &self.options).await;
        progress.on_request_end(result.is_ok());

        let PreparedQuestion {
            question,
            normalized,
            prompt,
        } = prepared;

        match result {
            Ok(invocation) => {
                let metadata = ResponseMetadata::extract(&invocation.raw, prompt.len());
                Ok(AskOutput {
                    question,
                    normalized,
                    answer: invocation.answer,
                    raw: invocation.raw,
                    metadata,
                })
            }
            Err(source) => {
                warn!("Remote call failed: {}", source);
                Err(AskError::Invocation {
                    question,
                    normalized,
                    source,
                })
            }
        }
    }

    /// Run the whole pipeline without progress reporting.
    pub async fn execute(&self, raw: &str) -> Result<AskOutput, AskError> {
        self.execute_with_progress(raw, &NoProgress).await
    }

    /// Run the whole pipeline with progress callbacks.
    pub async fn execute_with_progress(
        &self,
        raw: &str,
        progress: &dyn AskProgressNotifier,
    ) -> Result<AskOutput, AskError> {
        let prepared = self.prepare(raw)?;
        self.answer(prepared, progress).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::completion_gateway::{CompletionRequest, GatewayError};
    use crate::use_cases::invoke::InvocationErrorKind;
    use async_trait::async_trait;
    use llm_qa_domain::{Instruction, Model, TemplateStyle};
    use serde_json::json;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Mocks ====================

    struct MockGateway {
        calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
        fail: bool,
    }

    impl MockGateway {
        fn ok() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
                fail: false,
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
                fail: true,
            })
        }
    }

    #[async_trait]
    impl CompletionGateway for MockGateway {
        async fn complete(&self, request: &CompletionRequest) -> Result<Value, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(request.prompt.body().to_string());
            if self.fail {
                return Err(GatewayError::Connection("connection refused".to_string()));
            }
            Ok(json!({
                "model": "gpt-3.5-turbo-0125",
                "usage": {"prompt_tokens": 30, "completion_tokens": 2, "total_tokens": 32},
                "choices": [{"message": {"content": " 42 "}}]
            }))
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl AskProgressNotifier for RecordingProgress {
        fn on_request_start(&self, model: &Model) {
            self.events.lock().unwrap().push(format!("start:{}", model));
        }

        fn on_request_end(&self, success: bool) {
            self.events.lock().unwrap().push(format!("end:{}", success));
        }
    }

    fn use_case(gateway: Arc<MockGateway>) -> AskQuestionUseCase {
        AskQuestionUseCase::new(
            gateway,
            PromptTemplate::new(TemplateStyle::Chat, Instruction::Student),
            InvocationOptions::default(),
        )
    }

    #[tokio::test]
    async fn test_execute_success() {
        let gateway = MockGateway::ok();
        let output = use_case(gateway.clone())
            .execute("What is 6 x 7?")
            .await
            .unwrap();

        assert_eq!(output.question.content(), "What is 6 x 7?");
        assert_eq!(output.normalized.text, "what is 6 x 7");
        assert_eq!(output.answer, "42");
        assert_eq!(output.metadata.model.as_deref(), Some("gpt-3.5-turbo-0125"));
        assert_eq!(output.metadata.usage.unwrap().total_tokens, Some(32));

        let sent = gateway.last_prompt.lock().unwrap().clone().unwrap();
        assert!(sent.contains("what is 6 x 7"));
        assert_eq!(output.metadata.prompt_len, sent.chars().count());
    }

    #[tokio::test]
    async fn test_empty_question_never_calls_gateway() {
        let gateway = MockGateway::ok();
        let uc = use_case(gateway.clone());

        for input in ["", "   ", "\n\t"] {
            let err = uc.execute(input).await.unwrap_err();
            assert!(matches!(err, AskError::Validation(DomainError::EmptyQuestion)));
        }
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_punctuation_only_question_is_still_sent() {
        let gateway = MockGateway::ok();
        let output = use_case(gateway.clone()).execute("???").await.unwrap();
        assert!(output.normalized.is_empty());
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invocation_error_keeps_normalized() {
        let gateway = MockGateway::failing();
        let err = use_case(gateway).execute("Hello, World!!").await.unwrap_err();

        match err {
            AskError::Invocation {
                normalized, source, ..
            } => {
                assert_eq!(normalized.text, "hello world");
                assert_eq!(source.kind(), InvocationErrorKind::Network);
                assert!(source.to_string().contains("connection refused"));
            }
            other => panic!("expected invocation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_progress_callbacks() {
        let progress = RecordingProgress::default();
        let uc = use_case(MockGateway::failing());
        let _ = uc.execute_with_progress("hi", &progress).await;

        let events = progress.events.lock().unwrap();
        assert_eq!(*events, vec!["start:gpt-3.5-turbo", "end:false"]);
    }

    #[test]
    fn test_debug_omits_gateway() {
        let debug = format!("{:?}", use_case(MockGateway::ok()));
        assert!(debug.starts_with("AskQuestionUseCase"));
        assert!(debug.contains("gpt-3.5-turbo") || debug.contains("Gpt35Turbo"));
        assert!(!debug.contains("invoker"));
    }

    #[test]
    fn test_prepare_is_pure() {
        let gateway = MockGateway::ok();
        let uc = use_case(gateway.clone());
        let prepared = uc.prepare("  Café, s'il vous plaît?  ").unwrap();

        assert_eq!(prepared.normalized.text, "café s il vous plaît");
        assert!(prepared.prompt.body().contains("café s il vous plaît"));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }
}
