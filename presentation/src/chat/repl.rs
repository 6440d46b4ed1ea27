//! REPL (Read-Eval-Print Loop) for interactive questions

use super::prompt::QuestionPrompt;
use crate::ConsoleFormatter;
use crate::ProgressReporter;
use crate::config::ReplConfig;
use llm_qa_application::{AskError, AskOutput, AskQuestionUseCase, NoProgress, PreparedQuestion};
use reedline::{FileBackedHistory, Reedline, Signal};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 500;

/// What the loop should do after a line was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Exit,
}

/// Interactive question REPL
pub struct QaRepl {
    use_case: AskQuestionUseCase,
    config: ReplConfig,
    history_file: Option<PathBuf>,
}

impl QaRepl {
    pub fn new(use_case: AskQuestionUseCase, config: ReplConfig) -> Self {
        Self {
            use_case,
            config,
            history_file: None,
        }
    }

    /// Persist line-editor history to `path` (interactive mode only)
    pub fn with_history_file(mut self, path: PathBuf) -> Self {
        self.history_file = Some(path);
        self
    }

    /// Run the loop on stdin/stdout until `exit`, `quit` or end of input
    pub async fn run(&self) -> io::Result<()> {
        if io::stdin().is_terminal() {
            self.run_interactive().await
        } else {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            self.run_script(stdin.lock(), &mut stdout).await
        }
    }

    async fn run_interactive(&self) -> io::Result<()> {
        let mut editor = Reedline::create();
        if let Some(history) = self.history_file.as_deref().and_then(open_history) {
            editor = editor.with_history(Box::new(history));
        }

        let prompt = QuestionPrompt;
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", ConsoleFormatter::banner())?;

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    if self.process_line(&line, &mut stdout).await? == LineOutcome::Exit {
                        break;
                    }
                }
                Signal::CtrlC => {
                    writeln!(stdout, "^C")?;
                }
                Signal::CtrlD => {
                    writeln!(stdout, "Goodbye.")?;
                    break;
                }
            }
        }

        Ok(())
    }

    /// Run the loop over any line source; used for piped stdin and in tests
    pub async fn run_script<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", ConsoleFormatter::banner())?;

        let mut line = String::new();
        loop {
            write!(out, "Question: ")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                writeln!(out, "Goodbye.")?;
                return Ok(());
            }

            if self.process_line(&line, out).await? == LineOutcome::Exit {
                return Ok(());
            }
        }
    }

    /// Handle one input line
    ///
    /// Invocation failures are printed and the loop continues; only I/O
    /// errors on `out` are returned.
    pub async fn process_line<W: Write>(&self, line: &str, out: &mut W) -> io::Result<LineOutcome> {
        if is_exit_command(line) {
            writeln!(out, "Goodbye.")?;
            return Ok(LineOutcome::Exit);
        }

        match self.use_case.prepare(line) {
            Ok(prepared) => {
                self.answer(prepared, out).await?;
            }
            Err(e) => debug!("Re-prompting: {}", e),
        }

        Ok(LineOutcome::Continue)
    }

    /// Answer a single question and return whether it succeeded
    pub async fn ask_once<W: Write>(&self, question: &str, out: &mut W) -> io::Result<bool> {
        match self.use_case.prepare(question) {
            Ok(prepared) => self.answer(prepared, out).await,
            Err(e) => {
                writeln!(out, "{}", e)?;
                Ok(false)
            }
        }
    }

    async fn answer<W: Write>(&self, prepared: PreparedQuestion, out: &mut W) -> io::Result<bool> {
        write!(out, "{}", ConsoleFormatter::format_normalized(&prepared.normalized))?;
        writeln!(out, "\n{}", ConsoleFormatter::sending())?;
        out.flush()?;

        let result = if self.config.show_progress {
            let progress = ProgressReporter::new();
            self.use_case.answer(prepared, &progress).await
        } else {
            self.use_case.answer(prepared, &NoProgress).await
        };

        match result {
            Ok(output) => {
                self.print_output(&output, out)?;
                Ok(true)
            }
            Err(AskError::Invocation { source, .. }) => {
                writeln!(out, "{}", ConsoleFormatter::format_error(&source))?;
                Ok(false)
            }
            Err(e @ AskError::Validation(_)) => {
                writeln!(out, "{}", e)?;
                Ok(false)
            }
        }
    }

    fn print_output<W: Write>(&self, output: &AskOutput, out: &mut W) -> io::Result<()> {
        if self.config.show_raw {
            write!(
                out,
                "{}",
                ConsoleFormatter::format_raw(&output.raw, self.config.raw_preview_chars)
            )?;
        }
        write!(out, "{}", ConsoleFormatter::format_answer(&output.answer))?;
        out.flush()
    }
}

/// Open the history file, creating its directory; failures disable history
fn open_history(path: &Path) -> Option<FileBackedHistory> {
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            warn!("History disabled: cannot create {}: {}", parent.display(), e);
            return None;
        }
    }
    match FileBackedHistory::with_file(HISTORY_CAPACITY, path.to_path_buf()) {
        Ok(history) => Some(history),
        Err(e) => {
            warn!("History disabled: {}", e);
            None
        }
    }
}

fn is_exit_command(line: &str) -> bool {
    let line = line.trim();
    line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use llm_qa_application::{CompletionGateway, CompletionRequest, GatewayError, InvocationOptions};
    use llm_qa_domain::{Instruction, PromptTemplate, TemplateStyle};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Mocks ====================

    /// Fails the first call, answers every later one
    struct FlakyGateway {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CompletionGateway for FlakyGateway {
        async fn complete(&self, _request: &CompletionRequest) -> Result<Value, GatewayError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                return Err(GatewayError::Connection("connection reset".to_string()));
            }
            Ok(json!({
                "model": "gpt-3.5-turbo",
                "choices": [{"message": {"content": "Paris"}}]
            }))
        }
    }

    fn repl(gateway: Arc<FlakyGateway>, show_raw: bool) -> QaRepl {
        let use_case = AskQuestionUseCase::new(
            gateway,
            PromptTemplate::new(TemplateStyle::Chat, Instruction::Clarify),
            InvocationOptions::default(),
        );
        QaRepl::new(
            use_case,
            ReplConfig {
                show_raw,
                raw_preview_chars: 1000,
                show_progress: false,
            },
        )
    }

    fn flaky() -> Arc<FlakyGateway> {
        Arc::new(FlakyGateway {
            calls: AtomicUsize::new(0),
        })
    }

    #[test]
    fn test_exit_commands() {
        for line in ["exit", "quit", "EXIT\n", "  Quit  "] {
            assert!(is_exit_command(line), "{:?}", line);
        }
        assert!(!is_exit_command("exit now"));
    }

    #[test]
    fn test_history_location_errors_disable_history() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        assert!(open_history(&blocker.join("history.txt")).is_none());
        assert!(open_history(&dir.path().join("nested").join("history.txt")).is_some());
    }

    #[tokio::test]
    async fn test_exit_stops_loop() {
        let gateway = flaky();
        let mut out = Vec::new();
        let outcome = repl(gateway.clone(), true)
            .process_line("Exit", &mut out)
            .await
            .unwrap();

        assert_eq!(outcome, LineOutcome::Exit);
        assert!(String::from_utf8(out).unwrap().contains("Goodbye."));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_blank_line_reprompts_without_calling() {
        let gateway = flaky();
        let mut out = Vec::new();
        let outcome = repl(gateway.clone(), true)
            .process_line("   \n", &mut out)
            .await
            .unwrap();

        assert_eq!(outcome, LineOutcome::Continue);
        assert!(out.is_empty());
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_error_then_success_continues() {
        let gateway = flaky();
        let input = "What is the capital of France?\nAnd again?\nquit\nnever read\n";
        let mut out = Vec::new();

        repl(gateway.clone(), true)
            .run_script(input.as_bytes(), &mut out)
            .await
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("what is the capital of france"));
        assert!(text.contains("Error calling LLM API:"));
        assert!(text.contains("connection reset"));
        assert!(text.contains("--- Final Answer ---"));
        assert!(text.contains("Paris"));
        assert!(text.contains("Goodbye."));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_end_of_input_says_goodbye() {
        let mut out = Vec::new();
        repl(flaky(), true)
            .run_script("".as_bytes(), &mut out)
            .await
            .unwrap();
        assert!(String::from_utf8(out).unwrap().trim_end().ends_with("Goodbye."));
    }

    #[tokio::test]
    async fn test_section_order() {
        let gateway = flaky();
        gateway.calls.store(1, Ordering::SeqCst);
        let mut out = Vec::new();

        assert!(
            repl(gateway, true)
                .ask_once("Hi there!", &mut out)
                .await
                .unwrap()
        );
        let text = String::from_utf8(out).unwrap();

        let positions: Vec<usize> = [
            "Preprocessed Question",
            "['hi', 'there']",
            "Sending to LLM...",
            "LLM Raw Response (truncated)",
            "Final Answer",
        ]
        .iter()
        .map(|needle| text.find(needle).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_raw_section_can_be_hidden() {
        let gateway = flaky();
        gateway.calls.store(1, Ordering::SeqCst);
        let mut out = Vec::new();

        repl(gateway, false).ask_once("hi", &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("LLM Raw Response"));
        assert!(text.contains("Paris"));
    }

    #[tokio::test]
    async fn test_ask_once_reports_failure() {
        let mut out = Vec::new();
        let answered = repl(flaky(), true).ask_once("hi", &mut out).await.unwrap();
        assert!(!answered);

        let mut out = Vec::new();
        let answered = repl(flaky(), true).ask_once("  ", &mut out).await.unwrap();
        assert!(!answered);
        assert!(String::from_utf8(out).unwrap().contains("Please enter a question."));
    }
}
