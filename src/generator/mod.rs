pub mod gemini;
pub mod mock;

use async_trait::async_trait;

use crate::error::GenerateError;
use crate::schema::Schema;

/// Which of the five structured tasks a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    AnalyzeAccount,
    OptimizeDraft,
    FixFlag,
    SearchCheck,
    SearchVariations,
}

impl Task {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AnalyzeAccount => "analyze_account",
            Self::OptimizeDraft => "optimize_draft",
            Self::FixFlag => "fix_flag",
            Self::SearchCheck => "search_check",
            Self::SearchVariations => "search_variations",
        }
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A prompt plus the exact shape the reply must take.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub task: Task,
    pub model: String,
    pub prompt: String,
    pub schema: Schema,
}

/// Token usage from a single model call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    /// Accumulate another usage into this one.
    pub fn add(&mut self, other: TokenUsage) {
        self.input_tokens += other.input_tokens;
        self.output_tokens += other.output_tokens;
    }

    /// Total tokens (input + output).
    pub fn total(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }
}

/// Raw JSON text from the model + optional token usage.
#[derive(Debug, Clone)]
pub struct Generation {
    pub text: String,
    pub usage: Option<TokenUsage>,
}

/// Schema-constrained text generation. A Gemini endpoint, or a test script.
///
/// Implementations must fail on transport errors, non-2xx replies, and
/// replies that carry no text. An empty body is never a success.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<Generation, GenerateError>;
}
