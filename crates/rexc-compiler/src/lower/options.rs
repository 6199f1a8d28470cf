use serde::Deserialize;

/// Operand order for lowering `e?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionOrientation {
    /// `eps | e`
    #[default]
    EmptyFirst,
    /// `e | eps`
    EmptyLast,
}

/// How `.` is lowered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DotBehavior {
    /// Balanced alternation of all 256 bytes.
    #[default]
    BalancedTree,
    /// The literal byte `.`, for tools that cannot represent a true wildcard.
    DummyDot,
}

/// Meaning of an open bound `e{n,}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpenRepeat {
    /// `n` or more: `n - 1` copies followed by `e+`; `e{0,}` is `e*`.
    #[default]
    AtLeast,
    /// Exactly `n` copies, dropping the unbounded tail; `e{0,}` is the empty language.
    Truncate,
}

/// Lowering configuration.
///
/// ```
/// use rexc_compiler::lower::{DotBehavior, LowerOptions, QuestionOrientation};
///
/// let options = LowerOptions::default()
///     .question(QuestionOrientation::EmptyLast)
///     .dot(DotBehavior::DummyDot);
/// assert_eq!(options.dot, DotBehavior::DummyDot);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LowerOptions {
    pub question: QuestionOrientation,
    pub dot: DotBehavior,
    pub open_repeat: OpenRepeat,
    /// Upper bound on IR nodes produced by unrolling repetition, summed over
    /// the whole pattern. `None` disables the check.
    pub unroll_fuel: Option<u64>,
}

/// Enough for `e{1000000}` on a small `e`.
pub const DEFAULT_UNROLL_FUEL: u64 = 4_000_000;

impl Default for LowerOptions {
    fn default() -> Self {
        Self {
            question: QuestionOrientation::default(),
            dot: DotBehavior::default(),
            open_repeat: OpenRepeat::default(),
            unroll_fuel: Some(DEFAULT_UNROLL_FUEL),
        }
    }
}

impl LowerOptions {
    pub fn question(mut self, value: QuestionOrientation) -> Self {
        self.question = value;
        self
    }

    pub fn dot(mut self, value: DotBehavior) -> Self {
        self.dot = value;
        self
    }

    pub fn open_repeat(mut self, value: OpenRepeat) -> Self {
        self.open_repeat = value;
        self
    }

    pub fn unroll_fuel(mut self, limit: Option<u64>) -> Self {
        self.unroll_fuel = limit;
        self
    }
}
