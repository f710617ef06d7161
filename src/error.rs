/// Rejected raw input from the prompt, the command line or the HTTP API.
///
/// The evaluation core never produces these; they are raised before a card or
/// number reaches it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Card must be 2 characters (e.g., AH, KS), got '{0}'")]
    CardLength(String),
    #[error("Invalid rank '{0}'. Use 2-9, T, J, Q, K, A")]
    InvalidRank(char),
    #[error("Invalid suit '{0}'. Use H, D, C, S")]
    InvalidSuit(char),
    #[error("{field} must be a whole number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}
