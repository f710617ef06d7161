pub mod advisor;
pub mod cards;
pub mod decision;
pub mod error;
pub mod evaluator;
pub mod position;
pub mod profiler;
pub mod web;

pub use advisor::{Advisor, AdvisorConfig};
pub use cards::{Card, StartingHand};
pub use decision::{Action, Decision, make_decision};
pub use error::ValidationError;
pub use evaluator::{HandEvaluation, Tier, evaluate_hand};
pub use position::Position;
pub use profiler::{ActionProfile, analyze_opponent_actions};
