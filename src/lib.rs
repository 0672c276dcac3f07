pub mod outcome;
pub mod visit;

pub use crate::outcome::Outcome;
pub use crate::visit::{Failure, OutcomeVisitor, Success};
