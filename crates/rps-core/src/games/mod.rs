//! Move sets, move selection and outcome resolution.

mod moveset;
mod resolver;
mod selector;
mod traits;

pub use moveset::{MoveIndex, MoveSet};
pub use resolver::{resolve, OutcomeTable};
pub use selector::UniformSelector;
pub use traits::MoveSelector;
