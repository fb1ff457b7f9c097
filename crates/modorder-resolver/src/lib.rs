//! Load order resolution for mods that declare dependencies on each other.
//!
//! Two entry points: [`resolve`] computes a dependency-respecting order from
//! scratch, and [`evaluate`] checks an existing user order and reports
//! exactly which entries are misplaced. Both are pure functions of their
//! inputs, never fail on malformed data, and are deterministic: ties are
//! broken by the prior order, then by id.
//!
//! Data-quality problems (missing dependencies, unsatisfied versions,
//! dependency cycles) are returned as part of the result rather than as
//! errors.

pub mod constraint;
pub mod diagnostic;
pub mod evaluate;
pub mod graph;
pub mod priority;
pub mod resolver;
pub mod sort;
pub mod version;

pub use evaluate::{evaluate, OrderEvaluation};
pub use resolver::{resolve, ResolutionResult};
