//! Stories core: pure data model, overfetch planning and result reduction.
mod item;
mod outcome;
mod plan;
mod reduce;

pub use item::{is_story_link, Item, ItemId, STORY_KIND};
pub use outcome::Outcome;
pub use plan::{OverfetchPlanner, PlanError, DEFAULT_OVERFETCH_FACTOR};
pub use reduce::reduce;
