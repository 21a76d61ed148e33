//! Intent resolution.
//!
//! Maps a language-understanding intent plus its recognized entities to a
//! canonical action identifier and device name. Resolution never fails:
//! anything unrecognized collapses to the `unknown`/`none` pair.

mod entities;
mod resolve;

pub use entities::{
    parse_entities, DeviceEntities, EntityCandidate, EntityList, EntityMap, EntityRecord,
    DEVICE_ENTITY,
};
pub use resolve::{confirmation_text, resolve_action, Action, Intent, NO_DEVICE, UNKNOWN_ACTION};
