//! Adapter implementations of the port traits.
//!
//! `live` talks to the real system; `memory` holds deterministic in-process
//! fakes used by tests and by `ServiceContext::in_memory`.

pub mod live;
pub mod memory;
