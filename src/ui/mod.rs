//! UI panel rendering for the seekbar demo:
//! - Seekbar panel (widget hosting, input translation, animation tick)
//! - Control panel (programmatic API controls and event log)

pub mod control_panel;
pub mod seekbar_panel;
