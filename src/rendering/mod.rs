//! Low-level painting for the seekbar demo.

pub mod seekbar_renderer;
