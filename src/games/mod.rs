//! Game assemblies built on the engine.

pub mod emoji;
