//! Use-Cases: die einzelnen Zustandsübergänge der Anwendung.
//!
//! Jedes Modul kapselt genau eine Sorte Übergang (Pick, Drag, Kurven,
//! Loop, View); der Controller ruft sie beim Abarbeiten der Kommandos.

pub mod curves;
pub mod drag;
pub mod loop_marker;
pub mod pick;
pub mod view;
