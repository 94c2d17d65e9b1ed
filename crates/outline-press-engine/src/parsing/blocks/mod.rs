//! # Block Extraction
//!
//! Two-phase extraction of marker blocks from an outline document.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a `LineClass`
//!    containing local facts (indentation, bullet, fence delimiter, property declaration)
//!
//! 2. **Block Walking** (`walker`): a `BlockWalker` moves one cursor through the
//!    classified lines, switching between `Scanning` and `InBlock`, and emits an
//!    `Article` per marker block
//!
//! ## Modules
//!
//! - **`indent`**: raw indentation width and relative nesting level
//! - **`kinds`**: `CodeFence`/`FenceTracker` and `PropertyBlock`, each owning its syntax
//! - **`classify`**: `OutlineLineClassifier` produces `LineClass` for each line
//! - **`emit`**: re-indentation of descendants into a flat two-space outline
//! - **`walker`**: `BlockWalker` state machine
//!
//! ## Key Invariants
//!
//! - Fenced code is a raw zone: its lines never end a block and are only
//!   shifted by a constant prefix, never reformatted
//! - Property sub-block lines and `key:: value` declarations never reach a body
//! - Blocks do not nest: a block ends at the first line (outside a fence)
//!   indented no deeper than its marker, or at the next marker line
//! - Fence delimiters are tracked before boundary checks

pub mod classify;
pub mod emit;
pub mod indent;
pub mod kinds;
pub mod walker;

pub use classify::{LineClass, OutlineLineClassifier};
pub use kinds::{CodeFence, Extraction, FenceEvent, FenceState, FenceTracker, PropertyBlock};
pub use walker::{BlockWalker, WalkState};
