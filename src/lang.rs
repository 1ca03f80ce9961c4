//! Language specific parts of the declension engine.
//!
//! Everything in here is a pure function of its inputs. The rules are heuristics tuned on a
//! glossary of creature and item names; uncertain results are flagged, not guaranteed.

pub mod de;
pub mod en;
