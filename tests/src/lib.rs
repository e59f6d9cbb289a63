//! Test support for the blscheck workspace
//!
//! Engines here stand in for the curve library so harness behaviour can be
//! checked without depending on a broken CPU to produce a fault.
