#![forbid(unsafe_code)]

//! Core types for the Glider range-slider engine.
//!
//! This leaf crate holds the pieces every other crate agrees on: geometric
//! primitives ([`geometry`]), canonical input events ([`event`]), and the
//! slider data model ([`state`]). It has no dependencies and no I/O; the
//! view engine and any embedding host build on top of it.

pub mod event;
pub mod geometry;
pub mod state;
