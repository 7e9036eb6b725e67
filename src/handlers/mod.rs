//! Event Handlers Module
//!
//! Translates terminal input events into application state changes. All
//! keyboard processing lives in the `keys` submodule.

pub mod keys;
