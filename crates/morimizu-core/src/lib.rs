//! Trace generation and supporting logic for the Morimizu sorting visualizer.
//!
//! This crate records every step of a classic sorting algorithm so the
//! front end can replay it as an animation. It has no I/O of its own
//! beyond reading the configuration file.
//!
//! # Modules
//!
//! - [`sink`] -- [`StepSink`] trait, [`TraceRecorder`], and [`Silent`].
//! - [`algorithms`] -- The nine instrumented algorithms.
//! - [`trace`] -- [`Trace`] and the `generate_trace` entry points.
//! - [`compare`] -- Batch comparison across algorithms.
//! - [`input`] -- Parsing and validating user-entered sequences.
//! - [`dataset`] -- Seeded sample dataset generation.
//! - [`playback`] -- Playback state machine driven by user actions.
//! - [`config`] -- Configuration loading from `morimizu-config.yaml`.
//! - [`error`] -- [`TraceError`].
//!
//! [`StepSink`]: sink::StepSink
//! [`TraceRecorder`]: sink::TraceRecorder
//! [`Silent`]: sink::Silent
//! [`Trace`]: trace::Trace
//! [`TraceError`]: error::TraceError

pub mod algorithms;
pub mod compare;
pub mod config;
pub mod dataset;
pub mod error;
pub mod input;
pub mod playback;
pub mod sink;
pub mod trace;

pub use compare::{compare_algorithms, compare_algorithms_by_name};
pub use error::TraceError;
pub use trace::{Trace, generate_trace, generate_trace_by_name, sort_terminal};
