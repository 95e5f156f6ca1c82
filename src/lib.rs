//! Kinematic solver for 2D linkages.
//!
//! `linkwork` animates articulated mechanisms built from hinges (point
//! anchors) and links (distance constraints). Each step resolves every link
//! once, in insertion order, then re-imposes the axis locks of every hinge.
//! There is no mass or velocity: it is a position-based solver whose
//! corrections spread through a mechanism over several steps.
//!
//! # Features
//!
//! - **Hinges**: free, fixed, or driven along one or both axes
//! - **Links**: rigid or elastic distance constraints with configurable
//!   correction share and optional rounding
//! - **Stable handles**: arena keys that survive unrelated removals
//! - **Drivers & scenes**: Lissajous motion sources and a frame-stepped host loop
//! - **Observable**: monitor steps via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vector;
pub mod hinge;
pub mod link;
pub mod simulation;
pub mod driver;
pub mod scene;
pub mod preset;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vector::Vector2;
pub use hinge::{Hinge, HingeId};
pub use link::{Link, LinkId, Resolution};
pub use simulation::Simulation;
pub use driver::{Driver, Lissajous};
pub use scene::Scene;
pub use preset::{chain, sample_scene};
pub use config::SolverConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::MechanismError;
