#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! # Tiny2D Physics Engine
//!
//! A minimal 2D rigid-body engine for small interactive simulations. It moves
//! circles under gravity and resolves their collisions against each other,
//! against static line segments and axis-aligned rectangles, and against a
//! rectangular world boundary. The response is believable rather than exact:
//! overlapping bodies are pushed apart instantly and only the velocity
//! component along the contact normal changes.
//!
//! ## Key Components
//!
//! -   **Vectors and world:** [`Vec2`] and [`World`] in the [`types`] module.
//! -   **Bodies:** [`Body`] in the [`body`] module is a [`Shape`] plus a
//!     [`Motion`] mode. Only circles can be dynamic.
//! -   **Collision:** pairwise detection and response in [`collision`].
//! -   **Simulation:** [`Engine`] owns the bodies and advances them with
//!     [`Engine::step`].
//!
//! Rendering, input and frame pacing are left to the caller: read body state
//! through the accessors after each step.
//!
//! ## Usage
//!
//! ```rust
//! use tiny2d::{Engine, Motion, Vec2};
//!
//! let mut engine = Engine::new(Vec2::ZERO, 600.0, 600.0, Vec2::new(0.0, 1000.0))?;
//! let ball = engine.add_circle(Vec2::new(300.0, 100.0), 30.0, Motion::Dynamic, Vec2::ZERO, 1.0)?;
//! engine.add_rectangle(Vec2::new(200.0, 400.0), 200.0, 20.0)?;
//!
//! engine.run(1.0 / 60.0, 60)?;
//! let y = engine.body(ball).map(|b| b.position().y);
//! assert!(y.is_some());
//! # Ok::<(), tiny2d::PhysicsError>(())
//! ```

pub mod body;
mod builder;
pub mod collision;
pub mod error;
pub mod integrator;
pub mod simulation;
pub mod types;

pub use body::{Body, BodyId, Circle, Motion, Rectangle, Segment, Shape, ShapeKind};
pub use collision::Contact;
pub use error::PhysicsError;
pub use simulation::{Engine, EngineDebugInfo};
pub use types::{Vec2, World};
