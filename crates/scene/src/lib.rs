#![deny(clippy::all, clippy::pedantic)]
//! JSON scene descriptions for the `tiny2d` engine.
//!
//! A scene names a world and a list of bodies. [`Scene::into_engine`] builds
//! an [`Engine`] from it and returns the engine handle for every body id.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tiny2d::{Body, BodyId, Engine, Motion, Vec2, World};

#[derive(Debug, Deserialize)]
pub struct Scene {
    pub world: WorldDef,
    #[serde(default)]
    pub bodies: Vec<BodyDef>,
}

#[derive(Debug, Deserialize)]
pub struct WorldDef {
    #[serde(default = "zero_vec")]
    pub origin: [f32; 2],
    pub width: f32,
    pub height: f32,
    #[serde(default = "zero_vec")]
    pub gravity: [f32; 2],
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MotionDef {
    Static,
    Dynamic,
}

impl From<MotionDef> for Motion {
    fn from(m: MotionDef) -> Self {
        match m {
            MotionDef::Static => Motion::Static,
            MotionDef::Dynamic => Motion::Dynamic,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "shape")]
pub enum BodyDef {
    #[serde(rename = "circle")]
    Circle {
        id: String,
        center: [f32; 2],
        radius: f32,
        motion: MotionDef,
        #[serde(default = "zero_vec")]
        velocity: [f32; 2],
        #[serde(default = "full_restitution")]
        restitution: f32,
    },
    #[serde(rename = "segment")]
    Segment { id: String, p1: [f32; 2], p2: [f32; 2] },
    #[serde(rename = "rectangle")]
    Rectangle {
        id: String,
        origin: [f32; 2],
        width: f32,
        height: f32,
    },
}

impl BodyDef {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            BodyDef::Circle { id, .. } | BodyDef::Segment { id, .. } | BodyDef::Rectangle { id, .. } => id,
        }
    }

    fn to_body(&self) -> Result<Body, tiny2d::PhysicsError> {
        match self {
            BodyDef::Circle {
                center,
                radius,
                motion,
                velocity,
                restitution,
                ..
            } => Body::circle(vec2(*center), *radius, (*motion).into(), vec2(*velocity), *restitution),
            BodyDef::Segment { p1, p2, .. } => Body::segment(vec2(*p1), vec2(*p2)),
            BodyDef::Rectangle {
                origin, width, height, ..
            } => Body::rectangle(vec2(*origin), *width, *height),
        }
    }
}

fn zero_vec() -> [f32; 2] {
    [0.0, 0.0]
}

fn full_restitution() -> f32 {
    1.0
}

fn vec2(v: [f32; 2]) -> Vec2 {
    Vec2::new(v[0], v[1])
}

/// Engine built from a scene, with the handle of every named body.
pub struct LoadedScene {
    pub engine: Engine,
    pub ids: HashMap<String, BodyId>,
}

impl Scene {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading scene {}", path.display()))?;
        Self::from_str(&json).with_context(|| format!("parsing scene {}", path.display()))
    }

    pub fn into_engine(self) -> Result<LoadedScene> {
        let w = &self.world;
        let world = World::new(vec2(w.origin), w.width, w.height, vec2(w.gravity)).context("invalid world")?;
        let mut engine = Engine::with_world(world);
        let mut ids: HashMap<String, BodyId> = HashMap::new();

        for def in &self.bodies {
            if ids.contains_key(def.id()) {
                bail!("duplicate body id {}", def.id());
            }
            let body = def
                .to_body()
                .with_context(|| format!("invalid body {}", def.id()))?;
            ids.insert(def.id().to_owned(), engine.add_body(body));
        }

        Ok(LoadedScene { engine, ids })
    }
}
