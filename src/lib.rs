#![warn(clippy::all, rust_2018_idioms)]

pub mod codec;
pub mod command;
pub mod element;
pub mod error;
pub mod export;
pub mod geometry;
pub mod id_generator;
pub mod input;
pub mod scene;
pub mod settings;
pub mod state;
pub mod tools;

pub use command::{Command, Outcome};
pub use element::{Element, ElementId, ElementType, GroupId, ShapeKind};
pub use error::{Result, SketchError};
pub use export::{ExportView, Rasterizer, export_image};
pub use geometry::{BoundingBox, Delta, Point};
pub use input::{InputEvent, route_event};
pub use scene::Scene;
pub use settings::Settings;
pub use state::{EditingSession, load_scene, save_scene};
pub use tools::{EraserSize, ToolMode};
