//! Layerboard Core Library
//!
//! Element store, direct-manipulation geometry and z-order layering for the
//! Layerboard canvas. Platform-agnostic; rendering lives elsewhere.

pub mod editor;
pub mod element;
pub mod export;
pub mod geometry;
pub mod input;
pub mod layers;
pub mod manipulation;
pub mod properties;
pub mod selection;
pub mod snapshot;
pub mod storage;
pub mod store;

pub use editor::{Editor, EditorEvent};
pub use element::{Element, ElementId, ElementKind, ElementStyles, MIN_HEIGHT, MIN_WIDTH};
pub use geometry::CanvasFrame;
pub use input::Key;
pub use layers::LayerOrder;
pub use manipulation::{ManipulationMode, ManipulationState, Manipulator};
pub use properties::PropertyField;
pub use selection::{Corner, GestureTarget, Handle, HandleKind, Selection};
pub use snapshot::Snapshot;
pub use store::ElementStore;
