pub mod catalog;
pub mod engine;
pub mod error;
pub mod invariants;
pub mod noop;
pub mod ports;
pub mod summary;
pub mod types;

pub use catalog::{Catalog, CatalogTexts};
pub use engine::SelectionEngine;
pub use error::{SelectionError, SelectionErrorKind};
pub use invariants::assert_selection_invariants;
pub use noop::NoopSurface;
pub use ports::{SurfaceError, SurfacePort};
pub use summary::{Summary, SummaryEntry};
pub use types::{
    CategoryDef, CategoryKey, ComponentDef, ComponentId, ComponentView, DeselectOutcome,
    DragOutcome, InstanceId, RejectReason, SelectOutcome, SelectedComponent, SelectionSnapshot,
};
