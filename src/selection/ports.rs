use crate::selection::{
    summary::Summary,
    types::{ComponentView, SelectedComponent},
};

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("surface write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("surface frame encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Write-only rendering collaborator. Receives engine output and never
/// feeds rendered state back.
pub trait SurfacePort {
    fn render_components(&mut self, components: &[ComponentView]) -> Result<(), SurfaceError>;

    fn render_selection(&mut self, selection: &[SelectedComponent]) -> Result<(), SurfaceError>;

    fn render_summary(&mut self, summary: &Summary) -> Result<(), SurfaceError>;
}
