use crate::selection::{
    ports::{SurfaceError, SurfacePort},
    summary::Summary,
    types::{ComponentView, SelectedComponent},
};

#[derive(Debug, Clone, Default)]
pub struct NoopSurface;

impl SurfacePort for NoopSurface {
    fn render_components(&mut self, _components: &[ComponentView]) -> Result<(), SurfaceError> {
        Ok(())
    }

    fn render_selection(&mut self, _selection: &[SelectedComponent]) -> Result<(), SurfaceError> {
        Ok(())
    }

    fn render_summary(&mut self, _summary: &Summary) -> Result<(), SurfaceError> {
        Ok(())
    }
}
