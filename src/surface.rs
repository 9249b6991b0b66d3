use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::selection::{
    ComponentView, SelectedComponent, Summary, SurfaceError, SurfacePort,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceFormat {
    #[default]
    Text,
    Json,
}

/// Human-readable board for a terminal.
pub struct TextSurface<W: Write> {
    out: W,
}

impl<W: Write> TextSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SurfacePort for TextSurface<W> {
    fn render_components(&mut self, components: &[ComponentView]) -> Result<(), SurfaceError> {
        writeln!(self.out, "components:")?;
        for view in components {
            let marker = if view.selectable { " " } else { "x" };
            writeln!(
                self.out,
                "  [{marker}] {:<24} {:<10} {}",
                view.component_id, view.category, view.display_name
            )?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn render_selection(&mut self, selection: &[SelectedComponent]) -> Result<(), SurfaceError> {
        if selection.is_empty() {
            writeln!(self.out, "drop zone: (empty)")?;
        } else {
            writeln!(self.out, "drop zone:")?;
            for selected in selection {
                writeln!(
                    self.out,
                    "  {:<8} {:<10} {}",
                    selected.instance_id, selected.category, selected.display_name
                )?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn render_summary(&mut self, summary: &Summary) -> Result<(), SurfaceError> {
        writeln!(self.out, "{summary}")?;
        self.out.flush()?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum SurfaceFrame<'a> {
    Components {
        components: &'a [ComponentView],
    },
    Selection {
        selection: &'a [SelectedComponent],
    },
    Summary {
        html: String,
        summary: &'a Summary,
    },
}

/// NDJSON frames, one per render call, for a front end that owns the markup.
pub struct JsonSurface<W: Write> {
    out: W,
}

impl<W: Write> JsonSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, frame: &SurfaceFrame<'_>) -> Result<(), SurfaceError> {
        serde_json::to_writer(&mut self.out, frame)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> SurfacePort for JsonSurface<W> {
    fn render_components(&mut self, components: &[ComponentView]) -> Result<(), SurfaceError> {
        self.write_frame(&SurfaceFrame::Components { components })
    }

    fn render_selection(&mut self, selection: &[SelectedComponent]) -> Result<(), SurfaceError> {
        self.write_frame(&SurfaceFrame::Selection { selection })
    }

    fn render_summary(&mut self, summary: &Summary) -> Result<(), SurfaceError> {
        self.write_frame(&SurfaceFrame::Summary {
            html: summary.to_html(),
            summary,
        })
    }
}
