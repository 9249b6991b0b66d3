use crate::selection::{
    catalog::Catalog,
    summary::{Summary, SummaryEntry},
    types::{
        ComponentView, DeselectOutcome, DragOutcome, RejectReason, SelectOutcome,
        SelectedComponent, SelectionSnapshot,
    },
};

/// Owns the selection set for one drop target and enforces the
/// one-component-per-category rule.
///
/// Policy rejections are reported through outcome values and never as
/// errors; every operation leaves the engine in a consistent state.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    catalog: Catalog,
    selectable: Vec<bool>,
    selection: Vec<SelectedComponent>,
    next_sequence: u64,
}

impl SelectionEngine {
    pub fn new(catalog: Catalog) -> Self {
        let selectable = catalog
            .components()
            .iter()
            .map(|component| component.draggable)
            .collect();
        Self {
            catalog,
            selectable,
            selection: Vec::new(),
            next_sequence: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &[SelectedComponent] {
        &self.selection
    }

    pub(crate) fn selectable_flags(&self) -> &[bool] {
        &self.selectable
    }

    pub fn is_selectable(&self, component_id: &str) -> bool {
        self.catalog
            .component_position(component_id)
            .and_then(|position| self.selectable.get(position).copied())
            .unwrap_or(false)
    }

    pub fn occupant(&self, category: &str) -> Option<&SelectedComponent> {
        self.selection
            .iter()
            .find(|selected| selected.category == category)
    }

    pub fn is_category_occupied(&self, category: &str) -> bool {
        self.occupant(category).is_some()
    }

    /// Drag-start check. Does not change state.
    pub fn begin_drag(&self, component_id: &str) -> DragOutcome {
        match self.check_selectable(component_id) {
            Ok(()) => DragOutcome::Started,
            Err(reason) => DragOutcome::Refused(reason),
        }
    }

    pub fn attempt_select(&mut self, component_id: &str) -> SelectOutcome {
        if let Err(reason) = self.check_selectable(component_id) {
            tracing::debug!(
                target: "selection",
                component_id = %component_id,
                reason = ?reason,
                "select_rejected"
            );
            return SelectOutcome::Rejected(reason);
        }

        let Some(component) = self.catalog.component(component_id) else {
            return SelectOutcome::Rejected(RejectReason::UnknownComponent);
        };

        self.next_sequence = self.next_sequence.saturating_add(1);
        let selected = SelectedComponent {
            instance_id: format!("sel:{}", self.next_sequence),
            component_id: component.id.clone(),
            category: component.category.clone(),
            display_name: component.display_name.clone(),
        };
        let category = selected.category.clone();

        self.selection.push(selected.clone());
        self.set_category_blocked(&category, true);

        tracing::debug!(
            target: "selection",
            component_id = %selected.component_id,
            instance_id = %selected.instance_id,
            category = %category,
            selected_count = self.selection.len(),
            "select_accepted"
        );
        SelectOutcome::Accepted(selected)
    }

    pub fn deselect(&mut self, instance_id: &str) -> DeselectOutcome {
        let Some(position) = self
            .selection
            .iter()
            .position(|selected| selected.instance_id == instance_id)
        else {
            tracing::debug!(
                target: "selection",
                instance_id = %instance_id,
                "deselect_ignored_not_selected"
            );
            return DeselectOutcome::NotSelected;
        };

        let removed = self.selection.remove(position);
        self.set_category_blocked(&removed.category, false);

        tracing::debug!(
            target: "selection",
            instance_id = %removed.instance_id,
            category = %removed.category,
            selected_count = self.selection.len(),
            "deselected"
        );
        DeselectOutcome::Removed(removed)
    }

    pub fn is_complete(&self) -> bool {
        self.catalog.required_categories().all(|category| {
            self.selection
                .iter()
                .filter(|selected| selected.category == category.key)
                .count()
                == 1
        })
    }

    pub fn summarize(&self) -> Summary {
        let texts = self.catalog.texts();
        if !self.is_complete() {
            return Summary::Incomplete {
                message: texts.incomplete.clone(),
            };
        }

        let entries: Vec<SummaryEntry> = self
            .catalog
            .required_categories()
            .filter_map(|category| {
                self.occupant(&category.key).map(|selected| SummaryEntry {
                    category: category.key.clone(),
                    label: category.label.clone(),
                    display_name: selected.display_name.clone(),
                })
            })
            .collect();

        if entries.is_empty() {
            return Summary::Empty {
                message: texts.empty.clone(),
            };
        }

        Summary::Report {
            heading: texts.heading.clone(),
            entries,
        }
    }

    pub fn reset(&mut self) {
        let cleared = self.selection.len();
        self.selection.clear();
        for (flag, component) in self
            .selectable
            .iter_mut()
            .zip(self.catalog.components().iter())
        {
            *flag = component.draggable;
        }
        tracing::debug!(target: "selection", cleared, "selection_reset");
    }

    pub fn component_views(&self) -> Vec<ComponentView> {
        self.catalog
            .components()
            .iter()
            .zip(self.selectable.iter())
            .map(|(component, selectable)| ComponentView {
                component_id: component.id.clone(),
                category: component.category.clone(),
                display_name: component.display_name.clone(),
                selectable: *selectable,
            })
            .collect()
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            components: self.component_views(),
            selection: self.selection.clone(),
            complete: self.is_complete(),
        }
    }

    fn check_selectable(&self, component_id: &str) -> Result<(), RejectReason> {
        let component = self
            .catalog
            .component(component_id)
            .ok_or(RejectReason::UnknownComponent)?;

        if let Some(occupant) = self.occupant(&component.category) {
            return Err(RejectReason::CategoryOccupied {
                occupant: occupant.instance_id.clone(),
            });
        }

        if !self.is_selectable(component_id) {
            return Err(RejectReason::NotDraggable);
        }

        Ok(())
    }

    fn set_category_blocked(&mut self, category: &str, blocked: bool) {
        for (flag, component) in self
            .selectable
            .iter_mut()
            .zip(self.catalog.components().iter())
        {
            if component.category == category {
                *flag = !blocked && component.draggable;
            }
        }
    }
}
