use serde::{Deserialize, Serialize};

pub type ComponentId = String;
pub type CategoryKey = String;
pub type InstanceId = String;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDef {
    pub id: ComponentId,
    pub category: CategoryKey,
    pub display_name: String,
    #[serde(default = "default_true")]
    pub draggable: bool,
}

impl ComponentDef {
    pub fn new(
        id: impl Into<ComponentId>,
        category: impl Into<CategoryKey>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            display_name: display_name.into(),
            draggable: true,
        }
    }

    pub fn fixed(mut self) -> Self {
        self.draggable = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub key: CategoryKey,
    pub label: String,
    #[serde(default = "default_true")]
    pub required: bool,
}

impl CategoryDef {
    pub fn required(key: impl Into<CategoryKey>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            required: true,
        }
    }

    pub fn optional(key: impl Into<CategoryKey>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            required: false,
        }
    }
}

/// A component placed in the drop target. Carries its category and name by
/// value so it stays meaningful independently of the catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedComponent {
    pub instance_id: InstanceId,
    pub component_id: ComponentId,
    pub category: CategoryKey,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentView {
    pub component_id: ComponentId,
    pub category: CategoryKey,
    pub display_name: String,
    pub selectable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RejectReason {
    UnknownComponent,
    NotDraggable,
    CategoryOccupied { occupant: InstanceId },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SelectOutcome {
    Accepted(SelectedComponent),
    Rejected(RejectReason),
}

impl SelectOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn accepted(&self) -> Option<&SelectedComponent> {
        match self {
            Self::Accepted(selected) => Some(selected),
            Self::Rejected(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DragOutcome {
    Started,
    Refused(RejectReason),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DeselectOutcome {
    Removed(SelectedComponent),
    NotSelected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    pub components: Vec<ComponentView>,
    pub selection: Vec<SelectedComponent>,
    pub complete: bool,
}
