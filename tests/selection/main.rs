mod engine;
mod summary;

use pcbuild::selection::{
    Catalog, CatalogTexts, CategoryDef, ComponentDef, SelectOutcome, SelectedComponent,
    SelectionEngine,
};

pub const REQUIRED: [&str; 6] = ["cpu", "gpu", "ram", "hdd", "psu", "cooling"];

pub fn pc_engine() -> SelectionEngine {
    SelectionEngine::new(Catalog::builtin().expect("builtin catalog should be valid"))
}

/// Two required categories, one optional category, one undeclared category
/// and a component that can never be dragged.
pub fn mixed_engine() -> SelectionEngine {
    let catalog = Catalog::new(
        vec![
            CategoryDef::required("cpu", "Processor"),
            CategoryDef::required("gpu", "Graphics"),
            CategoryDef::optional("case", "Case"),
        ],
        vec![
            ComponentDef::new("cpu-x", "cpu", "X"),
            ComponentDef::new("cpu-y", "cpu", "Y"),
            ComponentDef::new("gpu-a", "gpu", "A"),
            ComponentDef::new("gpu-fixed", "gpu", "Display only").fixed(),
            ComponentDef::new("case-1", "case", "Tower"),
            ComponentDef::new("fan-1", "fan", "120mm Fan"),
        ],
        CatalogTexts {
            heading: "Your build:".to_string(),
            incomplete: "Select every required component first".to_string(),
            empty: "No components selected".to_string(),
        },
    )
    .expect("fixture catalog should be valid");
    SelectionEngine::new(catalog)
}

pub fn select(engine: &mut SelectionEngine, component_id: &str) -> SelectedComponent {
    match engine.attempt_select(component_id) {
        SelectOutcome::Accepted(selected) => selected,
        SelectOutcome::Rejected(reason) => {
            panic!("selection of {component_id} should be accepted, got {reason:?}")
        }
    }
}

pub fn first_component_of(engine: &SelectionEngine, category: &str) -> String {
    engine
        .catalog()
        .components_in(category)
        .next()
        .map(|component| component.id.clone())
        .expect("category should have components")
}
