use std::collections::BTreeSet;

use crate::selection::{
    engine::SelectionEngine,
    error::{SelectionError, invariant_violation},
};

pub fn assert_selection_invariants(engine: &SelectionEngine) -> Result<(), SelectionError> {
    let catalog = engine.catalog();
    let mut occupied = BTreeSet::new();
    let mut instance_ids = BTreeSet::new();

    for selected in engine.selection() {
        if !instance_ids.insert(selected.instance_id.as_str()) {
            return Err(invariant_violation(format!(
                "instance id '{}' appears more than once",
                selected.instance_id
            )));
        }
        if !occupied.insert(selected.category.as_str()) {
            return Err(invariant_violation(format!(
                "category '{}' is occupied more than once",
                selected.category
            )));
        }

        let source = catalog.component(&selected.component_id).ok_or_else(|| {
            invariant_violation(format!(
                "instance '{}' references unknown component '{}'",
                selected.instance_id, selected.component_id
            ))
        })?;
        if source.category != selected.category {
            return Err(invariant_violation(format!(
                "instance '{}' category '{}' differs from component category '{}'",
                selected.instance_id, selected.category, source.category
            )));
        }
    }

    let flags = engine.selectable_flags();
    if flags.len() != catalog.components().len() {
        return Err(invariant_violation(format!(
            "selectable flag count {} does not match catalog size {}",
            flags.len(),
            catalog.components().len()
        )));
    }

    for (component, selectable) in catalog.components().iter().zip(flags.iter()) {
        let expected = component.draggable && !occupied.contains(component.category.as_str());
        if *selectable != expected {
            return Err(invariant_violation(format!(
                "component '{}' selectable={} but expected {}",
                component.id, selectable, expected
            )));
        }
    }

    Ok(())
}
