use pcbuild::selection::{
    Catalog, CatalogTexts, CategoryDef, ComponentDef, SelectionEngine, Summary,
};

use super::{REQUIRED, first_component_of, mixed_engine, pc_engine, select};

#[test]
fn given_one_item_per_category_when_summarize_then_six_entries_in_declared_order() {
    let mut engine = pc_engine();
    // Insert in reverse so declaration order and insertion order differ.
    for category in REQUIRED.iter().rev() {
        let component_id = first_component_of(&engine, category);
        select(&mut engine, &component_id);
    }

    assert!(engine.is_complete());
    let summary = engine.summarize();

    let Summary::Report { heading, entries } = &summary else {
        panic!("complete selection should produce a report, got {summary:?}");
    };
    assert_eq!(heading, "Ваша конфігурація:");
    let categories: Vec<&str> = entries.iter().map(|e| e.category.as_str()).collect();
    assert_eq!(categories, REQUIRED.to_vec());
    let pairs: Vec<(&str, &str)> = entries
        .iter()
        .map(|e| (e.label.as_str(), e.display_name.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Процесор", "Intel Core i5-13400F"),
            ("Відеокарта", "NVIDIA GeForce RTX 4070"),
            ("Оперативна пам'ять", "Kingston Fury Beast 32GB DDR5"),
            ("Жорсткий диск", "Seagate Barracuda 2TB"),
            ("Блок живлення", "Corsair RM850x"),
            ("Охолодження", "Noctua NH-D15"),
        ]
    );
    assert!(summary.to_html().starts_with("<h3>Ваша конфігурація:</h3><ul><li>Процесор: "));
}

#[test]
fn given_cpu_and_gpu_only_when_summarize_then_incomplete_message() {
    let mut engine = pc_engine();
    select(&mut engine, "cpu-r7-7800x3d");
    select(&mut engine, "gpu-rx-7800xt");

    assert!(!engine.is_complete());
    assert_eq!(
        engine.summarize(),
        Summary::Incomplete {
            message: "Виберіть всі необхідні компоненти перед завершенням".to_string()
        }
    );
}

#[test]
fn given_empty_selection_when_summarize_then_incomplete() {
    let engine = pc_engine();
    assert!(!engine.summarize().is_report());
    assert!(!engine.is_complete());
}

#[test]
fn given_required_filled_when_optional_missing_then_complete_and_optional_not_listed() {
    let mut engine = mixed_engine();
    select(&mut engine, "cpu-y");
    select(&mut engine, "gpu-a");
    assert!(engine.is_complete());

    select(&mut engine, "case-1");
    select(&mut engine, "fan-1");
    let summary = engine.summarize();

    assert_eq!(summary.entries().len(), 2);
    assert_eq!(
        summary.to_string(),
        "Your build:\n  - Processor: Y\n  - Graphics: A"
    );
}

#[test]
fn given_complete_selection_when_required_item_removed_then_incomplete_again() {
    let mut engine = mixed_engine();
    let cpu = select(&mut engine, "cpu-x");
    select(&mut engine, "gpu-a");
    assert!(engine.is_complete());

    engine.deselect(&cpu.instance_id);

    assert!(!engine.is_complete());
    assert_eq!(
        engine.summarize(),
        Summary::Incomplete {
            message: "Select every required component first".to_string()
        }
    );
}

#[test]
fn given_no_required_categories_when_summarize_then_empty_message() {
    let catalog = Catalog::new(
        vec![CategoryDef::optional("case", "Case")],
        vec![ComponentDef::new("case-1", "case", "Tower")],
        CatalogTexts::default(),
    )
    .expect("catalog should be valid");
    let mut engine = SelectionEngine::new(catalog);

    assert!(engine.is_complete());
    assert_eq!(
        engine.summarize(),
        Summary::Empty {
            message: "Немає вибраних компонентів".to_string()
        }
    );

    select(&mut engine, "case-1");
    assert!(matches!(engine.summarize(), Summary::Empty { .. }));
}
