use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::selection::{
    error::{SelectionError, invalid_catalog},
    types::{CategoryDef, ComponentDef},
};

fn default_heading() -> String {
    "Ваша конфігурація:".to_string()
}

fn default_incomplete() -> String {
    "Виберіть всі необхідні компоненти перед завершенням".to_string()
}

fn default_empty() -> String {
    "Немає вибраних компонентів".to_string()
}

/// Localized strings used when rendering a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogTexts {
    #[serde(default = "default_heading")]
    pub heading: String,
    #[serde(default = "default_incomplete")]
    pub incomplete: String,
    #[serde(default = "default_empty")]
    pub empty: String,
}

impl Default for CatalogTexts {
    fn default() -> Self {
        Self {
            heading: default_heading(),
            incomplete: default_incomplete(),
            empty: default_empty(),
        }
    }
}

/// Static set of categories and components offered for selection.
///
/// Category order is declaration order and drives summary ordering.
/// Components may reference a category that is not declared; such
/// components still obey the one-per-category rule but never count
/// towards completeness.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<CategoryDef>,
    components: Vec<ComponentDef>,
    component_index: BTreeMap<String, usize>,
    texts: CatalogTexts,
}

impl Catalog {
    pub fn new(
        categories: Vec<CategoryDef>,
        components: Vec<ComponentDef>,
        texts: CatalogTexts,
    ) -> Result<Self, SelectionError> {
        let mut category_keys = BTreeSet::new();
        for category in &categories {
            if category.key.trim().is_empty() {
                return Err(invalid_catalog("category key cannot be empty"));
            }
            if category.label.trim().is_empty() {
                return Err(invalid_catalog(format!(
                    "category '{}' has an empty label",
                    category.key
                )));
            }
            if !category_keys.insert(category.key.as_str()) {
                return Err(invalid_catalog(format!(
                    "duplicate category key '{}'",
                    category.key
                )));
            }
        }

        for component in &components {
            if component.id.trim().is_empty() {
                return Err(invalid_catalog("component id cannot be empty"));
            }
            if component.category.trim().is_empty() {
                return Err(invalid_catalog(format!(
                    "component '{}' has an empty category",
                    component.id
                )));
            }
            if component.display_name.trim().is_empty() {
                return Err(invalid_catalog(format!(
                    "component '{}' has an empty display_name",
                    component.id
                )));
            }
            if !category_keys.contains(component.category.as_str()) {
                tracing::warn!(
                    target: "catalog",
                    component_id = %component.id,
                    category = %component.category,
                    "component_category_undeclared"
                );
            }
        }
        let component_index = index_components(&components)?;

        Ok(Self {
            categories,
            components,
            component_index,
            texts,
        })
    }

    /// The PC build catalog shipped with the binary.
    pub fn builtin() -> Result<Self, SelectionError> {
        let categories = vec![
            CategoryDef::required("cpu", "Процесор"),
            CategoryDef::required("gpu", "Відеокарта"),
            CategoryDef::required("ram", "Оперативна пам'ять"),
            CategoryDef::required("hdd", "Жорсткий диск"),
            CategoryDef::required("psu", "Блок живлення"),
            CategoryDef::required("cooling", "Охолодження"),
        ];
        let components = vec![
            ComponentDef::new("cpu-i5-13400f", "cpu", "Intel Core i5-13400F"),
            ComponentDef::new("cpu-r7-7800x3d", "cpu", "AMD Ryzen 7 7800X3D"),
            ComponentDef::new("gpu-rtx-4070", "gpu", "NVIDIA GeForce RTX 4070"),
            ComponentDef::new("gpu-rx-7800xt", "gpu", "AMD Radeon RX 7800 XT"),
            ComponentDef::new("ram-ddr5-32", "ram", "Kingston Fury Beast 32GB DDR5"),
            ComponentDef::new("ram-ddr4-16", "ram", "Corsair Vengeance LPX 16GB DDR4"),
            ComponentDef::new("hdd-barracuda-2tb", "hdd", "Seagate Barracuda 2TB"),
            ComponentDef::new("hdd-wd-blue-1tb", "hdd", "WD Blue 1TB"),
            ComponentDef::new("psu-rm850x", "psu", "Corsair RM850x"),
            ComponentDef::new("psu-pure-power-750", "psu", "be quiet! Pure Power 12 M 750W"),
            ComponentDef::new("cooling-nh-d15", "cooling", "Noctua NH-D15"),
            ComponentDef::new(
                "cooling-lf2-280",
                "cooling",
                "Arctic Liquid Freezer II 280",
            ),
        ];

        Self::new(categories, components, CatalogTexts::default())
    }

    pub fn categories(&self) -> &[CategoryDef] {
        &self.categories
    }

    pub fn required_categories(&self) -> impl Iterator<Item = &CategoryDef> {
        self.categories.iter().filter(|category| category.required)
    }

    pub fn category(&self, key: &str) -> Option<&CategoryDef> {
        self.categories.iter().find(|category| category.key == key)
    }

    pub fn components(&self) -> &[ComponentDef] {
        &self.components
    }

    pub fn component(&self, id: &str) -> Option<&ComponentDef> {
        self.component_index
            .get(id)
            .and_then(|position| self.components.get(*position))
    }

    pub(crate) fn component_position(&self, id: &str) -> Option<usize> {
        self.component_index.get(id).copied()
    }

    pub fn components_in<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a ComponentDef> + 'a {
        self.components
            .iter()
            .filter(move |component| component.category == category)
    }

    pub fn texts(&self) -> &CatalogTexts {
        &self.texts
    }
}

fn index_components(
    components: &[ComponentDef],
) -> Result<BTreeMap<String, usize>, SelectionError> {
    let mut index = BTreeMap::new();
    for (position, component) in components.iter().enumerate() {
        if index.insert(component.id.clone(), position).is_some() {
            return Err(invalid_catalog(format!(
                "duplicate component id '{}'",
                component.id
            )));
        }
    }
    Ok(index)
}
