//! Category registry for lookup and random selection.
//!
//! The `CategoryRegistry` stores every category available to a quiz.
//! Lookup is by `CategoryId`; iteration follows registration order so
//! that seeded sessions pick categories deterministically.

use rustc_hash::FxHashMap;

use super::category::{Category, CategoryId};

/// Registry of quiz categories.
///
/// ## Example
///
/// ```
/// use emoji_quiz::catalog::{Category, CategoryId, CategoryRegistry};
///
/// let mut registry = CategoryRegistry::new();
/// registry.register(
///     Category::new(CategoryId::new(0), "Fruits")
///         .with_question("🍎", "A red or green fruit, often used for pies"),
/// );
///
/// let found = registry.get(CategoryId::new(0)).unwrap();
/// assert_eq!(found.name, "Fruits");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CategoryRegistry {
    categories: FxHashMap<CategoryId, Category>,
    /// Registration order; random picks index into this.
    order: Vec<CategoryId>,
}

impl CategoryRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a category.
    ///
    /// Panics if a category with the same ID already exists.
    pub fn register(&mut self, category: Category) {
        if self.categories.contains_key(&category.id) {
            panic!("Category with ID {:?} already registered", category.id);
        }
        self.order.push(category.id);
        self.categories.insert(category.id, category);
    }

    /// Get a category by ID.
    #[must_use]
    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(&id)
    }

    /// Get a category by ID, panicking if not found.
    ///
    /// Use when you're certain the category exists.
    #[must_use]
    pub fn get_unchecked(&self, id: CategoryId) -> &Category {
        self.categories.get(&id).expect("Category not found in registry")
    }

    /// Check if a category ID is registered.
    #[must_use]
    pub fn contains(&self, id: CategoryId) -> bool {
        self.categories.contains_key(&id)
    }

    /// Get the number of registered categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Registered IDs in registration order.
    #[must_use]
    pub fn ids(&self) -> &[CategoryId] {
        &self.order
    }

    /// Iterate over categories in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.order.iter().map(move |id| &self.categories[id])
    }

    /// Find categories matching a predicate, in registration order.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Category>
    where
        F: Fn(&Category) -> bool,
    {
        self.iter().filter(move |c| predicate(c))
    }
}
