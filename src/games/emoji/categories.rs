//! The classic emoji question set: Fruits, Foods, Sports.
//!
//! Three categories of eight questions each. Equal lengths matter: the
//! question index survives category rerolls, so unequal categories would
//! let a short one cut a session off early (see [`crate::round`]).

use crate::catalog::{Category, CategoryId, CategoryRegistry};

/// Category ID for Fruits.
pub const FRUITS: CategoryId = CategoryId::new(0);
/// Category ID for Foods.
pub const FOODS: CategoryId = CategoryId::new(1);
/// Category ID for Sports.
pub const SPORTS: CategoryId = CategoryId::new(2);

/// Build the classic three-category registry.
#[must_use]
pub fn builtin_categories() -> CategoryRegistry {
    let mut registry = CategoryRegistry::new();

    registry.register(
        Category::new(FRUITS, "Fruits")
            .with_question("🍎", "A red or green fruit, often used for pies")
            .with_question("🍌", "A long, yellow fruit, often eaten as a snack")
            .with_question("🍍", "A tropical fruit with a spiky skin")
            .with_question("🍓", "A small red fruit with tiny seeds on the outside")
            .with_question("🍇", "A bunch of small, round, purple fruits")
            .with_question("🍊", "An orange citrus fruit")
            .with_question("🍒", "A small, round, red fruit")
            .with_question("🍑", "A sweet fruit with a fuzzy skin"),
    );

    registry.register(
        Category::new(FOODS, "Foods")
            .with_question(
                "🍕",
                "A dish made of a flat dough base topped with cheese, tomatoes, and other ingredients",
            )
            .with_question("🍔", "A sandwich consisting of a cooked patty, usually made from beef")
            .with_question("🍣", "A Japanese dish consisting of vinegared rice and raw fish")
            .with_question("🍦", "A sweet frozen dessert, often served in a cone")
            .with_question("🍩", "A fried dough pastry, often ring-shaped, with a hole in the center")
            .with_question("🍪", "A sweet baked treat, often with chocolate chips")
            .with_question("🌮", "A Mexican dish with a folded tortilla and various fillings")
            .with_question("🥗", "A healthy meal made of vegetables"),
    );

    registry.register(
        Category::new(SPORTS, "Sports")
            .with_question("⚽", "A ball game played by two teams of eleven players each")
            .with_question("🏀", "A game where players try to score by shooting a ball through a hoop")
            .with_question("🏈", "A team sport played with an oval-shaped ball")
            .with_question(
                "🏓",
                "A game played on a table where players hit a ball back and forth with paddles",
            )
            .with_question("🏸", "A sport played with a shuttlecock and rackets")
            .with_question("🥍", "A team sport with a ball and a long-handled stick")
            .with_question("🎾", "A sport where players hit a ball over a net with rackets")
            .with_question("🏌️‍♂️", "A sport where players hit a ball into a hole using clubs"),
    );

    registry
}
