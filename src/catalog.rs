//! # Menu Catalog
//!
//! The static, read-only menu the cart is filled from. The stores only ever consume
//! [`FoodItem`] values taken from here; nothing in the system mutates the catalog.

use crate::model::{Category, CategoryId, FoodItem, ItemId};
use rust_decimal::Decimal;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    items: Vec<FoodItem>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>, items: Vec<FoodItem>) -> Self {
        Self { categories, items }
    }

    /// The restaurant's menu: three categories with three items each.
    pub fn standard() -> Self {
        let categories = vec![
            Category::new("food", "Food"),
            Category::new("drink", "Drink"),
            Category::new("dessert", "Dessert"),
        ];

        let items = vec![
            FoodItem::new(
                "food-1",
                "food",
                "Burger",
                Decimal::new(899, 2),
                "Classic burger + cheese & bacon",
            ),
            FoodItem::new(
                "food-2",
                "food",
                "Pizza",
                Decimal::new(1299, 2),
                "Pepperoni pizza + extra cheese",
            ),
            FoodItem::new(
                "food-3",
                "food",
                "Salad",
                Decimal::new(750, 2),
                "Fresh garden salad + vinaigrette",
            ),
            FoodItem::new(
                "drink-1",
                "drink",
                "Black Tea",
                Decimal::new(350, 2),
                "Hot black tea",
            ),
            FoodItem::new(
                "drink-2",
                "drink",
                "Green Tea",
                Decimal::new(375, 2),
                "Hot green tea",
            ),
            FoodItem::new(
                "drink-3",
                "drink",
                "Oolong Tea",
                Decimal::new(400, 2),
                "Hot oolong tea",
            ),
            FoodItem::new(
                "dessert-1",
                "dessert",
                "Chocolate Cake",
                Decimal::new(599, 2),
                "Rich chocolate cake + frosting",
            ),
            FoodItem::new(
                "dessert-2",
                "dessert",
                "Cheesecake",
                Decimal::new(650, 2),
                "New York style cheesecake",
            ),
            FoodItem::new(
                "dessert-3",
                "dessert",
                "Ice Cream",
                Decimal::new(450, 2),
                "Vanilla ice cream + caramel sauce",
            ),
        ];

        Self::new(categories, items)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Items listed under `category`, in menu order.
    pub fn items_in_category<'a>(
        &'a self,
        category: &'a CategoryId,
    ) -> impl Iterator<Item = &'a FoodItem> + 'a {
        self.items
            .iter()
            .filter(move |item| &item.category_id == category)
    }

    pub fn find_item(&self, id: &ItemId) -> Option<&FoodItem> {
        self.items.iter().find(|item| &item.id == id)
    }
}
