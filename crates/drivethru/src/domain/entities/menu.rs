//! Menu - The fixed item/price table

use serde::Serialize;

use super::order::{OrderLine, OrderLineRequest};
use crate::domain::errors::DomainError;

/// A single menu entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MenuItem {
    pub name: &'static str,
    pub price: f64,
}

/// Items served at the drive-thru. Names are matched case-sensitively.
pub const MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        name: "burger",
        price: 5.99,
    },
    MenuItem {
        name: "fries",
        price: 2.99,
    },
    MenuItem {
        name: "coke",
        price: 1.99,
    },
    MenuItem {
        name: "nuggets",
        price: 4.99,
    },
];

static STANDARD_MENU: Menu = Menu { items: MENU_ITEMS };

/// Read-only view over a static item table
#[derive(Debug, Clone, Copy)]
pub struct Menu {
    items: &'static [MenuItem],
}

impl Menu {
    /// The process-wide drive-thru menu
    pub fn standard() -> &'static Menu {
        &STANDARD_MENU
    }

    pub fn items(&self) -> &'static [MenuItem] {
        self.items
    }

    /// Exact-match lookup
    pub fn lookup(&self, name: &str) -> Option<&'static MenuItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Lookup that fails with `ItemNotFound`
    pub fn item(&self, name: &str) -> Result<&'static MenuItem, DomainError> {
        self.lookup(name).ok_or_else(|| DomainError::item_not_found(name))
    }

    /// Price an order line against the table.
    ///
    /// Quantity is carried through as given; only the item name is checked.
    pub fn price_order_line(&self, request: &OrderLineRequest) -> Result<OrderLine, DomainError> {
        let item = self.lookup(&request.order).ok_or(DomainError::NoValidItems)?;

        Ok(OrderLine {
            name: item.name.to_string(),
            quantity: request.quantity,
            price: item.price,
        })
    }
}
