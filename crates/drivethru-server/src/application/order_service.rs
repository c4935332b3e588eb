//! Order Application Service (Use Case)
//!
//! Prices order lines and menu lookups against the static menu.
//! Nothing is stored between calls.

use drivethru::{DomainError, Menu, MenuItem, OrderLine, OrderLineRequest};

/// Application service for menu and order operations
#[derive(Clone, Copy)]
pub struct OrderService {
    menu: &'static Menu,
}

impl OrderService {
    pub fn new(menu: &'static Menu) -> Self {
        Self { menu }
    }

    /// Price a line the caller wants to add
    pub fn take_order(&self, request: &OrderLineRequest) -> Result<OrderLine, DomainError> {
        let line = self.menu.price_order_line(request)?;

        tracing::info!(
            "Took order: {} x {} @ {}",
            line.quantity,
            line.name,
            line.price
        );

        Ok(line)
    }

    /// Price a line the caller wants to remove.
    ///
    /// Same validation as `take_order`; there is no stored order to change.
    pub fn remove_order(&self, request: &OrderLineRequest) -> Result<OrderLine, DomainError> {
        let line = self.menu.price_order_line(request)?;

        tracing::info!(
            "Removed from order: {} x {} @ {}",
            line.quantity,
            line.name,
            line.price
        );

        Ok(line)
    }

    /// Look up a single menu item
    pub fn item_details(&self, name: &str) -> Result<&'static MenuItem, DomainError> {
        self.menu.item(name)
    }
}

impl Default for OrderService {
    fn default() -> Self {
        Self::new(Menu::standard())
    }
}
