//! Client-side order tally
//!
//! The gateway prices lines one at a time and keeps nothing; the summary
//! command keeps the running order locally, the way the voice client does.

use std::fmt;

use anyhow::{bail, Context, Result};

use crate::api::OrderLine;

/// One command-line entry: `item`, `item:qty` or `item:-qty`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Add { item: String, quantity: i64 },
    Remove { item: String, quantity: i64 },
}

/// Parse an entry. Quantity defaults to 1; a negative quantity removes.
pub fn parse_entry(entry: &str) -> Result<Entry> {
    let (item, quantity) = match entry.split_once(':') {
        Some((item, qty)) => {
            let quantity: i64 = qty
                .parse()
                .with_context(|| format!("Invalid quantity in '{}'", entry))?;
            (item, quantity)
        }
        None => (entry, 1),
    };

    if item.is_empty() {
        bail!("Missing item name in '{}'", entry);
    }

    let item = item.to_string();
    match quantity {
        0 => bail!("Quantity must not be zero in '{}'", entry),
        q if q > 0 => Ok(Entry::Add { item, quantity: q }),
        q => Ok(Entry::Remove {
            item,
            quantity: q.saturating_abs(),
        }),
    }
}

/// What a removal did to the order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    Reduced { name: String, by: i64 },
    RemovedAll { name: String },
    NotInOrder { name: String },
}

impl fmt::Display for Removal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Removal::Reduced { name, by } => write!(f, "Reduced quantity of {} by {}.", name, by),
            Removal::RemovedAll { name } => write!(f, "Removed all of {} from the order.", name),
            Removal::NotInOrder { name } => {
                write!(f, "Item '{}' not found in current order.", name)
            }
        }
    }
}

/// Accumulated order lines, one per item name
#[derive(Debug, Default)]
pub struct OrderSummary {
    lines: Vec<OrderLine>,
}

impl OrderSummary {
    /// Add a priced line, merging with an existing line for the same item
    pub fn add(&mut self, line: OrderLine) {
        match self.lines.iter_mut().find(|l| l.name == line.name) {
            Some(existing) => existing.quantity += line.quantity,
            None => self.lines.push(line),
        }
    }

    /// Take `quantity` of `name` off the order.
    ///
    /// Asking for at least the ordered quantity drops the whole line.
    pub fn remove(&mut self, name: &str, quantity: i64) -> Removal {
        let Some(index) = self.lines.iter().position(|l| l.name == name) else {
            return Removal::NotInOrder {
                name: name.to_string(),
            };
        };

        if quantity < self.lines[index].quantity {
            self.lines[index].quantity -= quantity;
            Removal::Reduced {
                name: name.to_string(),
                by: quantity,
            }
        } else {
            self.lines.remove(index);
            Removal::RemovedAll {
                name: name.to_string(),
            }
        }
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_total(line: &OrderLine) -> f64 {
        line.price * line.quantity as f64
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(Self::line_total).sum()
    }

    /// Itemised summary, or the empty-order notice
    pub fn render(&self) -> String {
        if self.is_empty() {
            return "Your order is currently empty.".to_string();
        }

        let mut out = String::from("Your order summary:\n");
        for line in &self.lines {
            out.push_str(&format!(
                "- {} x {} (${:.2})\n",
                line.quantity,
                line.name,
                Self::line_total(line)
            ));
        }
        out.push_str(&format!("Total: ${:.2}", self.total()));
        out
    }

    /// Closing message for a finished order
    pub fn finalize(&self) -> String {
        if self.is_empty() {
            return "No items in order to finalize.".to_string();
        }

        let items: Vec<String> = self
            .lines
            .iter()
            .map(|l| format!("{} x {}", l.quantity, l.name))
            .collect();

        format!(
            "Your order has been finalized: {}. Total: ${:.2}. Please proceed to payment.",
            items.join(", "),
            self.total()
        )
    }
}
