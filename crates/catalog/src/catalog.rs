use toyraffle_core::{DomainError, DomainResult, ItemId};

use crate::draw::DrawSource;
use crate::item::{Item, ItemSpec};

/// Why a draw produced no winner.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoResult {
    /// The catalog holds no items.
    EmptyCatalog,
    /// Every item has zero weight, so there is nothing to draw from.
    NoWeight,
    /// The draw landed on an item with no stock left. The draw is abandoned
    /// rather than moved on to another item.
    OutOfStock { id: ItemId },
    /// The draw value fell outside `[0, total_weight)` or past the last
    /// cumulative boundary.
    Exhausted,
}

impl core::fmt::Display for NoResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NoResult::EmptyCatalog => f.write_str("catalog is empty"),
            NoResult::NoWeight => f.write_str("total weight is zero"),
            NoResult::OutOfStock { id } => write!(f, "item {id} is out of stock"),
            NoResult::Exhausted => f.write_str("draw fell outside the catalog"),
        }
    }
}

/// Result of a single draw.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOutcome {
    /// The winning item, as it stands after its stock was decremented.
    Won(Item),
    NoResult(NoResult),
}

impl DrawOutcome {
    pub fn winner(&self) -> Option<&Item> {
        match self {
            DrawOutcome::Won(item) => Some(item),
            DrawOutcome::NoResult(_) => None,
        }
    }

    pub fn is_won(&self) -> bool {
        matches!(self, DrawOutcome::Won(_))
    }
}

/// Insertion-ordered collection of raffle items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from configuration records, in order.
    pub fn from_specs<I>(specs: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = ItemSpec>,
    {
        let mut catalog = Self::new();
        for spec in specs {
            catalog.add(Item::try_from(spec)?)?;
        }
        Ok(catalog)
    }

    /// Append an item. Identifiers must be unique within the catalog.
    pub fn add(&mut self, item: Item) -> DomainResult<()> {
        if self.get(item.id_typed()).is_some() {
            return Err(DomainError::conflict(format!(
                "item {} already exists",
                item.id_typed()
            )));
        }
        ensure_total_finite(self.total_weight() + item.weight())?;
        self.items.push(item);
        Ok(())
    }

    /// Replace the weight of the item with the given id.
    ///
    /// Unknown ids return `NotFound` and leave the catalog untouched.
    pub fn update_weight(&mut self, id: ItemId, weight: f64) -> DomainResult<()> {
        let current = self.get(id).ok_or_else(DomainError::not_found)?.weight();
        ensure_total_finite(self.total_weight() - current + weight)?;

        let item = self
            .items
            .iter_mut()
            .find(|item| item.id_typed() == id)
            .ok_or_else(DomainError::not_found)?;
        item.set_weight(weight)
    }

    /// Weighted random draw.
    ///
    /// The draw value `r` is taken from `[0, total_weight)`; the first item
    /// whose running weight sum exceeds `r` is the candidate. A candidate with
    /// stock loses one unit and wins. A candidate without stock ends the draw
    /// with no result, even if later items still have stock.
    pub fn choose<D>(&mut self, source: &mut D) -> DrawOutcome
    where
        D: DrawSource + ?Sized,
    {
        if self.items.is_empty() {
            return DrawOutcome::NoResult(NoResult::EmptyCatalog);
        }

        let total = self.total_weight();
        if total <= 0.0 {
            return DrawOutcome::NoResult(NoResult::NoWeight);
        }

        let r = source.draw(total);
        if !(0.0..total).contains(&r) {
            return DrawOutcome::NoResult(NoResult::Exhausted);
        }

        let mut cumulative = 0.0;
        for item in &mut self.items {
            cumulative += item.weight();
            if r < cumulative {
                return match item.take_one() {
                    Ok(()) => DrawOutcome::Won(item.clone()),
                    Err(_) => DrawOutcome::NoResult(NoResult::OutOfStock {
                        id: item.id_typed(),
                    }),
                };
            }
        }

        DrawOutcome::NoResult(NoResult::Exhausted)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id_typed() == id)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all weights, including items that are out of stock.
    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(Item::weight).sum()
    }

    pub fn total_stock(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.stock())).sum()
    }

    /// Each item's share of the total weight, in catalog order.
    pub fn odds(&self) -> Vec<(ItemId, f64)> {
        let total = self.total_weight();
        self.items
            .iter()
            .map(|item| {
                let share = if total > 0.0 { item.weight() / total } else { 0.0 };
                (item.id_typed(), share)
            })
            .collect()
    }
}

fn ensure_total_finite(total: f64) -> DomainResult<()> {
    if !total.is_finite() {
        return Err(DomainError::validation("total weight overflows"));
    }
    Ok(())
}
