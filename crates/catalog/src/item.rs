use serde::{Deserialize, Serialize};

use toyraffle_core::{DomainError, DomainResult, ItemId};

/// Item record as it appears in configuration, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
    pub weight: f64,
}

impl ItemSpec {
    pub fn new(id: u32, name: impl Into<String>, quantity: u32, weight: f64) -> Self {
        Self {
            id: ItemId::new(id),
            name: name.into(),
            quantity,
            weight,
        }
    }
}

/// A catalog entry: something that can be won.
///
/// `weight` is a relative proportion; it does not need to sum to 100 across
/// the catalog. `stock` is unsigned, so it can never go negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: ItemId,
    name: String,
    stock: u32,
    weight: f64,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, stock: u32, weight: f64) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        // Winners are recorded one name per line.
        if name.contains(['\n', '\r']) {
            return Err(DomainError::validation("name cannot contain line breaks"));
        }
        ensure_weight(weight)?;
        Ok(Self {
            id,
            name,
            stock,
            weight,
        })
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    pub fn to_spec(&self) -> ItemSpec {
        ItemSpec {
            id: self.id,
            name: self.name.clone(),
            quantity: self.stock,
            weight: self.weight,
        }
    }

    pub(crate) fn set_weight(&mut self, weight: f64) -> DomainResult<()> {
        ensure_weight(weight)?;
        self.weight = weight;
        Ok(())
    }

    /// Hand out one unit of stock.
    pub(crate) fn take_one(&mut self) -> DomainResult<()> {
        self.stock = self
            .stock
            .checked_sub(1)
            .ok_or_else(|| DomainError::invariant("stock cannot go negative"))?;
        Ok(())
    }
}

impl TryFrom<ItemSpec> for Item {
    type Error = DomainError;

    fn try_from(spec: ItemSpec) -> Result<Self, Self::Error> {
        Item::new(spec.id, spec.name, spec.quantity, spec.weight)
    }
}

fn ensure_weight(weight: f64) -> DomainResult<()> {
    if !weight.is_finite() {
        return Err(DomainError::validation("weight must be finite"));
    }
    if weight < 0.0 {
        return Err(DomainError::validation("weight cannot be negative"));
    }
    Ok(())
}
