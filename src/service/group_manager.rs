//! Shopping Group Manager
//!
//! Owns the naming and lifecycle of persisted shopping lists built from
//! aggregated ingredients or direct manual entry. Duplicate display names
//! are a recoverable decision point, not an error: the caller gets a
//! `DuplicateName` outcome, asks the user, and re-invokes with
//! `confirmed = true` to proceed.

use serde::{Deserialize, Serialize};

use crate::domain::{
    AggregatedIngredient, DomainError, DomainResult, GroupKey, GroupTarget, ShoppingGroup,
    ShoppingItem,
};
use crate::repository::ShoppingItemStore;

/// Result of a create-group request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CreateOutcome {
    Created(GroupKey),
    /// An active group with the same display name already exists
    DuplicateName,
}

/// Result of a rename-group request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenameOutcome {
    Renamed(GroupKey),
    DuplicateName,
}

/// Result of a manual item append
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AddItemOutcome {
    Added {
        /// Owning group; freshly minted when the target was a draft
        key: GroupKey,
        item: ShoppingItem,
    },
    DuplicateName,
}

pub struct ShoppingGroupManager<S: ShoppingItemStore> {
    store: S,
}

impl<S: ShoppingItemStore> ShoppingGroupManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a group from the checked aggregated ingredients.
    ///
    /// Checks active groups for an exact display-name match first; on
    /// conflict without confirmation nothing is written. On proceed, mints
    /// the group key with the current timestamp and persists one item per
    /// checked ingredient as a single unit of work.
    pub async fn create_group(
        &self,
        name: &str,
        ingredients: &[AggregatedIngredient],
        confirmed: bool,
    ) -> DomainResult<CreateOutcome> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("Group name is empty".to_string()));
        }

        let checked: Vec<&AggregatedIngredient> =
            ingredients.iter().filter(|i| i.checked).collect();
        if checked.is_empty() {
            return Err(DomainError::InvalidInput(
                "No ingredients selected for the list".to_string(),
            ));
        }

        if !confirmed && self.active_name_taken(name, None).await? {
            return Ok(CreateOutcome::DuplicateName);
        }

        let key = GroupKey::mint(name);
        let items: Vec<ShoppingItem> = checked
            .iter()
            .map(|i| {
                ShoppingItem::new(
                    key.clone(),
                    i.display_name.clone(),
                    i.quantity,
                    i.unit.clone(),
                )
            })
            .collect();

        self.store.insert_items(&items).await?;
        log::info!("Created shopping group {} with {} items", key, items.len());
        Ok(CreateOutcome::Created(key))
    }

    /// Rename a group, preserving its uniqueness suffix.
    ///
    /// The item move is a single logical operation; a partially renamed
    /// group is never observable.
    pub async fn rename_group(
        &self,
        key: &GroupKey,
        new_name: &str,
        confirmed: bool,
    ) -> DomainResult<RenameOutcome> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(DomainError::InvalidInput("Group name is empty".to_string()));
        }

        let group = self.load_group(key).await?;
        if group.concluded {
            return Err(DomainError::GroupConcluded(key.encode()));
        }

        if new_name == key.name {
            return Ok(RenameOutcome::Renamed(key.clone()));
        }

        if !confirmed && self.active_name_taken(new_name, Some(key)).await? {
            return Ok(RenameOutcome::DuplicateName);
        }

        let new_key = key.renamed(new_name);
        self.store.move_group(key, &new_key).await?;
        log::info!("Renamed shopping group {} -> {}", key, new_key);
        Ok(RenameOutcome::Renamed(new_key))
    }

    /// Delete a group and every item it owns; idempotent
    pub async fn delete_group(&self, key: &GroupKey) -> DomainResult<()> {
        self.store.delete_group(key).await?;
        log::info!("Deleted shopping group {}", key);
        Ok(())
    }

    /// Finalize a fully purchased group into read-only history.
    ///
    /// Eligibility is derived from the purchased flags of the live rows,
    /// never from a stored concluded bit. Completing an already concluded
    /// group is a no-op success.
    pub async fn complete_group(&self, key: &GroupKey) -> DomainResult<()> {
        let group = self.load_group(key).await?;
        if group.concluded {
            return Ok(());
        }
        if !group.all_purchased() {
            return Err(DomainError::NotAllPurchased(key.encode()));
        }

        self.store.mark_concluded(key).await?;
        log::info!("Concluded shopping group {}", key);
        Ok(())
    }

    /// Append a manually entered item.
    ///
    /// A draft target provisions the group on this first insert (the
    /// draft-to-active transition), with the same duplicate-name check as
    /// group creation. An active target appends directly; a concluded
    /// target is rejected.
    pub async fn add_manual_item(
        &self,
        target: GroupTarget,
        name: &str,
        quantity: Option<f64>,
        unit: &str,
        confirmed: bool,
    ) -> DomainResult<AddItemOutcome> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("Item name is empty".to_string()));
        }
        let quantity = quantity.unwrap_or(1.0);
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(DomainError::InvalidInput(format!(
                "Quantity must be positive: {}",
                quantity
            )));
        }

        let key = match target {
            GroupTarget::Draft(group_name) => {
                let group_name = group_name.trim().to_string();
                if group_name.is_empty() {
                    return Err(DomainError::InvalidInput("Group name is empty".to_string()));
                }
                if !confirmed && self.active_name_taken(&group_name, None).await? {
                    return Ok(AddItemOutcome::DuplicateName);
                }
                GroupKey::mint(group_name)
            }
            GroupTarget::Active(key) => {
                let group = self.load_group(&key).await?;
                if group.concluded {
                    return Err(DomainError::GroupConcluded(key.encode()));
                }
                key
            }
        };

        let item = ShoppingItem::new(key.clone(), name.to_string(), quantity, unit.to_string());
        let mut inserted = self.store.insert_items(&[item]).await?;
        Ok(AddItemOutcome::Added {
            key,
            item: inserted.remove(0),
        })
    }

    /// Remove a single item from its (active) group
    pub async fn remove_item(&self, item_id: i64) -> DomainResult<()> {
        let item = self.require_mutable_item(item_id).await?;
        self.store.delete_item(item.id).await
    }

    /// Set the purchased flag on an item
    pub async fn set_item_purchased(&self, item_id: i64, purchased: bool) -> DomainResult<ShoppingItem> {
        let mut item = self.require_mutable_item(item_id).await?;
        item.purchased = purchased;
        self.store.update_item(&item).await
    }

    /// Update an item's quantity and/or the price the user reported
    pub async fn update_item(
        &self,
        item_id: i64,
        quantity: Option<f64>,
        price_informed: Option<f64>,
    ) -> DomainResult<ShoppingItem> {
        let mut item = self.require_mutable_item(item_id).await?;

        if let Some(q) = quantity {
            if !q.is_finite() || q <= 0.0 {
                return Err(DomainError::InvalidInput(format!(
                    "Quantity must be positive: {}",
                    q
                )));
            }
            item.quantity = q;
        }
        if let Some(price) = price_informed {
            if !price.is_finite() || price < 0.0 {
                return Err(DomainError::InvalidInput(format!(
                    "Price must not be negative: {}",
                    price
                )));
            }
            item.price_informed = Some(price);
        }

        self.store.update_item(&item).await
    }

    /// Fetch one group with its items
    pub async fn get_group(&self, key: &GroupKey) -> DomainResult<ShoppingGroup> {
        self.load_group(key).await
    }

    /// Groups still being shopped, newest first
    pub async fn list_active_groups(&self) -> DomainResult<Vec<ShoppingGroup>> {
        self.list_groups(Some(false)).await
    }

    /// Concluded groups (read-only history), newest first
    pub async fn list_concluded_groups(&self) -> DomainResult<Vec<ShoppingGroup>> {
        self.list_groups(Some(true)).await
    }

    async fn list_groups(&self, concluded: Option<bool>) -> DomainResult<Vec<ShoppingGroup>> {
        let mut keys = self.store.list_group_keys(concluded).await?;
        keys.sort_by(|a, b| b.suffix.cmp(&a.suffix));

        let mut groups = Vec::with_capacity(keys.len());
        for key in keys {
            let items = self.store.list_by_group(&key).await?;
            groups.push(ShoppingGroup::new(key, items));
        }
        Ok(groups)
    }

    /// Exact display-name match against active groups, optionally excluding
    /// the group being renamed
    async fn active_name_taken(
        &self,
        name: &str,
        excluding: Option<&GroupKey>,
    ) -> DomainResult<bool> {
        let keys = self.store.list_group_keys(Some(false)).await?;
        Ok(keys
            .iter()
            .any(|k| k.name == name && Some(k) != excluding))
    }

    async fn load_group(&self, key: &GroupKey) -> DomainResult<ShoppingGroup> {
        let items = self.store.list_by_group(key).await?;
        if items.is_empty() {
            return Err(DomainError::NotFound(format!("Group {}", key)));
        }
        Ok(ShoppingGroup::new(key.clone(), items))
    }

    /// Fetch an item and reject the mutation if its group is concluded
    async fn require_mutable_item(&self, item_id: i64) -> DomainResult<ShoppingItem> {
        let item = self
            .store
            .find_item(item_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Item {}", item_id)))?;
        if item.concluded {
            return Err(DomainError::GroupConcluded(item.group_key.encode()));
        }
        Ok(item)
    }
}
