use tokio::sync::RwLock;

use crate::types::{Item, ItemPatch, NewItem, truthy};

const SEED_DATA: &str = include_str!("../data/items.json");

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Missing fields")]
    MissingFields,
    #[error("Failed to load seed dataset: {0}")]
    Seed(#[from] serde_json::Error),
}

/// Ordered, process-local item list. Every mutation takes the write lock, so
/// id assignment and removal never interleave.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: RwLock<Vec<Item>>,
}

impl ItemStore {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Store loaded from the bundled dataset.
    pub fn seeded() -> Result<Self, StoreError> {
        let items: Vec<Item> = serde_json::from_str(SEED_DATA)?;
        log::debug!("Loaded {} seed item(s)", items.len());
        Ok(Self::new(items))
    }

    pub async fn list(&self) -> Vec<Item> {
        self.items.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    pub async fn get(&self, id: i64) -> Option<Item> {
        self.items.read().await.iter().find(|i| i.id == id).cloned()
    }

    /// Appends a new item with `id = len + 1`. Ids are not recycled, so this
    /// can collide with a surviving item once something has been deleted.
    pub async fn create(&self, new: NewItem) -> Result<Item, StoreError> {
        let name = truthy(new.name);
        let price = truthy(new.price);
        let category = truthy(new.category);

        let (Some(name), Some(price), Some(category)) = (name, price, category) else {
            return Err(StoreError::MissingFields);
        };

        let mut items = self.items.write().await;
        let item = Item {
            id: items.len() as i64 + 1,
            name,
            price,
            category,
        };
        items.push(item.clone());
        Ok(item)
    }

    pub async fn update(&self, id: i64, patch: ItemPatch) -> Option<Item> {
        let mut items = self.items.write().await;
        let item = items.iter_mut().find(|i| i.id == id)?;

        if let Some(name) = truthy(patch.name) {
            item.name = name;
        }
        if let Some(price) = truthy(patch.price) {
            item.price = price;
        }
        if let Some(category) = truthy(patch.category) {
            item.category = category;
        }

        Some(item.clone())
    }

    pub async fn delete(&self, id: i64) -> Option<Item> {
        let mut items = self.items.write().await;
        let pos = items.iter().position(|i| i.id == id)?;
        Some(items.remove(pos))
    }
}

/// Reads an id the way a lenient integer parse does: optional leading
/// whitespace and sign, then the longest run of digits. Anything without
/// digits yields `None`, which matches no item.
pub fn parse_id(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}
