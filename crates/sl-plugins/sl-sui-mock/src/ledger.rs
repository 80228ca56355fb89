//! In-memory object table standing in for a Sui fullnode.

use std::sync::Mutex;

use async_trait::async_trait;
use sl_core::ledger::{LedgerObject, ObjectFilter};
use sl_core::traits::LedgerClient;

#[derive(Debug, Default)]
pub struct MockLedger {
    objects: Mutex<Vec<LedgerObject>>,
}

impl MockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn objects(&self) -> anyhow::Result<std::sync::MutexGuard<'_, Vec<LedgerObject>>> {
        self.objects
            .lock()
            .map_err(|_| anyhow::anyhow!("ledger object table poisoned"))
    }

    pub fn insert(&self, object: LedgerObject) -> anyhow::Result<()> {
        self.objects()?.push(object);
        Ok(())
    }

    /// Applies `update` to the fields of one object.
    pub fn update_fields(
        &self,
        object_id: &str,
        update: impl FnOnce(&mut serde_json::Value),
    ) -> anyhow::Result<()> {
        let mut objects = self.objects()?;
        let object = objects
            .iter_mut()
            .find(|o| o.object_id == object_id)
            .ok_or_else(|| anyhow::anyhow!("object {} does not exist", object_id))?;
        update(&mut object.fields);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.objects().map(|o| o.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl LedgerClient for MockLedger {
    /// Every object belongs to the package; only the struct type filters.
    async fn get_owned_objects(&self, filter: &ObjectFilter) -> anyhow::Result<Vec<LedgerObject>> {
        Ok(self
            .objects()?
            .iter()
            .filter(|o| o.struct_type == filter.struct_type)
            .cloned()
            .collect())
    }
}
