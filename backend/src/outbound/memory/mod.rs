//! In-memory adapter backing every store port.
//!
//! All collections live behind one [`RwLock`]. Each port call takes the lock
//! once and releases it before returning, so mutations are atomic with
//! respect to each other and readers always receive owned clones.

mod seed;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use mockable::Clock;
use tracing::{debug, info};

use self::seed::Collections;
use crate::domain::advertiser::Advertiser;
use crate::domain::analytics::AnalyticsSnapshot;
use crate::domain::billing::{BillingProfile, Invoice};
use crate::domain::campaign::Campaign;
use crate::domain::creative::Creative;
use crate::domain::dashboard::DashboardSnapshot;
use crate::domain::deal::Deal;
use crate::domain::inventory::Inventory;
use crate::domain::ports::{
    AudienceSegments, BillingLedger, RecordStore, SnapshotSource, StoreError, UserDirectory,
};
use crate::domain::record::{IdGenerator, Record};
use crate::domain::user::{User, UserDraft};

/// Process-local store seeded from the embedded fixture.
pub struct MemoryStore {
    state: RwLock<Collections>,
    seed: Collections,
    ids: IdGenerator,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore").finish_non_exhaustive()
    }
}

impl MemoryStore {
    /// Store holding the embedded demo data.
    pub fn seeded(clock: Arc<dyn Clock>) -> Result<Self, StoreError> {
        let seed = Collections::embedded()?;
        info!(
            users = seed.users.len(),
            campaigns = seed.campaigns.len(),
            "memory store seeded"
        );
        Ok(Self::from_collections(seed, clock))
    }

    /// Store with no records at all.
    pub fn empty(clock: Arc<dyn Clock>) -> Self {
        Self::from_collections(Collections::default(), clock)
    }

    fn from_collections(seed: Collections, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: RwLock::new(seed.clone()),
            seed,
            ids: IdGenerator::new(),
            clock,
        }
    }

    /// Restore the collections the store was built with.
    pub fn reset(&self) -> Result<(), StoreError> {
        *self.write()? = self.seed.clone();
        debug!("memory store reset");
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Collections>, StoreError> {
        self.state
            .read()
            .map_err(|err| StoreError::poisoned(err.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Collections>, StoreError> {
        self.state
            .write()
            .map_err(|err| StoreError::poisoned(err.to_string()))
    }

    fn stamp<R: Record>(&self, draft: R::Draft) -> R {
        let now = self.clock.utc();
        R::from_draft(self.ids.mint(R::PREFIX, now), now, draft)
    }
}

fn find<'a, R: Record>(rows: &'a [R], id: &str) -> Option<&'a R> {
    rows.iter().find(|row| row.id().as_str() == id)
}

macro_rules! record_collection {
    ($($record:ty => $field:ident),+ $(,)?) => {
        $(
            impl RecordStore<$record> for MemoryStore {
                fn list(&self) -> Result<Vec<$record>, StoreError> {
                    Ok(self.read()?.$field.clone())
                }

                fn get(&self, id: &str) -> Result<Option<$record>, StoreError> {
                    Ok(find(&self.read()?.$field, id).cloned())
                }

                fn create(
                    &self,
                    draft: <$record as Record>::Draft,
                ) -> Result<$record, StoreError> {
                    let record: $record = self.stamp(draft);
                    self.write()?.$field.push(record.clone());
                    debug!(id = %record.id(), "created {}", <$record as Record>::LABEL);
                    Ok(record)
                }

                fn update(
                    &self,
                    id: &str,
                    patch: <$record as Record>::Patch,
                ) -> Result<Option<$record>, StoreError> {
                    let mut state = self.write()?;
                    Ok(state
                        .$field
                        .iter_mut()
                        .find(|row| row.id().as_str() == id)
                        .map(|row| {
                            row.apply_patch(patch);
                            row.clone()
                        }))
                }

                fn delete(&self, id: &str) -> Result<bool, StoreError> {
                    let mut state = self.write()?;
                    let rows = &mut state.$field;
                    match rows.iter().position(|row| row.id().as_str() == id) {
                        Some(index) => {
                            rows.remove(index);
                            Ok(true)
                        }
                        None => Ok(false),
                    }
                }
            }
        )+
    };
}

record_collection! {
    User => users,
    Advertiser => advertisers,
    Inventory => inventory,
    Deal => deals,
    Campaign => campaigns,
    Creative => creatives,
    Invoice => invoices,
}

impl UserDirectory for MemoryStore {
    fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .read()?
            .users
            .iter()
            .find(|user| user.email == email)
            .cloned())
    }

    fn insert_unique(&self, draft: UserDraft) -> Result<Option<User>, StoreError> {
        let mut state = self.write()?;
        if state.users.iter().any(|user| user.email == draft.email) {
            return Ok(None);
        }
        let user: User = self.stamp(draft);
        state.users.push(user.clone());
        Ok(Some(user))
    }
}

impl SnapshotSource for MemoryStore {
    fn analytics(&self) -> Result<AnalyticsSnapshot, StoreError> {
        Ok(self.read()?.analytics.clone())
    }

    fn publisher_dashboard(&self) -> Result<DashboardSnapshot, StoreError> {
        Ok(self.read()?.publisher_dashboard.clone())
    }
}

impl BillingLedger for MemoryStore {
    fn profile(&self) -> Result<BillingProfile, StoreError> {
        Ok(self.read()?.billing.clone())
    }

    fn set_balance(&self, balance: f64) -> Result<BillingProfile, StoreError> {
        let mut state = self.write()?;
        state.billing.current_balance = balance;
        Ok(state.billing.clone())
    }
}

impl AudienceSegments for MemoryStore {
    fn segments(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.read()?.audience_segments.clone())
    }

    fn add_segment(&self, name: &str) -> Result<String, StoreError> {
        let mut state = self.write()?;
        if !state.audience_segments.iter().any(|segment| segment == name) {
            state.audience_segments.push(name.to_owned());
        }
        Ok(name.to_owned())
    }
}
