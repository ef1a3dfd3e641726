//! Session-lifetime CV data store.
//!
//! # Responsibility
//! - Own the single `CvData` aggregate for one application session.
//! - Apply validated mutations and notify subscribers synchronously.
//!
//! # Invariants
//! - Mutations are total: they accept already-validated input and never
//!   reject or coerce it.
//! - Lists grow append-only and preserve insertion order.
//! - Deleting a missing entry is a silent no-op and emits no event.
//! - Subscribers observe each event before the mutating call returns.

use crate::model::cv::{CvData, EntryId, PersonalInfo};
use crate::validate::rules::{ValidEducation, ValidExperience, ValidPersonalInfo};
use log::debug;

/// Handle returned by [`CvStore::subscribe`], used to unsubscribe.
pub type SubscriptionId = u64;

/// Change notification emitted after every committed mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    PersonalInfoUpdated,
    ExperienceAdded(EntryId),
    ExperienceRemoved(EntryId),
    EducationAdded(EntryId),
    EducationRemoved(EntryId),
}

// Send so a session store can live behind a mutex at the FFI boundary.
type Listener = Box<dyn FnMut(&StoreEvent, &CvData) + Send>;

struct Subscriber {
    id: SubscriptionId,
    listener: Listener,
}

/// In-memory store owning the aggregate and its subscriber list.
///
/// One instance exists per session, passed explicitly to consumers rather
/// than looked up through ambient global state.
#[derive(Default)]
pub struct CvStore {
    data: CvData,
    subscribers: Vec<Subscriber>,
    next_subscription: SubscriptionId,
}

impl CvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the aggregate for rendering.
    pub fn data(&self) -> &CvData {
        &self.data
    }

    /// Registers a listener invoked synchronously after every mutation.
    ///
    /// Listeners run in subscription order and receive the event plus the
    /// post-mutation aggregate.
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.push(Subscriber { id, listener });
        id
    }

    /// Removes a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|subscriber| subscriber.id != id);
        self.subscribers.len() != before
    }

    /// Replaces the personal-information singleton wholesale.
    pub fn update_personal_info(&mut self, info: ValidPersonalInfo) {
        self.data.personal_info = info.into_inner();
        debug!("event=personal_info_updated module=store status=ok");
        self.notify(StoreEvent::PersonalInfoUpdated);
    }

    /// Resets the personal-information singleton to empty defaults.
    pub fn reset_personal_info(&mut self) {
        self.data.personal_info = PersonalInfo::default();
        debug!("event=personal_info_reset module=store status=ok");
        self.notify(StoreEvent::PersonalInfoUpdated);
    }

    /// Appends one validated experience entry. Returns its stable ID.
    pub fn add_experience(&mut self, entry: ValidExperience) -> EntryId {
        let entry = entry.into_inner();
        let id = entry.id;
        self.data.experiences.push(entry);
        debug!(
            "event=experience_added module=store status=ok id={id} total={}",
            self.data.experiences.len()
        );
        self.notify(StoreEvent::ExperienceAdded(id));
        id
    }

    /// Removes the experience entry with the given ID.
    ///
    /// Returns whether an entry was removed. A missing ID is a harmless
    /// no-op so a double-pressed delete action stays side-effect free.
    pub fn delete_experience(&mut self, id: EntryId) -> bool {
        let before = self.data.experiences.len();
        self.data.experiences.retain(|entry| entry.id != id);
        let removed = self.data.experiences.len() != before;
        if removed {
            debug!(
                "event=experience_removed module=store status=ok id={id} total={}",
                self.data.experiences.len()
            );
            self.notify(StoreEvent::ExperienceRemoved(id));
        }
        removed
    }

    /// Appends one validated education entry. Returns its stable ID.
    pub fn add_education(&mut self, entry: ValidEducation) -> EntryId {
        let entry = entry.into_inner();
        let id = entry.id;
        self.data.education.push(entry);
        debug!(
            "event=education_added module=store status=ok id={id} total={}",
            self.data.education.len()
        );
        self.notify(StoreEvent::EducationAdded(id));
        id
    }

    /// Removes the education entry with the given ID. Same no-op contract
    /// as [`CvStore::delete_experience`].
    pub fn delete_education(&mut self, id: EntryId) -> bool {
        let before = self.data.education.len();
        self.data.education.retain(|entry| entry.id != id);
        let removed = self.data.education.len() != before;
        if removed {
            debug!(
                "event=education_removed module=store status=ok id={id} total={}",
                self.data.education.len()
            );
            self.notify(StoreEvent::EducationRemoved(id));
        }
        removed
    }

    fn notify(&mut self, event: StoreEvent) {
        let data = &self.data;
        for subscriber in &mut self.subscribers {
            (subscriber.listener)(&event, data);
        }
    }
}
