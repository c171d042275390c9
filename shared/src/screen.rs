//! # List screens
//!
//! State and workflows behind the Budget and Income screens. `ListScreen`
//! only changes through `ScreenAction`s so the same reducer backs the Yew
//! hook and the tests here. The async workflows talk to the API, emit actions
//! through a dispatch function, and hand any error back to the caller to log.

use crate::client::ApiClient;
use crate::draft::{DraftError, FormDraft};
use crate::resource::Resource;
use crate::transport::{ApiError, Transport};

/// How long the "fill in all the fields" alert stays up
pub const ALERT_TIMEOUT_MS: u32 = 3_000;

/// One-shot alert visibility. Every raise starts a new generation; expiring
/// an older generation is a no-op, which is what lets a fresh validation
/// failure restart the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlertFlag {
    visible: bool,
    generation: u64,
}

impl AlertFlag {
    pub fn raise(&mut self) -> u64 {
        self.visible = true;
        self.generation += 1;
        self.generation
    }

    /// Returns true if this call hid the alert
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.visible && generation == self.generation {
            self.visible = false;
            true
        } else {
            false
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction<E> {
    /// Authoritative list from the server
    Loaded(Vec<E>),
    /// Local insert at the top of the list
    Prepend(E),
    SetField(&'static str, String),
    ResetDraft,
    RaiseAlert,
    ExpireAlert(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListScreen<E> {
    pub entries: Vec<E>,
    pub draft: FormDraft,
    pub alert: AlertFlag,
}

impl<E: Clone> ListScreen<E> {
    pub fn new(draft: FormDraft) -> Self {
        Self {
            entries: Vec::new(),
            draft,
            alert: AlertFlag::default(),
        }
    }

    pub fn for_resource<R: Resource<Entry = E>>() -> Self {
        Self::new(R::empty_draft())
    }

    pub fn apply(&mut self, action: ScreenAction<E>) {
        match action {
            ScreenAction::Loaded(entries) => self.entries = entries,
            ScreenAction::Prepend(entry) => self.entries.insert(0, entry),
            ScreenAction::SetField(name, value) => {
                self.draft.set(name, value);
            }
            ScreenAction::ResetDraft => self.draft.reset(),
            ScreenAction::RaiseAlert => {
                self.alert.raise();
            }
            ScreenAction::ExpireAlert(generation) => {
                self.alert.expire(generation);
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    #[error("please fill in all the fields: {0}")]
    Invalid(#[from] DraftError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// What the list looks like after a successful create
#[derive(Debug)]
pub enum Refresh {
    /// Re-fetched from the server; holds the new row count
    Synced(usize),
    /// Re-fetch failed, so the draft was inserted locally instead
    Optimistic(ApiError),
}

pub type Dispatch<'a, E> = &'a dyn Fn(ScreenAction<E>);

/// Replace the list with the server's. On error the list is left alone.
pub async fn load<R: Resource, T: Transport>(
    api: &ApiClient<T>,
    dispatch: Dispatch<'_, R::Entry>,
) -> Result<usize, ApiError> {
    let entries = api.list::<R>().await?;
    let count = entries.len();
    dispatch(ScreenAction::Loaded(entries));
    Ok(count)
}

/// Validate and create. A blank required field raises the alert and sends
/// nothing. On success the draft is cleared and the list re-fetched.
pub async fn submit<R: Resource, T: Transport>(
    api: &ApiClient<T>,
    draft: &FormDraft,
    dispatch: Dispatch<'_, R::Entry>,
) -> Result<Refresh, ScreenError> {
    if let Err(error) = draft.validate() {
        dispatch(ScreenAction::RaiseAlert);
        return Err(error.into());
    }

    api.create::<R>(draft).await?;
    dispatch(ScreenAction::ResetDraft);

    match load::<R, T>(api, dispatch).await {
        Ok(count) => Ok(Refresh::Synced(count)),
        Err(error) => {
            dispatch(ScreenAction::Prepend(R::entry_from_draft(draft)));
            Ok(Refresh::Optimistic(error))
        }
    }
}

/// PUT the current draft over record `id`, then re-fetch.
///
/// The draft is whatever is typed in the form; it is not filled from the
/// selected row and is not validated.
pub async fn update<R: Resource, T: Transport>(
    api: &ApiClient<T>,
    id: &str,
    draft: &FormDraft,
    dispatch: Dispatch<'_, R::Entry>,
) -> Result<usize, ScreenError> {
    api.update::<R>(id, draft).await?;
    dispatch(ScreenAction::ResetDraft);
    Ok(load::<R, T>(api, dispatch).await?)
}

pub async fn remove<R: Resource, T: Transport>(
    api: &ApiClient<T>,
    id: &str,
    dispatch: Dispatch<'_, R::Entry>,
) -> Result<usize, ScreenError> {
    api.delete::<R>(id).await?;
    Ok(load::<R, T>(api, dispatch).await?)
}
