//! Review drafts for a menu item, and the submit wiring around them.

use std::any::Any;
use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};
use dining_states::{State, Time, Updater};

use crate::dispatch::ActionInput;
use crate::gateway::{ActionKind, ActionPayload, MutationRequest};
use crate::route::Route;
use crate::rows::RowKey;

/// Datetime-local format used by the backend (`2025-05-17T21:05`).
pub const DATE_ITEM_SERVED_FORMAT: &str = "%Y-%m-%dT%H:%M";
pub const DEFAULT_ITEMS_STARS: u8 = 5;

/// What the review form emits on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    pub reviewer_comments: String,
    pub items_stars: u8,
    pub date_item_served: String,
}

impl ReviewDraft {
    pub fn new<Tz: TimeZone>(now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            reviewer_comments: String::new(),
            items_stars: DEFAULT_ITEMS_STARS,
            date_item_served: now.format(DATE_ITEM_SERVED_FORMAT).to_string(),
        }
    }

    /// Draft stamped with the frame time, in local time.
    pub fn at(time: &Time) -> Self {
        Self::new(&time.as_ref().with_timezone(&Local))
    }

    /// Query parameters for `POST /api/reviews/post`.
    pub fn query_pairs(&self, item_id: RowKey) -> Vec<(&'static str, String)> {
        vec![
            ("itemId", item_id.to_string()),
            ("reviewerComments", self.reviewer_comments.clone()),
            ("itemsStars", self.items_stars.to_string()),
            ("dateItemServed", self.date_item_served.clone()),
        ]
    }
}

impl Default for ReviewDraft {
    fn default() -> Self {
        Self::new(&Local::now())
    }
}

/// The form on the create-review page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewForm {
    pub item: Option<(RowKey, String)>,
    pub draft: ReviewDraft,
}

impl ReviewForm {
    /// Starts a fresh draft if the form is not already editing `item_id`.
    pub fn open(&mut self, item_id: RowKey, item_name: &str, time: &Time) {
        let same_item = self
            .item
            .as_ref()
            .is_some_and(|(id, name)| *id == item_id && name == item_name);

        if !same_item {
            self.item = Some((item_id, item_name.to_owned()));
            self.draft = ReviewDraft::at(time);
        }
    }

    pub fn close(&mut self) {
        self.item = None;
    }
}

impl State for ReviewForm {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Toast-like message shown above the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Latest notice, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notices {
    pub current: Option<Notice>,
}

impl Notices {
    pub fn info(&mut self, message: impl Into<String>) {
        self.current = Some(Notice {
            level: NoticeLevel::Info,
            message: message.into(),
        });
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.current = Some(Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        });
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

impl State for Notices {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Builds the action input for submitting `draft` about `item_name`.
///
/// Success posts an info notice and navigates to `/myreviews`; failure posts an
/// error notice and stays on the page.
pub fn submit_input(
    item_id: RowKey,
    item_name: &str,
    draft: ReviewDraft,
    updater: &Updater,
) -> ActionInput {
    let success_name = item_name.to_owned();
    let on_success = {
        let updater = updater.clone();
        move || {
            let message = format!("Review submitted for {success_name}");
            updater.update::<Notices>(move |notices| notices.info(message));
            updater.update::<ReviewForm>(ReviewForm::close);
            updater.set(Route::MyReviews);
        }
    };

    let on_failure = {
        let updater = updater.clone();
        move |message: &str| {
            let message = format!("Error submitting review: {message}");
            updater.update::<Notices>(move |notices| notices.error(message));
        }
    };

    ActionInput {
        request: Some(MutationRequest {
            kind: ActionKind::SubmitReview,
            key: item_id,
            payload: ActionPayload::Review(draft),
        }),
        on_success: Some(Arc::new(on_success)),
        on_failure: Some(Arc::new(on_failure)),
    }
}
