//! The edit form: field state plus command construction.

use thiserror::Error;
use tracing::debug;

use gallery_model::{Item, ItemId};
use gallery_store::{CollectionState, Command};

use crate::{
    FieldInput, Issue, id_matches, is_not_empty, is_valid_url, title_taken, url_taken,
};

/// The form refused to produce a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("edit rejected: {}", describe(.issues))]
pub struct ValidationError {
    pub issues: Vec<Issue>,
}

fn describe(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(Issue::message)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Edit form for the selected item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    pub id: FieldInput,
    pub title: FieldInput,
    pub url: FieldInput,
    /// Image reference picked by the user, if any.
    pub selected_file: Option<String>,
}

impl EditForm {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id.set_value(id);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title.set_value(title);
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url.set_value(url);
        self
    }

    #[must_use]
    pub fn with_selected_file(mut self, image_url: Option<String>) -> Self {
        self.selected_file = image_url;
        self
    }

    /// All issues with the current values, touched or not.
    pub fn validate(&self, state: &CollectionState) -> Vec<Issue> {
        let Some(selected) = state.selected_id else {
            return vec![Issue::NothingSelected];
        };
        let mut issues = Vec::new();
        if !id_matches(self.id.value(), selected) {
            issues.push(Issue::IdMismatch { selected });
        }

        let title = self.title.value();
        if !is_not_empty(title) {
            issues.push(Issue::TitleEmpty);
        } else if title_taken(&state.items, title, Some(selected)) {
            issues.push(Issue::DuplicateTitle);
        }

        let url = self.url.value();
        if !is_valid_url(url) {
            issues.push(Issue::InvalidUrl);
        } else if url_taken(&state.items, url, Some(selected)) {
            issues.push(Issue::DuplicateUrl);
        }
        issues
    }

    /// Issues for fields the user has already left.
    pub fn visible_issues(&self, state: &CollectionState) -> Vec<Issue> {
        self.validate(state)
            .into_iter()
            .filter(|issue| match issue.field() {
                crate::Field::Id => self.id.is_touched(),
                crate::Field::Title => self.title.is_touched(),
                crate::Field::Url => self.url.is_touched(),
            })
            .collect()
    }

    /// Build a `Change` command and clear the form.
    pub fn submit(&mut self, state: &CollectionState) -> Result<Command, ValidationError> {
        let issues = self.validate(state);
        if !issues.is_empty() {
            debug!(issue_count = issues.len(), "edit form rejected");
            return Err(ValidationError { issues });
        }
        let command = Command::Change {
            title: self.title.value().to_string(),
            url: self.url.value().to_string(),
            image_url: self.selected_file.take(),
        };
        self.id.reset();
        self.title.reset();
        self.url.reset();
        Ok(command)
    }

    /// Remember a picked image and build the `Add` command for the selected item.
    pub fn attach_image(
        &mut self,
        state: &CollectionState,
        image_url: impl Into<String>,
    ) -> Result<Command, ValidationError> {
        let item_id = selected_item(state)?.id;
        let image_url = image_url.into();
        self.selected_file = Some(image_url.clone());
        Ok(Command::Add { item_id, image_url })
    }

    /// Build a `Remove` command, or `None` when there is nothing to revert.
    pub fn revert_image(&self, state: &CollectionState) -> Result<Option<Command>, ValidationError> {
        let item = selected_item(state)?;
        if !item.has_fallback() {
            return Ok(None);
        }
        Ok(Some(Command::Remove { item_id: item.id }))
    }
}

fn selected_item(state: &CollectionState) -> Result<&Item, ValidationError> {
    let id: ItemId = state.selected_id.ok_or_else(|| ValidationError {
        issues: vec![Issue::NothingSelected],
    })?;
    state.get(id).ok_or_else(|| ValidationError {
        issues: vec![Issue::UnknownItem { id }],
    })
}
