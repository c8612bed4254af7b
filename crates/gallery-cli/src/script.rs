//! Edit scripts: a JSON array of steps replayed against the store.
//!
//! Edits go through the same [`EditForm`] a user would fill in, so steps the
//! form would block never reach the store.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

use gallery_model::{Item, ItemId, ModelError, ensure_unique_ids};
use gallery_store::{CollectionStore, Command, Outcome};
use gallery_validate::{EditForm, Issue, ValidationError};

/// One user action in an edit script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    /// Replace the collection.
    Set { items: Vec<Item> },
    /// Open the edit form for `id`.
    Select { id: ItemId },
    /// Submit the form. `id` defaults to the selected id.
    Change {
        #[serde(default)]
        id: Option<String>,
        title: String,
        url: String,
    },
    /// Pick an image for the selected item.
    Add { image_url: String },
    /// Revert the selected item's image.
    Remove,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Set { .. } => "set",
            Self::Select { .. } => "select",
            Self::Change { .. } => "change",
            Self::Add { .. } => "add",
            Self::Remove => "remove",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResult {
    Dispatched(Outcome),
    /// Nothing to revert; the form sends no command.
    Skipped,
    Rejected(ValidationError),
    /// The replacement collection breaks the one-item-per-id rule.
    InvalidItems(ModelError),
}

impl StepResult {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_) | Self::InvalidItems(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: &'static str,
    pub result: StepResult,
}

pub fn read_script(path: &Path) -> Result<Vec<Step>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read script {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parse script {}", path.display()))
}

/// Replay `steps` in order. Rejected steps are reported and skipped.
pub fn replay(store: &mut CollectionStore, steps: Vec<Step>) -> Vec<StepReport> {
    let span = info_span!("replay", steps = steps.len());
    let _guard = span.enter();

    let mut form = EditForm::new();
    let mut reports = Vec::with_capacity(steps.len());
    for step in steps {
        let name = step.name();
        let result = apply_step(store, &mut form, step);
        debug!(step = name, ?result, "step replayed");
        reports.push(StepReport { step: name, result });
    }
    let rejected = reports.iter().filter(|r| r.result.is_rejected()).count();
    info!(total = reports.len(), rejected, "replay complete");
    reports
}

fn apply_step(store: &mut CollectionStore, form: &mut EditForm, step: Step) -> StepResult {
    let command = match step {
        Step::Set { items } => {
            if let Err(error) = ensure_unique_ids(&items) {
                return StepResult::InvalidItems(error);
            }
            Command::Set { items }
        }
        Step::Select { id } => {
            *form = EditForm::new();
            Command::Select { id }
        }
        Step::Change { id, title, url } => {
            let id = id
                .or_else(|| store.selected_id().map(|id| id.to_string()))
                .unwrap_or_default();
            form.id.set_value(id);
            form.title.set_value(title);
            form.url.set_value(url);
            match form.submit(&store.snapshot()) {
                Ok(command) => command,
                Err(error) => return StepResult::Rejected(error),
            }
        }
        Step::Add { image_url } => match form.attach_image(&store.snapshot(), image_url) {
            Ok(command) => command,
            Err(error) => return StepResult::Rejected(error),
        },
        Step::Remove => match form.revert_image(&store.snapshot()) {
            Ok(Some(command)) => command,
            Ok(None) => return StepResult::Skipped,
            Err(error) => return StepResult::Rejected(error),
        },
    };
    StepResult::Dispatched(store.dispatch(command))
}

/// One line per step: `N. name: result`.
pub fn format_reports(reports: &[StepReport]) -> String {
    reports
        .iter()
        .enumerate()
        .map(|(index, report)| {
            let result = match &report.result {
                StepResult::Dispatched(Outcome::Applied) => "applied".to_string(),
                StepResult::Dispatched(Outcome::Unchanged) => "unchanged".to_string(),
                StepResult::Dispatched(Outcome::TargetMissing { id: Some(id) }) => {
                    format!("no item {id}")
                }
                StepResult::Dispatched(Outcome::TargetMissing { id: None }) => {
                    "no item selected".to_string()
                }
                StepResult::Skipped => "skipped (nothing to revert)".to_string(),
                StepResult::InvalidItems(error) => format!("rejected ({error})"),
                StepResult::Rejected(error) => format!(
                    "rejected ({})",
                    error
                        .issues
                        .iter()
                        .map(Issue::message)
                        .collect::<Vec<_>>()
                        .join("; ")
                ),
            };
            format!("{}. {}: {}", index + 1, report.step, result)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
