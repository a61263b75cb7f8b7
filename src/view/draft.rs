//! Form drafts
//!
//! Transient, client-only form state for records being edited or created.

use crate::error::DraftError;
use crate::model::{NewRecord, Record, RecordPatch};

/// In-progress inline edit of one record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditDraft {
    pub title: Option<String>,
    pub release_year: Option<i32>,
    pub imdb_id: Option<String>,
}

/// A single field change in the inline editor
#[derive(Debug, Clone, PartialEq)]
pub enum EditField {
    Title(String),
    /// `None` when the input does not hold a whole number
    ReleaseYear(Option<i32>),
    ImdbId(String),
}

impl EditField {
    /// Read a release year from raw input text
    pub fn release_year_input(text: &str) -> Self {
        EditField::ReleaseYear(text.trim().parse().ok())
    }
}

impl EditDraft {
    /// Seed a draft from the record's current values
    pub fn from_record(record: &Record) -> Self {
        Self {
            title: Some(record.title.clone()),
            release_year: Some(record.release_year),
            imdb_id: Some(record.imdb_id.clone()),
        }
    }

    pub fn apply(&mut self, change: EditField) {
        match change {
            EditField::Title(title) => self.title = Some(title),
            EditField::ReleaseYear(year) => self.release_year = year,
            EditField::ImdbId(imdb_id) => self.imdb_id = Some(imdb_id),
        }
    }

    pub fn to_patch(&self) -> RecordPatch {
        RecordPatch {
            title: self.title.clone(),
            release_year: self.release_year,
            imdb_id: self.imdb_id.clone(),
        }
    }
}

/// Fields of the create form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateField {
    Title,
    ReleaseYear,
    ImdbId,
    Images,
}

/// Create-form draft; every field is raw input text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateDraft {
    pub title: String,
    pub release_year: String,
    pub imdb_id: String,
    pub images: String,
}

impl CreateDraft {
    pub fn get(&self, field: CreateField) -> &str {
        match field {
            CreateField::Title => &self.title,
            CreateField::ReleaseYear => &self.release_year,
            CreateField::ImdbId => &self.imdb_id,
            CreateField::Images => &self.images,
        }
    }

    pub fn set(&mut self, field: CreateField, value: String) {
        match field {
            CreateField::Title => self.title = value,
            CreateField::ReleaseYear => self.release_year = value,
            CreateField::ImdbId => self.imdb_id = value,
            CreateField::Images => self.images = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == CreateDraft::default()
    }

    /// Build the create request body, coercing the release year to a number
    ///
    /// Blank release year text becomes `0`.
    pub fn to_new_record(&self) -> Result<NewRecord, DraftError> {
        Ok(NewRecord {
            title: self.title.clone(),
            release_year: coerce_release_year(&self.release_year)?,
            imdb_id: self.imdb_id.clone(),
            images: self.images.clone(),
        })
    }
}

fn coerce_release_year(text: &str) -> Result<i32, DraftError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse()
        .map_err(|_| DraftError::InvalidReleaseYear(text.to_string()))
}

/// Whether the create form is waiting on the API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
}

/// Create-record form: the draft plus its submission status
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateForm {
    pub draft: CreateDraft,
    status: FormStatus,
}

impl CreateForm {
    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn set(&mut self, field: CreateField, value: String) {
        self.draft.set(field, value);
    }

    /// Validate the draft and mark the form as submitting
    ///
    /// The form stays editable when the draft is rejected.
    pub fn begin_submit(&mut self) -> Result<NewRecord, DraftError> {
        let record = self.draft.to_new_record()?;
        self.status = FormStatus::Submitting;
        Ok(record)
    }

    /// Settle a submission; a successful create clears the draft, a failed
    /// one keeps it for another attempt
    pub fn finish_submit(&mut self, created: bool) {
        self.status = FormStatus::Editing;
        if created {
            self.draft = CreateDraft::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Metadata;

    fn record() -> Record {
        Record {
            id: 3,
            title: "Brazil".to_string(),
            release_year: 1985,
            imdb_id: "tt0088846".to_string(),
            images: String::new(),
            metadata: Metadata::Absent,
        }
    }

    #[test]
    fn test_edit_draft_seeded_from_record() {
        let draft = EditDraft::from_record(&record());
        assert_eq!(draft.title.as_deref(), Some("Brazil"));
        assert_eq!(draft.release_year, Some(1985));
        assert_eq!(draft.imdb_id.as_deref(), Some("tt0088846"));
    }

    #[test]
    fn test_edit_field_changes() {
        let mut draft = EditDraft::from_record(&record());
        draft.apply(EditField::Title("Brazil (Director's Cut)".to_string()));
        draft.apply(EditField::release_year_input("1986"));

        let patch = draft.to_patch();
        assert_eq!(patch.title.as_deref(), Some("Brazil (Director's Cut)"));
        assert_eq!(patch.release_year, Some(1986));
        assert_eq!(patch.imdb_id.as_deref(), Some("tt0088846"));
    }

    #[test]
    fn test_unparseable_year_drops_field() {
        let mut draft = EditDraft::from_record(&record());
        draft.apply(EditField::release_year_input("nineteen"));
        assert_eq!(draft.to_patch().release_year, None);
    }

    #[test]
    fn test_create_draft_coerces_year() {
        let mut draft = CreateDraft::default();
        draft.set(CreateField::Title, "T".to_string());
        draft.set(CreateField::ReleaseYear, " 1999 ".to_string());
        draft.set(CreateField::ImdbId, "tt1".to_string());
        draft.set(CreateField::Images, "http://x/y.jpg".to_string());

        let new = draft.to_new_record().unwrap();
        assert_eq!(new.release_year, 1999);
        assert_eq!(draft.get(CreateField::ReleaseYear), " 1999 ");
    }

    #[test]
    fn test_blank_year_coerces_to_zero() {
        let draft = CreateDraft {
            title: "Untitled".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.to_new_record().unwrap().release_year, 0);
    }

    #[test]
    fn test_bad_year_is_rejected() {
        let mut form = CreateForm::default();
        form.set(CreateField::ReleaseYear, "19x9".to_string());

        let err = form.begin_submit().unwrap_err();
        assert_eq!(err, DraftError::InvalidReleaseYear("19x9".to_string()));
        assert_eq!(form.status(), FormStatus::Editing);
        assert_eq!(form.draft.release_year, "19x9");
    }

    #[test]
    fn test_form_submit_lifecycle() {
        let mut form = CreateForm::default();
        form.set(CreateField::Title, "T".to_string());
        form.begin_submit().unwrap();
        assert!(form.is_submitting());

        form.finish_submit(false);
        assert!(!form.is_submitting());
        assert_eq!(form.draft.title, "T");

        form.begin_submit().unwrap();
        form.finish_submit(true);
        assert!(form.draft.is_empty());
    }
}
