//! Upload form state and its transitions.
//!
//! Every change goes through [`update`], which returns the effects the view
//! model has to run (at the moment only starting the request).

use contracts::usecases::u501_upload_document::{
    success_message, UploadResponse, MSG_NO_TEXT_EXTRACTED, MSG_SELECT_FILE_FIRST,
    MSG_UPLOAD_FAILED,
};

pub const LABEL_SUBMIT: &str = "Upload & Extract Text";
pub const LABEL_PROCESSING: &str = "Processing...";

/// Metadata of the file chosen in the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

/// Why an upload did not produce a result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadFailure {
    /// HTTP status, None when the request never got a response
    pub status: Option<u16>,
    /// `detail` from the error body, if the server sent one
    pub detail: Option<String>,
}

impl UploadFailure {
    pub fn network() -> Self {
        Self::default()
    }

    /// Text for the banner: the server's explanation or the generic fallback
    pub fn message(&self) -> &str {
        self.detail
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(MSG_UPLOAD_FAILED)
    }
}

pub type UploadOutcome = Result<UploadResponse, UploadFailure>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a file
    FileSelected(SelectedFile),
    /// User pressed the submit button
    SubmitClicked,
    /// The request for `selection` came back
    UploadResolved {
        selection: u64,
        outcome: UploadOutcome,
    },
    /// The request task ended, whatever the outcome
    RequestFinished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Upload the file of the given selection
    StartUpload { selection: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerTone {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner<'a> {
    pub text: &'a str,
    pub tone: BannerTone,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadState {
    selected_file: Option<SelectedFile>,
    status_message: String,
    is_upload_successful: bool,
    is_loading: bool,
    extracted_text_preview: String,
    /// Bumped on every selection; results for an older selection are dropped
    selection: u64,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn is_upload_successful(&self) -> bool {
        self.is_upload_successful
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn extracted_text_preview(&self) -> &str {
        &self.extracted_text_preview
    }

    pub fn selection(&self) -> u64 {
        self.selection
    }

    pub fn submit_disabled(&self) -> bool {
        self.is_loading || self.selected_file.is_none()
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_loading {
            LABEL_PROCESSING
        } else {
            LABEL_SUBMIT
        }
    }

    pub fn banner(&self) -> Option<Banner<'_>> {
        if self.status_message.is_empty() {
            return None;
        }
        Some(Banner {
            text: &self.status_message,
            tone: if self.is_upload_successful {
                BannerTone::Success
            } else {
                BannerTone::Failure
            },
        })
    }

    pub fn preview(&self) -> Option<&str> {
        Some(self.extracted_text_preview.as_str()).filter(|p| !p.is_empty())
    }

    fn clear_result(&mut self) {
        self.status_message.clear();
        self.is_upload_successful = false;
        self.extracted_text_preview.clear();
    }

    fn apply_outcome(&mut self, outcome: UploadOutcome) {
        match outcome {
            Ok(resp) => {
                self.status_message = success_message(&resp.filename);
                self.is_upload_successful = true;
                self.extracted_text_preview = resp
                    .extracted_text_preview
                    .filter(|p| !p.is_empty())
                    .unwrap_or_else(|| MSG_NO_TEXT_EXTRACTED.to_string());
            }
            Err(failure) => {
                self.status_message = failure.message().to_string();
                self.is_upload_successful = false;
                self.extracted_text_preview.clear();
            }
        }
    }
}

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: UploadState, msg: Msg) -> (UploadState, Vec<Effect>) {
    let effects = match msg {
        Msg::FileSelected(file) => {
            state.selection += 1;
            state.selected_file = Some(file);
            state.clear_result();
            Vec::new()
        }
        Msg::SubmitClicked => {
            if state.is_loading {
                // only one request at a time
                Vec::new()
            } else if state.selected_file.is_none() {
                state.status_message = MSG_SELECT_FILE_FIRST.to_string();
                state.is_upload_successful = false;
                Vec::new()
            } else {
                state.is_loading = true;
                state.clear_result();
                vec![Effect::StartUpload {
                    selection: state.selection,
                }]
            }
        }
        Msg::UploadResolved { selection, outcome } => {
            if selection == state.selection {
                state.apply_outcome(outcome);
            }
            Vec::new()
        }
        Msg::RequestFinished => {
            state.is_loading = false;
            Vec::new()
        }
    };

    (state, effects)
}
