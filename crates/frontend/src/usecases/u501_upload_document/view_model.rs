//! Upload Document - View Model

use super::api::upload_document;
use super::state::{update, Effect, Msg, SelectedFile, UploadState};
use crate::shared::on_drop::OnDrop;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct UploadDocumentVm {
    pub state: RwSignal<UploadState>,
    /// Browser handle of the selected file; not Send, so kept in local storage
    file: StoredValue<Option<web_sys::File>, LocalStorage>,
}

impl UploadDocumentVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(UploadState::new()),
            file: StoredValue::new_local(None),
        }
    }

    /// Handle a file coming from the picker
    pub fn select_file(&self, file: web_sys::File) {
        let meta = SelectedFile {
            name: file.name(),
            size: file.size() as u64,
        };
        log::debug!("Selected {} ({} bytes)", meta.name, meta.size);
        self.file.set_value(Some(file));
        self.dispatch(Msg::FileSelected(meta));
    }

    pub fn submit(&self) {
        self.dispatch(Msg::SubmitClicked);
    }

    /// Apply a message to the state and run the effects it produced
    pub fn dispatch(&self, msg: Msg) {
        let mut effects = Vec::new();
        self.state.update(|state| {
            let (next, fx) = update(std::mem::take(state), msg);
            *state = next;
            effects = fx;
        });

        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        match effect {
            Effect::StartUpload { selection } => {
                let vm = *self;
                let Some(file) = self.file.get_value() else {
                    log::error!("Upload requested but no file handle is stored");
                    vm.dispatch(Msg::RequestFinished);
                    return;
                };

                spawn_local(async move {
                    // is_loading is released on every exit from this task
                    let _release = OnDrop::new(move || vm.dispatch(Msg::RequestFinished));

                    let outcome = upload_document(file).await;
                    vm.dispatch(Msg::UploadResolved { selection, outcome });
                });
            }
        }
    }
}

impl Default for UploadDocumentVm {
    fn default() -> Self {
        Self::new()
    }
}
