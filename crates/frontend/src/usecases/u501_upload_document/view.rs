//! Upload Document - View Component

use super::state::{BannerTone, UploadState};
use super::view_model::UploadDocumentVm;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_upload_document::{UploadDocument, ACCEPT_FILTER};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

fn banner_intent(tone: BannerTone) -> MessageBarIntent {
    match tone {
        BannerTone::Success => MessageBarIntent::Success,
        BannerTone::Failure => MessageBarIntent::Error,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn UploadDocumentView() -> impl IntoView {
    let vm = UploadDocumentVm::new();

    // Обработка выбора файла; отмена диалога оставляет прежний выбор
    let handle_file_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        if let Some(file) = file {
            vm.select_file(file);
        }
    };

    let is_loading = Signal::derive(move || vm.state.with(UploadState::is_loading));
    let submit_disabled = Signal::derive(move || vm.state.with(UploadState::submit_disabled));

    view! {
        <div id="u501_upload_document--usecase" class="upload-page">
            <div class="upload-card">
                <h1 class="upload-card__title">{UploadDocument::display_name()}</h1>
                <p class="upload-card__subtitle">{UploadDocument::description()}</p>

                <div class="upload-card__picker">
                    <label class="upload-card__label" for="u501-file-input">
                        "Choose file"
                    </label>
                    <input
                        id="u501-file-input"
                        class="upload-card__input"
                        type="file"
                        accept=ACCEPT_FILTER
                        on:change=handle_file_change
                    />
                    {move || {
                        vm.state
                            .with(|s| s.selected_file().map(|f| f.name.clone()))
                            .map(|name| {
                                view! {
                                    <p class="upload-card__selected">
                                        "Selected: "
                                        <span class="upload-card__filename">{name}</span>
                                    </p>
                                }
                            })
                    }}
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=submit_disabled
                    on_click=move |_| vm.submit()
                    attr:style="width: 100%;"
                >
                    {move || {
                        let label = vm.state.with(UploadState::button_label);
                        if is_loading.get() {
                            view! {
                                <span class="upload-card__busy">
                                    <Spinner size=SpinnerSize::Tiny />
                                    {label}
                                </span>
                            }
                                .into_any()
                        } else {
                            view! { <span>{label}</span> }.into_any()
                        }
                    }}
                </Button>

                // Status banner
                {move || {
                    vm.state
                        .with(|s| s.banner().map(|b| (b.text.to_string(), b.tone)))
                        .map(|(text, tone)| {
                            view! {
                                <div class="upload-banner">
                                    <MessageBar intent=banner_intent(tone)>{text}</MessageBar>
                                </div>
                            }
                        })
                }}

                // Extracted text preview
                {move || {
                    vm.state
                        .with(|s| s.preview().map(str::to_string))
                        .map(|text| {
                            view! {
                                <div class="upload-preview">
                                    <h2 class="upload-preview__title">"Extracted Text Preview:"</h2>
                                    <div class="upload-preview__body">{text}</div>
                                    <p class="upload-preview__caption">
                                        "(Showing first part - full extraction available in backend)"
                                    </p>
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}
