use crate::usecases::u501_upload_document::UploadDocumentView;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <UploadDocumentView />
        </ConfigProvider>
    }
}
