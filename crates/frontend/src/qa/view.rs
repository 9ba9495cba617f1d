//! Document Q&A - View Component

use super::model::{query_documents, upload_document};
use super::view_model::QaPageVm;
use crate::shared::notify;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
#[allow(non_snake_case)]
pub fn QaPage() -> impl IntoView {
    let vm = QaPageVm::new();
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    // The real file input stays hidden; the visible button forwards the click.
    let handle_pick_file = move |_| {
        if let Some(input) = file_input_ref.get() {
            input.click();
        }
    };

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        let file = input
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let Some(file) = file else {
            return;
        };

        vm.begin_upload(file.name());
        wasm_bindgen_futures::spawn_local(async move {
            let notice = vm.finish_upload(upload_document(file).await);
            notify::alert(&notice);
        });
    };

    let handle_ask = move |_| {
        let question = match vm.begin_query() {
            Ok(question) => question,
            Err(notice) => {
                notify::alert(&notice);
                return;
            }
        };
        wasm_bindgen_futures::spawn_local(async move {
            if let Some(notice) = vm.finish_query(query_documents(&question).await) {
                notify::alert(&notice);
            }
        });
    };

    view! {
        <div style="max-width: 720px; margin: 0 auto; padding: 24px;">
            <header style="margin-bottom: 20px; padding-bottom: 12px; border-bottom: 1px solid var(--colorNeutralStroke2);">
                <h1 style="font-size: 24px; font-weight: bold;">"Document Q&A"</h1>
            </header>

            <Flex vertical=true style="gap: 20px;">
                <section>
                    <input
                        type="file"
                        accept=".pdf"
                        node_ref=file_input_ref
                        on:change=handle_file_select
                        style="display: none;"
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_pick_file
                        disabled=Signal::derive(move || vm.uploading.get())
                    >
                        {move || if vm.uploading.get() { "Uploading..." } else { "Upload PDF" }}
                    </Button>
                    <Show when=move || vm.file_name.get().is_some()>
                        <p style="margin-top: 8px; color: var(--colorNeutralForeground3);">
                            {move || format!("Uploaded: {}", vm.file_name.get().unwrap_or_default())}
                        </p>
                    </Show>
                </section>

                <Flex align=FlexAlign::Center style="gap: 8px;">
                    <Input value=vm.question placeholder="Ask a question about the document" />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_ask
                        disabled=Signal::derive(move || {
                            vm.loading.get()
                                || vm.question.get().is_empty()
                                || !vm.vector_store_ready.get()
                        })
                    >
                        {move || if vm.loading.get() { "Thinking..." } else { "Ask" }}
                    </Button>
                </Flex>

                <Show when=move || !vm.answer.get().is_empty()>
                    <section>
                        <h2 style="font-size: 18px; font-weight: bold; margin-bottom: 8px;">
                            "Answer:"
                        </h2>
                        <p>{move || vm.answer.get()}</p>
                    </section>
                </Show>

                <Show when=move || !vm.context.get().is_empty()>
                    <section>
                        <h2 style="font-size: 18px; font-weight: bold; margin-bottom: 8px;">
                            "Related Excerpts:"
                        </h2>
                        {move || {
                            vm.context
                                .get()
                                .into_iter()
                                .map(|text| {
                                    view! {
                                        <div style="margin-bottom: 8px; padding: 8px 12px; border-left: 3px solid var(--colorNeutralStroke2);">
                                            <p>{text}</p>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </section>
                </Show>
            </Flex>
        </div>
    }
}
