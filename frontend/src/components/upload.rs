//! PDF upload component with drag & drop support.
//!
//! Handles file selection, upload to the parsing endpoint, and switching
//! the page to the menu once it arrives.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement};
use crate::config::{ids, UPLOAD_URL};
use crate::services::{is_pdf_mime, notify_error, report_upload, upload_pdf, BrowserAlert};
use crate::types::{Menu, UploadPhase};

const DEFAULT_HEADING: &str = "Drop your PDF menu here";

#[component]
pub fn UploadSection(
    #[prop(into)] visible: Signal<bool>,
    set_phase: WriteSignal<UploadPhase>,
    set_menu: WriteSignal<Option<Menu>>,
) -> impl IntoView {
    let (selected, set_selected) = create_signal(None::<File>);
    let (dragging, set_dragging) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    let heading = move || {
        selected
            .with(|file| file.as_ref().map(File::name))
            .unwrap_or_else(|| DEFAULT_HEADING.to_string())
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        // A cancelled dialog clears the input, so the selection goes too.
        let file = input.files().and_then(|files| files.get(0));
        match &file {
            Some(file) => log::info!("📄 Selected {}", file.name()),
            None => log::debug!("File selection cleared"),
        }
        set_selected.set(file);
    };

    let on_drag_over = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_dragging.set(true);
    };

    let on_drag_leave = move |_| set_dragging.set(false);

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);

        let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
            return;
        };
        let Some(file) = files.get(0) else {
            return;
        };

        if !is_pdf_mime(&file.type_()) {
            log::warn!("Ignoring dropped file {} ({})", file.name(), file.type_());
            return;
        }

        // Keep the input in sync so the browser shows the dropped file too.
        if let Some(input) = file_input.get_untracked() {
            input.set_files(Some(&files));
        }
        log::info!("📄 Dropped {}", file.name());
        set_selected.set(Some(file));
    };

    let on_upload = move |_| {
        let started = set_phase.try_update(|phase| phase.try_start(selected.get_untracked()));
        let file = match started {
            Some(Ok(file)) => file,
            Some(Err(e)) => {
                notify_error(&BrowserAlert, &e);
                return;
            }
            None => return,
        };

        spawn_local(async move {
            let result = upload_pdf(&file, UPLOAD_URL).await;
            if let Err(e) = &result {
                log::error!("❌ Upload failed: {}", e);
            }

            let Some(result) = set_phase.try_update(|phase| phase.settle(result)) else {
                return;
            };
            if let Some(menu) = report_upload(result, &BrowserAlert) {
                set_menu.set(Some(menu));
            }
        });
    };

    view! {
        <div
            class="upload-section"
            id=ids::UPLOAD_SECTION
            style:display=move || if visible.get() { "block" } else { "none" }
        >
            <div
                class="upload-area"
                class:dragging=move || dragging.get()
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <div class="upload-icon">"📄"</div>
                <h4>{heading}</h4>
                <div class="upload-hint">"or choose a file below (PDF, up to 16 MB)"</div>

                <input
                    type="file"
                    id=ids::PDF_FILE
                    accept=".pdf"
                    node_ref=file_input
                    on:change=on_file_change
                />
            </div>

            <button class="upload-button" on:click=on_upload>
                "Upload & Parse Menu"
            </button>
        </div>
    }
}
