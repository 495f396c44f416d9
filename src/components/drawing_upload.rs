//! Drawing upload area: drag-and-drop or browse, then a preview of the pick.

use leptos::prelude::*;
use tracing::error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::upload::{read_file, SelectedFile, ACCEPTED_EXTENSIONS};

/// What the preview shows about the selected file, minus the image itself.
///
/// Pages memo this on every workflow change, so it stays small; the data
/// URL is read once when the preview is built.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSummary {
    pub selection: u64,
    pub name: String,
    pub size_label: String,
    pub oversize: bool,
    pub unsupported: bool,
}

impl FileSummary {
    pub fn new(file: &SelectedFile, selection: u64) -> Self {
        Self {
            selection,
            name: file.name.clone(),
            size_label: file.size_label(),
            oversize: file.exceeds_soft_limit(),
            unsupported: !file.has_supported_extension(),
        }
    }
}

/// Drop zone with a hidden file input.
#[component]
pub fn DrawingDropZone(
    /// Called once the picked file has been read into memory
    on_file: Callback<SelectedFile>,
    /// Headline inside the zone
    #[prop(into)]
    prompt: String,
    /// DOM id of the hidden input; must be unique per page
    input_id: &'static str,
) -> impl IntoView {
    let (is_over, set_is_over) = signal(false);
    let (is_loading, set_is_loading) = signal(false);
    let (read_error, set_read_error) = signal::<Option<String>>(None);

    let load = move |file: web_sys::File| {
        set_is_loading.set(true);
        set_read_error.set(None);
        spawn_local(async move {
            match read_file(file).await {
                Ok(selected) => on_file.run(selected),
                Err(e) => {
                    error!("Failed to read file: {}", e);
                    set_read_error.set(Some(e));
                }
            }
            set_is_loading.set(false);
        });
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);

        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            load(file);
        }
    };

    let on_input_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            load(file);
        }
        // allow picking the same file again after a reset
        input.set_value("");
    };

    view! {
        <div
            class="drop-zone"
            class:drop-zone-active=move || is_over.get()
            class:drop-zone-loading=move || is_loading.get()
            on:dragover=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                set_is_over.set(true);
            }
            on:dragleave=move |_| set_is_over.set(false)
            on:drop=on_drop
        >
            <Show
                when=move || is_loading.get()
                fallback=move || view! {
                    <label for=input_id class="upload-label">
                        <div class="drop-icon">"📄"</div>
                        <p class="upload-text">{prompt.clone()}</p>
                        <p class="upload-hint">"PDF, PNG, JPG (max 20MB)"</p>
                        <input
                            type="file"
                            id=input_id
                            accept=ACCEPTED_EXTENSIONS
                            class="file-input"
                            on:change=on_input_change
                        />
                    </label>
                }
            >
                <div class="drop-zone-loading-content">
                    <div class="spinner"></div>
                    <p>"Dosya okunuyor..."</p>
                </div>
            </Show>
            {move || read_error.get().map(|e| view! {
                <p class="status-text status-error">{e}</p>
            })}
        </div>
    }
}

/// Preview of the selected drawing with name and size.
#[component]
pub fn FilePreview(
    summary: FileSummary,
    /// `data:` URL for images; PDFs get a placeholder
    preview: Option<String>,
) -> impl IntoView {
    view! {
        <div class="file-preview">
            {match preview {
                Some(src) => view! { <img src=src alt="Önizleme" class="preview-image" /> }.into_any(),
                None => view! { <div class="preview-placeholder">"📄 PDF"</div> }.into_any(),
            }}
            <div class="file-info">
                <p class="file-name">{summary.name}</p>
                <p class="file-size">{summary.size_label}</p>
                {summary.oversize.then(|| view! {
                    <p class="file-warning">"Dosya 20MB sınırını aşıyor; sunucu reddedebilir."</p>
                })}
                {summary.unsupported.then(|| view! {
                    <p class="file-warning">"Desteklenmeyen uzantı; yalnızca PDF, PNG, JPG kabul edilir."</p>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::Workflow;

    #[test]
    fn test_summary_unchanged_by_phase_transitions() {
        let mut wf: Workflow<u32> = Workflow::new();
        wf.select_file(SelectedFile::new("bracket.png", "image/png", vec![0; 2048]));
        let summarize = |wf: &Workflow<u32>| wf.file().map(|f| FileSummary::new(f, wf.selection()));

        let picked = summarize(&wf);
        let ticket = wf.submit().unwrap();
        assert_eq!(summarize(&wf), picked);
        wf.resolve(ticket, Err("Network Error".to_string()));
        assert_eq!(summarize(&wf), picked);

        let summary = picked.unwrap();
        assert_eq!(summary.name, "bracket.png");
        assert_eq!(summary.size_label, "0.00 MB");
        assert!(!summary.oversize);
        assert!(!summary.unsupported);
    }
}
