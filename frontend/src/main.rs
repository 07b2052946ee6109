use gloo_events::EventListener;
use gloo_file::File as GlooFile;
use gloo_storage::{LocalStorage, Storage};
use shared::DiagnoseResponse;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

mod components;
mod report;

use components::{handlers, header, preview_area, results, theme_toggle, upload_section};
use report::DiagnosisReport;

// Yew msg components
pub enum Msg {
    // Image operations
    ImageSelected(GlooFile),
    PreviewReady(String),
    RemoveImage,
    NewAnalysis,

    // Diagnosis operations
    Diagnose,
    DiagnosisFinished {
        city: String,
        crop: String,
        outcome: Result<DiagnoseResponse, String>,
    },

    // UI states
    SetDragging(bool),
    ToggleTheme,

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

// Main component
pub struct Model {
    pub selected_image: Option<GlooFile>,
    pub preview_url: Option<String>,
    pub report: Option<DiagnosisReport>,
    pub submitting: bool,
    pub is_dragging: bool,
    pub theme: String,
    pub paste_listener: Option<EventListener>,
    pub image_input_ref: NodeRef,
    pub city_input_ref: NodeRef,
    pub crop_input_ref: NodeRef,
    // Never attached to a rendered element; focus requests on it do nothing.
    pub crop_select_ref: NodeRef,
}

// Yew component implementation
impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let theme: String = LocalStorage::get("theme").unwrap_or_else(|_| "light".to_string());
        if theme == "dark" {
            let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
            body.class_list().add_1("dark-mode").unwrap();
        }

        let link = ctx.link().clone();
        let window = web_sys::window().expect("no global `window` exists");
        let paste_listener = EventListener::new(&window, "paste", move |event| {
            if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                link.send_message(Msg::HandlePaste(clipboard_event.clone()));
            }
        });

        Self {
            selected_image: None,
            preview_url: None,
            report: None,
            submitting: false,
            is_dragging: false,
            theme,
            paste_listener: Some(paste_listener),
            image_input_ref: NodeRef::default(),
            city_input_ref: NodeRef::default(),
            crop_input_ref: NodeRef::default(),
            crop_select_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Image operations
            Msg::ImageSelected(file) => handlers::handle_image_selected(self, ctx, file),
            Msg::PreviewReady(url) => handlers::handle_preview_ready(self, url),
            Msg::RemoveImage => handlers::handle_remove_image(self),
            Msg::NewAnalysis => handlers::handle_new_analysis(self),

            // Diagnosis operations
            Msg::Diagnose => handlers::handle_diagnose(self, ctx),
            Msg::DiagnosisFinished { city, crop, outcome } => {
                handlers::handle_diagnosis_finished(self, city, crop, outcome)
            }

            // UI states
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::ToggleTheme => handlers::handle_toggle_theme(self),

            // Input events
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { header::render_header() }
                { theme_toggle::render_theme_toggle(&self.theme, ctx.link()) }

                <main class="main-content">
                    { upload_section::render_upload_section(self, ctx) }
                    { preview_area::render_preview_area(self, ctx) }
                    { results::render_results(self, ctx) }
                </main>

                <footer class="app-footer">
                    <p>{"Crop Health Diagnosis | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
