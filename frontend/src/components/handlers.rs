use super::utils::{alert, first_image_file, focus, input_value};
use crate::report::DiagnosisReport;
use crate::{Model, Msg};
use gloo_file::futures::read_as_data_url;
use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use gloo_storage::{LocalStorage, Storage};
use shared::DiagnoseResponse;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn handle_image_selected(model: &mut Model, ctx: &Context<Model>, file: GlooFile) -> bool {
    model.selected_image = Some(file.clone());

    // One-shot read; never cancelled, completion arrives as a message.
    let link = ctx.link().clone();
    spawn_local(async move {
        match read_as_data_url(&file).await {
            Ok(url) => link.send_message(Msg::PreviewReady(url)),
            Err(e) => log::error!("Failed to read image for preview: {:?}", e),
        }
    });

    true
}

pub fn handle_preview_ready(model: &mut Model, url: String) -> bool {
    model.preview_url = Some(url);
    true
}

pub fn handle_remove_image(model: &mut Model) -> bool {
    model.selected_image = None;
    model.preview_url = None;
    if let Some(input) = model.image_input_ref.cast::<HtmlInputElement>() {
        input.set_value("");
    }
    true
}

pub fn handle_new_analysis(model: &mut Model) -> bool {
    handle_remove_image(model);
    for input_ref in [&model.city_input_ref, &model.crop_input_ref] {
        if let Some(input) = input_ref.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }
    model.report = None;
    true
}

pub fn handle_diagnose(model: &mut Model, ctx: &Context<Model>) -> bool {
    let Some(file) = model.selected_image.clone() else {
        alert("Please upload a leaf image");
        return false;
    };

    let city = input_value(&model.city_input_ref);
    if city.is_empty() {
        alert("Please enter your location");
        focus(&model.city_input_ref);
        return false;
    }

    let crop = input_value(&model.crop_input_ref);
    if crop.is_empty() {
        alert("Please select a crop");
        focus(&model.crop_select_ref);
        return false;
    }

    model.submitting = true;
    send_diagnose_request(ctx, file, city, crop);
    true
}

pub fn send_diagnose_request(ctx: &Context<Model>, file: GlooFile, city: String, crop: String) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let outcome = diagnose_request(&file, &city, &crop).await;
            if let Err(err) = &outcome {
                gloo_console::error!(format!("Diagnosis request failed: {}", err));
            }
            link.send_message(Msg::DiagnosisFinished { city, crop, outcome });
        }
    });
}

async fn diagnose_request(
    file: &GlooFile,
    city: &str,
    crop: &str,
) -> Result<DiagnoseResponse, String> {
    let form_data = web_sys::FormData::new().unwrap();
    form_data.append_with_blob("image", file.as_ref()).unwrap();
    form_data.append_with_str("city", city).unwrap();
    form_data.append_with_str("crop", crop).unwrap();

    let request = Request::post("/api/diagnose")
        .body(form_data)
        .expect("Failed to build request.");

    match request.send().await {
        Ok(response) if response.ok() => response
            .json::<DiagnoseResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e)),
        Ok(response) => {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(format!("Server error: {} - {}", status, body))
        }
        Err(e) => Err(format!("Network error: {}", e)),
    }
}

pub fn handle_diagnosis_finished(
    model: &mut Model,
    city: String,
    crop: String,
    outcome: Result<DiagnoseResponse, String>,
) -> bool {
    // The trigger is restored on every completion path.
    model.submitting = false;

    match outcome {
        Ok(response) => {
            model.report = Some(DiagnosisReport::build(&response, &city, &crop));
        }
        Err(err) => alert(&format!("Analysis failed: {}", err)),
    }

    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(data_transfer) = event.data_transfer() {
        if let Some(file_list) = data_transfer.files() {
            if let Some(file) = first_image_file(&file_list) {
                ctx.link().send_message(Msg::ImageSelected(file));
            }
        }
    }

    true
}

pub fn handle_paste(_model: &mut Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if let Some(data_transfer) = event.clipboard_data() {
        if let Some(file_list) = data_transfer.files() {
            if let Some(file) = first_image_file(&file_list) {
                event.prevent_default();
                ctx.link().send_message(Msg::ImageSelected(file));
                return true;
            }
        }
    }
    false
}

pub fn handle_toggle_theme(model: &mut Model) -> bool {
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();

    if model.theme == "light" {
        model.theme = "dark".to_string();
        body.class_list().add_1("dark-mode").unwrap();
    } else {
        model.theme = "light".to_string();
        body.class_list().remove_1("dark-mode").unwrap();
    }

    if let Err(e) = LocalStorage::set("theme", model.theme.clone()) {
        log::warn!("Failed to persist theme preference: {:?}", e);
    }

    true
}
