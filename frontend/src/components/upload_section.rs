use super::utils::debounce;
use crate::{Model, Msg};
use web_sys::{DragEvent, HtmlElement, HtmlInputElement};
use yew::prelude::*;

/// Optional logo slot above the upload zone. Unconfigured by default.
pub const UPLOAD_LOGO_URL: Option<&str> = None;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        // First file wins; anything the picker allows is accepted here and
        // left for the backend to judge.
        input
            .files()
            .and_then(|files| files.item(0))
            .map(|file| Msg::ImageSelected(gloo_file::File::from(file)))
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);

    let trigger_file_input = {
        let input_ref = model.image_input_ref.clone();
        Callback::from(move |_: ()| {
            if let Some(input) = input_ref.cast::<HtmlElement>() {
                input.click();
            }
        })
    };

    let open_picker_from_button = {
        let trigger = trigger_file_input.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            trigger.emit(());
        })
    };

    html! {
        <div class="upload-section">
            { render_upload_logo() }

            <input
                type="file"
                accept="image/*"
                style="display: none;"
                ref={model.image_input_ref.clone()}
                onchange={handle_change}
            />

            <div
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, {
                    let trigger = trigger_file_input.clone();
                    move || trigger.emit(())
                })}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <p>{"Drag & drop a leaf photo here, paste, or click"}</p>
                    <p class="file-types">{"Supported formats: JPG, PNG, WEBP"}</p>
                </div>
                <button class="upload-btn" onclick={open_picker_from_button}>
                    <i class="fa-solid fa-upload"></i>{" Upload Image"}
                </button>
            </div>

            <div class="field-row">
                <label for="city-input">{"Location"}</label>
                <input
                    id="city-input"
                    type="text"
                    placeholder="Enter your city"
                    ref={model.city_input_ref.clone()}
                />
            </div>
            <div class="field-row">
                <label for="crop-input">{"Crop"}</label>
                <input
                    id="crop-input"
                    type="text"
                    placeholder="Enter your crop"
                    ref={model.crop_input_ref.clone()}
                />
            </div>

            <button
                class="analyze-btn"
                disabled={model.submitting}
                onclick={debounce(300, {
                    let link = link.clone();
                    move || link.send_message(Msg::Diagnose)
                })}
            >
                { render_analyze_button_content(model) }
            </button>
        </div>
    }
}

fn render_upload_logo() -> Html {
    match UPLOAD_LOGO_URL {
        Some(url) => html! { <img class="upload-logo" src={url} alt="Logo" /> },
        None => html! {},
    }
}

fn render_analyze_button_content(model: &Model) -> Html {
    if model.submitting {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
    } else {
        html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Analyze Crop Health"}</> }
    }
}
