use crate::{Model, Msg};
use yew::prelude::*;

pub fn render_preview_area(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(url) = &model.preview_url else {
        return html! {};
    };

    let link = ctx.link();

    html! {
        <div class="preview-wrap">
            <img class="preview-img" src={url.clone()} alt="Selected leaf" />
            <button
                class="remove-btn"
                title="Remove this image"
                onclick={link.callback(|e: MouseEvent| {
                    e.stop_propagation();
                    Msg::RemoveImage
                })}
            >
                <i class="fa-solid fa-times"></i>
            </button>
        </div>
    }
}
