use yew::prelude::*;

/// Optional navbar logo slot. Unconfigured by default.
pub const NAV_LOGO_URL: Option<&str> = None;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            { match NAV_LOGO_URL {
                Some(url) => html! { <img class="nav-logo" src={url} alt="Logo" /> },
                None => html! {},
            } }
            <h1><i class="fa-solid fa-leaf"></i>{" Crop Health Diagnosis"}</h1>
            <p class="subtitle">{"Upload a leaf photo for disease, weather, and mandi price insight"}</p>
        </header>
    }
}
