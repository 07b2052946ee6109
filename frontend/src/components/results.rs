use super::utils::debounce;
use crate::report::MarketRow;
use crate::{Model, Msg};
use yew::prelude::*;

pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(report) = &model.report else {
        return html! {};
    };

    let link = ctx.link().clone();

    html! {
        <div class="results-panel">
            <div class="result-header">
                <h2 class="disease-name">{ &report.disease }</h2>
                <span class={classes!("severity", report.severity.css_class())}>
                    { report.severity.to_string() }
                </span>
            </div>

            <div class="confidence-meter">
                <div class="meter-label">{"Confidence:"}</div>
                <div class="meter">
                    <div class="meter-fill" style={format!("width: {}%", report.confidence_pct)}></div>
                </div>
                <div class="meter-value">{ format!("{}%", report.confidence_pct) }</div>
            </div>

            <p class="recommendation">{ &report.recommendation }</p>

            <div class="info-cards">
                <div class="info-card weather-content">
                    <h3><i class="fa-solid fa-cloud-sun"></i>{" Weather"}</h3>
                    <p><strong>{ &report.weather.city }</strong></p>
                    <p class="muted">{ &report.weather.condition }</p>
                    <p>{ format!("Temp: {} °C · Humidity: {}%",
                        report.weather.temperature, report.weather.humidity) }</p>
                    <p>{ format!("Wind: {} m/s · Precipitation: {}",
                        report.weather.wind_speed, report.weather.precipitation) }</p>
                </div>

                <div class="info-card market-content">
                    <h3><i class="fa-solid fa-scale-balanced"></i>{" Mandi Prices"}</h3>
                    <p>
                        <strong>{ &report.market.commodity }</strong>
                        { format!(" · {} · {}", report.market.city, report.market.date) }
                    </p>
                    { render_market_rows(&report.market.rows) }
                </div>
            </div>

            <button
                class="analyze-btn new-analysis-btn"
                onclick={debounce(300, move || link.send_message(Msg::NewAnalysis))}
            >
                <i class="fa-solid fa-rotate-left"></i>{" New Analysis"}
            </button>
        </div>
    }
}

fn render_market_rows(rows: &[MarketRow]) -> Html {
    if rows.is_empty() {
        return html! { <div class="muted">{"Market data unavailable"}</div> };
    }

    html! {
        <ul class="price-list">
            { for rows.iter().map(|row| html! {
                <li>{ format!("{}: {} (min {} — max {})",
                    row.market, row.modal_price, row.min_price, row.max_price) }</li>
            }) }
        </ul>
    }
}
