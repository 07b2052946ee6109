use shared::{classify_severity, DiagnoseResponse, Severity};

/// Display-ready projection of a `DiagnoseResponse`. All fallback
/// substitution happens here so rendering stays a straight read of
/// preformatted strings.
#[derive(Clone, Debug, PartialEq)]
pub struct DiagnosisReport {
    pub disease: String,
    pub recommendation: String,
    pub severity: Severity,
    /// Confidence bar width, rounded to whole percent.
    pub confidence_pct: u32,
    pub weather: WeatherView,
    pub market: MarketView,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WeatherView {
    pub city: String,
    pub condition: String,
    pub temperature: String,
    pub humidity: String,
    pub wind_speed: String,
    pub precipitation: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarketView {
    pub commodity: String,
    pub city: String,
    pub date: String,
    pub rows: Vec<MarketRow>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarketRow {
    pub market: String,
    pub modal_price: String,
    pub min_price: String,
    pub max_price: String,
}

impl DiagnosisReport {
    /// Builds the report from an untrusted response. `city` and `crop` are
    /// the submitted form values, used wherever the payload omits its own.
    pub fn build(response: &DiagnoseResponse, city: &str, crop: &str) -> Self {
        let vision = response.vision_result.clone().unwrap_or_default();
        let weather = response.weather.clone().unwrap_or_default();
        let mandi = response.mandi_prices.clone().unwrap_or_default();

        let severity = classify_severity(vision.severity.as_deref(), vision.confidence);
        let confidence_pct = (vision.confidence.unwrap_or(0.0) * 100.0).round() as u32;

        Self {
            disease: vision
                .disease
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "Not detected".to_string()),
            recommendation: vision
                .recommendation
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "No recommendation available".to_string()),
            severity,
            confidence_pct,
            weather: WeatherView {
                city: weather
                    .city
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| city.to_string()),
                condition: weather.condition.filter(|s| !s.is_empty()).unwrap_or_else(na),
                temperature: fmt_or_na(weather.temperature),
                humidity: fmt_or_na(weather.humidity),
                wind_speed: fmt_or_na(weather.wind_speed),
                // A present zero is real data; only absence reads "N/A".
                precipitation: match weather.precipitation {
                    Some(mm) => format!("{} mm", fmt_number(mm)),
                    None => na(),
                },
            },
            market: MarketView {
                commodity: mandi
                    .commodity
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| crop.to_string()),
                city: mandi
                    .city
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| city.to_string()),
                date: mandi.date.unwrap_or_default(),
                rows: mandi
                    .prices
                    .into_iter()
                    .map(|price| MarketRow {
                        market: price.market.filter(|s| !s.is_empty()).unwrap_or_else(na),
                        modal_price: fmt_rupees(price.modal_price),
                        min_price: fmt_rupees(price.min_price),
                        max_price: fmt_rupees(price.max_price),
                    })
                    .collect(),
            },
        }
    }
}

fn na() -> String {
    "N/A".to_string()
}

fn fmt_number(value: f64) -> String {
    format!("{}", value)
}

fn fmt_or_na(value: Option<f64>) -> String {
    value.map(fmt_number).unwrap_or_else(na)
}

fn fmt_rupees(value: Option<f64>) -> String {
    value.map(|v| format!("₹{}", fmt_number(v))).unwrap_or_else(na)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::WeatherData;

    fn sample_response() -> DiagnoseResponse {
        serde_json::from_str(
            r#"{
                "vision_result": {
                    "disease": "Leaf Blight",
                    "confidence": 0.82,
                    "severity": "High",
                    "recommendation": "Apply copper-based fungicide."
                },
                "weather": {"temperature": 30, "humidity": 70},
                "mandi_prices": {
                    "prices": [
                        {"market": "A", "modal_price": 100, "min_price": 90, "max_price": 110}
                    ]
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn builds_full_report() {
        let report = DiagnosisReport::build(&sample_response(), "Pune", "Tomato");

        assert_eq!(report.disease, "Leaf Blight");
        assert_eq!(report.confidence_pct, 82);
        assert_eq!(report.severity, Severity::High);
        assert_eq!(report.severity.to_string(), "High Severity");
        assert_eq!(report.weather.temperature, "30");
        assert_eq!(report.weather.humidity, "70");
        assert_eq!(report.weather.precipitation, "N/A");
        assert_eq!(report.market.rows.len(), 1);
        assert_eq!(report.market.rows[0].market, "A");
        assert_eq!(report.market.rows[0].modal_price, "₹100");
        assert_eq!(report.market.rows[0].min_price, "₹90");
        assert_eq!(report.market.rows[0].max_price, "₹110");
    }

    #[test]
    fn empty_response_degrades_to_placeholders() {
        let report = DiagnosisReport::build(&DiagnoseResponse::default(), "Pune", "Tomato");

        assert_eq!(report.disease, "Not detected");
        assert_eq!(report.recommendation, "No recommendation available");
        assert_eq!(report.severity, Severity::Low);
        assert_eq!(report.confidence_pct, 0);
        assert_eq!(report.weather.city, "Pune");
        assert_eq!(report.weather.condition, "N/A");
        assert_eq!(report.weather.temperature, "N/A");
        assert_eq!(report.market.commodity, "Tomato");
        assert_eq!(report.market.city, "Pune");
        assert_eq!(report.market.date, "");
        assert!(report.market.rows.is_empty());
    }

    #[test]
    fn present_zero_precipitation_is_not_na() {
        let response = DiagnoseResponse {
            weather: Some(WeatherData {
                precipitation: Some(0.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        let report = DiagnosisReport::build(&response, "Pune", "Tomato");

        assert_eq!(report.weather.precipitation, "0 mm");
    }

    #[test]
    fn missing_severity_uses_confidence_threshold() {
        let with_confidence = |confidence: f64| {
            serde_json::from_str::<DiagnoseResponse>(&format!(
                r#"{{"vision_result": {{"confidence": {confidence}}}}}"#
            ))
            .unwrap()
        };

        let report = DiagnosisReport::build(&with_confidence(0.75), "Pune", "Tomato");
        assert_eq!(report.severity, Severity::Medium);
        assert_eq!(report.confidence_pct, 75);

        let report = DiagnosisReport::build(&with_confidence(0.3), "Pune", "Tomato");
        assert_eq!(report.severity, Severity::Low);

        // The numeric fallback tops out at Medium, no matter how confident.
        let report = DiagnosisReport::build(&with_confidence(0.99), "Pune", "Tomato");
        assert_eq!(report.severity, Severity::Medium);
    }

    #[test]
    fn payload_values_override_submitted_fields() {
        let response: DiagnoseResponse = serde_json::from_str(
            r#"{
                "weather": {"city": "Nashik"},
                "mandi_prices": {"commodity": "Onion", "city": "Nashik", "date": "2025-06-01"}
            }"#,
        )
        .unwrap();
        let report = DiagnosisReport::build(&response, "Pune", "Tomato");

        assert_eq!(report.weather.city, "Nashik");
        assert_eq!(report.market.commodity, "Onion");
        assert_eq!(report.market.city, "Nashik");
        assert_eq!(report.market.date, "2025-06-01");
    }

    #[test]
    fn fractional_values_keep_their_precision() {
        let response: DiagnoseResponse = serde_json::from_str(
            r#"{
                "vision_result": {"confidence": 0.826},
                "weather": {"wind_speed": 2.5, "precipitation": 1.2},
                "mandi_prices": {"prices": [{"market": "B", "modal_price": 90.5}]}
            }"#,
        )
        .unwrap();
        let report = DiagnosisReport::build(&response, "Pune", "Tomato");

        assert_eq!(report.confidence_pct, 83);
        assert_eq!(report.weather.wind_speed, "2.5");
        assert_eq!(report.weather.precipitation, "1.2 mm");
        assert_eq!(report.market.rows[0].modal_price, "₹90.5");
        // Row fields the payload omitted degrade individually.
        assert_eq!(report.market.rows[0].min_price, "N/A");
    }
}
