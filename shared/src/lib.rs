use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Response payload of `POST /api/diagnose`. Every section and field is
/// optional; partial payloads must decode cleanly and fall back at render
/// time.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DiagnoseResponse {
    #[serde(default)]
    pub vision_result: Option<VisionResult>,
    #[serde(default)]
    pub weather: Option<WeatherData>,
    #[serde(default)]
    pub mandi_prices: Option<MandiPrices>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct VisionResult {
    #[serde(default)]
    pub disease: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    /// Model confidence in `[0, 1]`.
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub recommendation: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct WeatherData {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    /// Millimetres. `None` (absent or JSON null) renders differently from a
    /// present `0.0`.
    #[serde(default)]
    pub precipitation: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct MandiPrices {
    #[serde(default)]
    pub commodity: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub prices: Vec<MandiPrice>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct MandiPrice {
    #[serde(default)]
    pub market: Option<String>,
    #[serde(default)]
    pub modal_price: Option<f64>,
    #[serde(default)]
    pub min_price: Option<f64>,
    #[serde(default)]
    pub max_price: Option<f64>,
}

/// Severity category shown on the diagnosis badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Severity {
    #[strum(serialize = "High Severity")]
    High,
    #[strum(serialize = "Medium Severity")]
    Medium,
    #[strum(serialize = "Low Severity")]
    Low,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

/// Maps the reported severity string to a badge category by case-insensitive
/// substring match. An absent or empty severity falls back to the confidence
/// threshold, which only ever yields Medium or Low.
pub fn classify_severity(severity: Option<&str>, confidence: Option<f64>) -> Severity {
    match severity.filter(|s| !s.is_empty()) {
        Some(s) => {
            let s = s.to_lowercase();
            if s.contains("high") || s.contains("severe") {
                Severity::High
            } else if s.contains("medium") || s.contains("moderate") {
                Severity::Medium
            } else {
                Severity::Low
            }
        }
        None => {
            if confidence.unwrap_or(0.0) > 0.6 {
                Severity::Medium
            } else {
                Severity::Low
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_string_substring_matches() {
        assert_eq!(classify_severity(Some("High"), None), Severity::High);
        assert_eq!(classify_severity(Some("SEVERE infestation"), None), Severity::High);
        assert_eq!(classify_severity(Some("medium"), Some(0.1)), Severity::Medium);
        assert_eq!(classify_severity(Some("Moderate spread"), None), Severity::Medium);
        assert_eq!(classify_severity(Some("unknown"), Some(0.99)), Severity::Low);
        assert_eq!(classify_severity(Some("mild"), None), Severity::Low);
    }

    #[test]
    fn confidence_fallback_never_reaches_high() {
        assert_eq!(classify_severity(None, Some(0.75)), Severity::Medium);
        assert_eq!(classify_severity(None, Some(0.61)), Severity::Medium);
        assert_eq!(classify_severity(None, Some(0.3)), Severity::Low);
        assert_eq!(classify_severity(None, Some(1.0)), Severity::Medium);
        assert_eq!(classify_severity(None, None), Severity::Low);
    }

    #[test]
    fn empty_severity_string_uses_confidence() {
        assert_eq!(classify_severity(Some(""), Some(0.75)), Severity::Medium);
        assert_eq!(classify_severity(Some(""), Some(0.2)), Severity::Low);
    }

    #[test]
    fn badge_labels_and_classes() {
        assert_eq!(Severity::High.to_string(), "High Severity");
        assert_eq!(Severity::Medium.to_string(), "Medium Severity");
        assert_eq!(Severity::Low.to_string(), "Low Severity");
        assert_eq!(Severity::High.css_class(), "high");
    }

    #[test]
    fn decodes_full_payload() {
        let raw = r#"{
            "vision_result": {
                "disease": "Leaf Blight",
                "confidence": 0.82,
                "severity": "High",
                "recommendation": "Apply copper-based fungicide."
            },
            "weather": {
                "city": "Pune",
                "temperature": 30,
                "humidity": 70,
                "condition": "clear sky",
                "wind_speed": 2.5,
                "precipitation": null
            },
            "mandi_prices": {
                "commodity": "Tomato",
                "city": "Pune",
                "date": "2025-06-01",
                "prices": [
                    {"market": "A", "modal_price": 100, "min_price": 90, "max_price": 110}
                ]
            }
        }"#;
        let decoded: DiagnoseResponse = serde_json::from_str(raw).unwrap();
        let vision = decoded.vision_result.unwrap();
        assert_eq!(vision.disease.as_deref(), Some("Leaf Blight"));
        assert_eq!(vision.confidence, Some(0.82));
        let weather = decoded.weather.unwrap();
        assert_eq!(weather.temperature, Some(30.0));
        assert_eq!(weather.precipitation, None);
        let mandi = decoded.mandi_prices.unwrap();
        assert_eq!(mandi.prices.len(), 1);
        assert_eq!(mandi.prices[0].modal_price, Some(100.0));
    }

    #[test]
    fn decodes_partial_and_empty_payloads() {
        let decoded: DiagnoseResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(decoded, DiagnoseResponse::default());

        let decoded: DiagnoseResponse =
            serde_json::from_str(r#"{"weather": {"precipitation": 0}}"#).unwrap();
        assert_eq!(decoded.weather.unwrap().precipitation, Some(0.0));
        assert!(decoded.vision_result.is_none());

        let decoded: DiagnoseResponse =
            serde_json::from_str(r#"{"mandi_prices": {"prices": [{}]}}"#).unwrap();
        assert_eq!(decoded.mandi_prices.unwrap().prices[0], MandiPrice::default());
    }

    #[test]
    fn tolerates_unknown_fields() {
        let raw = r#"{"vision_result": {"disease": "Rust", "explanation": "stub"}, "source": "stub"}"#;
        let decoded: DiagnoseResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(decoded.vision_result.unwrap().disease.as_deref(), Some("Rust"));
    }
}
