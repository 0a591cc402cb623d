use std::fmt;

use chrono::NaiveDateTime;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Body returned by `POST /analyze_prescription`.
#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct AnalysisResult {
    pub error: Option<String>,
    pub prescription_analysis: Option<PrescriptionAnalysis>,
    pub diet_recommendations: Option<DietRecommendations>,
    pub uploaded_file: Option<String>,
    pub analysis_timestamp: Option<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct PrescriptionAnalysis {
    pub medications: Vec<Medication>,
    #[serde(default)]
    pub detected_conditions: Vec<String>,
    #[serde(default)]
    pub confidence_score: u32,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub special_instructions: Vec<String>,
    #[serde(default)]
    pub general_notes: Vec<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Medication {
    pub name: String,
    pub category: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct DietRecommendations {
    pub general_recommendations: Vec<String>,
    pub food_suggestions: Vec<String>,
    pub foods_to_avoid: Vec<String>,
    pub feeding_schedule: FeedingSchedule,
    #[serde(default)]
    pub supplements: Vec<String>,
    #[serde(default)]
    pub hydration_tips: Vec<String>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct ScheduleEntry {
    pub time: String,
    pub description: String,
}

/// Feeding schedule in the order the JSON object lists its keys.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FeedingSchedule(pub Vec<ScheduleEntry>);

impl FeedingSchedule {
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.0
    }
}

struct FeedingScheduleVisitor;

impl<'de> Visitor<'de> for FeedingScheduleVisitor {
    type Value = FeedingSchedule;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of feeding time to description")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((time, description)) = map.next_entry::<String, String>()? {
            entries.push(ScheduleEntry { time, description });
        }
        Ok(FeedingSchedule(entries))
    }
}

impl<'de> Deserialize<'de> for FeedingSchedule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(FeedingScheduleVisitor)
    }
}

impl AnalysisResult {
    /// Decodes a response body. Only an error response may omit the analysis.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let result: AnalysisResult = serde_json::from_str(body)?;
        if result.error.is_none() && result.prescription_analysis.is_none() {
            return Err(serde::de::Error::missing_field("prescription_analysis"));
        }
        Ok(result)
    }

    /// Backend timestamps are naive local ISO-8601 with optional fractional seconds.
    pub fn analyzed_at(&self) -> Option<String> {
        let raw = self.analysis_timestamp.as_deref()?;
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|ts| ts.format("%b %-d, %Y %H:%M").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_scenario_response() {
        let body = json!({
            "prescription_analysis": {
                "medications": [{"name": "Amoxicillin", "category": "Antibiotic"}]
            },
            "diet_recommendations": {
                "general_recommendations": ["Feed small portions"],
                "food_suggestions": ["Chicken"],
                "foods_to_avoid": [],
                "feeding_schedule": {"Morning": "1 cup"}
            }
        });
        let result = AnalysisResult::from_json(&body.to_string()).unwrap();

        assert!(result.error.is_none());
        assert_eq!(
            result.prescription_analysis.unwrap().medications,
            vec![Medication {
                name: "Amoxicillin".to_string(),
                category: "Antibiotic".to_string(),
            }]
        );
        let diet = result.diet_recommendations.unwrap();
        assert!(diet.foods_to_avoid.is_empty());
        assert_eq!(
            diet.feeding_schedule.entries(),
            &[ScheduleEntry {
                time: "Morning".to_string(),
                description: "1 cup".to_string(),
            }]
        );
    }

    #[test]
    fn feeding_schedule_keeps_document_order() {
        // Keys deliberately out of alphabetical order.
        let raw = r#"{
            "general_recommendations": [],
            "food_suggestions": [],
            "foods_to_avoid": [],
            "feeding_schedule": {
            "lunch": "12:00",
            "breakfast": "7:00",
            "medication_times": "with meals",
            "dinner": "18:00"
        }}"#;
        let diet: DietRecommendations = serde_json::from_str(raw).unwrap();
        let times: Vec<&str> = diet
            .feeding_schedule
            .entries()
            .iter()
            .map(|e| e.time.as_str())
            .collect();
        assert_eq!(times, ["lunch", "breakfast", "medication_times", "dinner"]);
    }

    #[test]
    fn error_only_body_decodes() {
        let result = AnalysisResult::from_json(r#"{"error": "Invalid file type"}"#).unwrap();
        assert_eq!(result.error.as_deref(), Some("Invalid file type"));
        assert!(result.prescription_analysis.is_none());
        assert!(result.diet_recommendations.is_none());
    }

    #[test]
    fn extra_backend_fields_are_read_or_ignored() {
        let body = json!({
            "prescription_analysis": {
                "medications": [{"name": "Carprofen", "category": "pain_relievers", "found_in_text": true}],
                "detected_conditions": ["arthritis"],
                "confidence_score": 35,
                "dosage_instructions": [{"amount": "75", "unit": "mg", "match": "75 mg"}],
                "raw_text_sample": "..."
            },
            "uploaded_file": "rx.png",
            "analysis_timestamp": "2024-03-05T14:07:09.123456"
        });
        let result: AnalysisResult = serde_json::from_value(body).unwrap();
        let analysis = result.prescription_analysis.as_ref().unwrap();
        assert_eq!(analysis.detected_conditions, ["arthritis"]);
        assert_eq!(analysis.confidence_score, 35);
        assert_eq!(result.uploaded_file.as_deref(), Some("rx.png"));
        assert_eq!(result.analyzed_at().as_deref(), Some("Mar 5, 2024 14:07"));
    }

    #[test]
    fn unparseable_timestamp_is_skipped() {
        let result = AnalysisResult {
            analysis_timestamp: Some("yesterday".to_string()),
            ..Default::default()
        };
        assert_eq!(result.analyzed_at(), None);
    }

    #[test]
    fn non_string_schedule_value_is_rejected() {
        let raw = r#"{
            "general_recommendations": [],
            "food_suggestions": [],
            "foods_to_avoid": [],
            "feeding_schedule": {"Morning": 1}
        }"#;
        assert!(serde_json::from_str::<DietRecommendations>(raw).is_err());
    }

    #[test]
    fn body_without_analysis_is_rejected() {
        assert!(AnalysisResult::from_json("{}").is_err());
        assert!(AnalysisResult::from_json(r#"{"status": "healthy"}"#).is_err());
    }

    #[test]
    fn analysis_without_medications_is_rejected() {
        assert!(AnalysisResult::from_json(r#"{"prescription_analysis": {}}"#).is_err());
    }

    #[test]
    fn diet_without_core_lists_is_rejected() {
        let raw = r#"{
            "prescription_analysis": {"medications": []},
            "diet_recommendations": {}
        }"#;
        assert!(AnalysisResult::from_json(raw).is_err());
    }

    #[test]
    fn supplemental_fields_default_when_absent() {
        let raw = r#"{
            "prescription_analysis": {"medications": []},
            "diet_recommendations": {
                "general_recommendations": ["Fresh water"],
                "food_suggestions": [],
                "foods_to_avoid": [],
                "feeding_schedule": {}
            }
        }"#;
        let result = AnalysisResult::from_json(raw).unwrap();
        let analysis = result.prescription_analysis.unwrap();
        assert_eq!(analysis.confidence_score, 0);
        assert!(analysis.detected_conditions.is_empty());
        let diet = result.diet_recommendations.unwrap();
        assert!(diet.supplements.is_empty());
        assert!(diet.feeding_schedule.entries().is_empty());
    }
}
