use crate::models::MoodAnalysis;
use serde_json::Value;

pub fn mood_result_markup(analysis: &MoodAnalysis) -> String {
    format!(
        "<p><strong>Sentiment:</strong> {} {}</p>\
         <p><strong>Intensity:</strong> {}</p>\
         <p><strong>Tips:</strong></p><ul>{}</ul>\
         <p><strong>Suggested Activities:</strong></p><ul>{}</ul>",
        analysis.sentiment,
        analysis.emoji,
        intensity_label(&analysis.intensity),
        list_items(&analysis.tips),
        list_items(&analysis.suggested_activities),
    )
}

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{item}</li>"))
        .collect()
}

fn intensity_label(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
