use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct MoodRequest {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoodAnalysis {
    pub sentiment: String,
    pub emoji: String,
    // The backend sends both numbers and strings here.
    #[serde(default)]
    pub intensity: Value,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub suggested_activities: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MoodBoostRequest {
    pub mood: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoodBoostResponse {
    pub suggestions: String,
}

#[derive(Debug, Serialize)]
pub struct CheckinRequest {
    pub mood: String,
    pub goal: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyPlanResponse {
    pub daily_plan: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleTask {
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct ScheduleRequest {
    pub tasks: Vec<String>,
    pub current_time: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchedulePlanResponse {
    pub plan: String,
}

#[derive(Debug, Serialize)]
pub struct EmotionPlanRequest {
    pub mood: String,
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmotionPlanResponse {
    pub adjusted_plan: String,
}
