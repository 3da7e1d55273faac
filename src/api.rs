use crate::errors::ApiError;
use crate::models::{
    CheckinRequest, DailyPlanResponse, EmotionPlanRequest, EmotionPlanResponse, MoodAnalysis,
    MoodBoostRequest, MoodBoostResponse, MoodRequest, SchedulePlanResponse, ScheduleRequest,
    ScheduleTask,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn analyze_mood(&self, text: &str) -> Result<MoodAnalysis, ApiError> {
        let body = MoodRequest {
            text: text.to_string(),
        };
        self.post_json("/api/mood", &body).await
    }

    pub async fn mood_boost(&self, mood: &str) -> Result<MoodBoostResponse, ApiError> {
        let body = MoodBoostRequest {
            mood: mood.to_string(),
        };
        self.post_json("/mood_boost", &body).await
    }

    pub async fn save_checkin(&self, mood: &str, goal: &str) -> Result<(), ApiError> {
        let body = CheckinRequest {
            mood: mood.to_string(),
            goal: goal.to_string(),
        };
        self.post("/save_checkin", &body).await?;
        Ok(())
    }

    pub async fn morning_checkin(
        &self,
        mood: &str,
        goal: &str,
    ) -> Result<DailyPlanResponse, ApiError> {
        let body = CheckinRequest {
            mood: mood.to_string(),
            goal: goal.to_string(),
        };
        self.post_json("/api/morning_checkin", &body).await
    }

    pub async fn schedules(&self) -> Result<Vec<ScheduleTask>, ApiError> {
        self.get_json("/api/schedules").await
    }

    pub async fn schedule_plan(
        &self,
        tasks: Vec<String>,
        current_time: String,
    ) -> Result<SchedulePlanResponse, ApiError> {
        let body = ScheduleRequest {
            tasks,
            current_time,
        };
        self.post_json("/get_schedule", &body).await
    }

    pub async fn emotion_synced_plan(
        &self,
        mood: &str,
        tasks: Vec<String>,
    ) -> Result<EmotionPlanResponse, ApiError> {
        let body = EmotionPlanRequest {
            mood: mood.to_string(),
            tasks,
        };
        self.post_json("/api/emotion_synced_plan", &body).await
    }

    async fn post(
        &self,
        endpoint: &'static str,
        body: &impl Serialize,
    ) -> Result<reqwest::Response, ApiError> {
        debug!("POST {endpoint}");
        let response = self
            .http
            .post(format!("{}{endpoint}", self.base_url))
            .json(body)
            .send()
            .await
            .map_err(|err| ApiError::transport(endpoint, err))?;
        check_status(endpoint, response)
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let response = self.post(endpoint, body).await?;
        response
            .json()
            .await
            .map_err(|err| ApiError::transport(endpoint, err))
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &'static str) -> Result<T, ApiError> {
        debug!("GET {endpoint}");
        let response = self
            .http
            .get(format!("{}{endpoint}", self.base_url))
            .send()
            .await
            .map_err(|err| ApiError::transport(endpoint, err))?;
        let response = check_status(endpoint, response)?;
        response
            .json()
            .await
            .map_err(|err| ApiError::transport(endpoint, err))
    }
}

fn check_status(
    endpoint: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response, ApiError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ApiError::status(endpoint, response.status()))
    }
}
