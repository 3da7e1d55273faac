use crate::api::ApiClient;
use crate::models::ScheduleTask;
use crate::page::{Page, ids};
use crate::ui::mood_result_markup;
use chrono::Local;
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    MoodFormSubmit,
    MorningFormSubmit,
    TaskSuggestionsClick,
    EmotionPlanClick,
}

#[derive(Clone)]
pub struct Controller {
    api: ApiClient,
    page: Page,
}

impl Controller {
    pub fn new(api: ApiClient, page: Page) -> Self {
        Self { api, page }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub async fn dispatch(&self, event: Event) {
        match event {
            Event::MoodFormSubmit => self.submit_mood_checkin().await,
            Event::MorningFormSubmit => self.submit_morning_checkin().await,
            Event::TaskSuggestionsClick => self.request_task_suggestions().await,
            Event::EmotionPlanClick => self.request_emotion_plan().await,
        }
    }

    pub async fn submit_mood_checkin(&self) {
        let text = self.trimmed_input(ids::MOOD_TEXT).await;
        if text.is_empty() {
            self.page
                .display_error(ids::MOOD_ERROR, "Please enter your mood description.")
                .await;
            return;
        }

        self.page.clear_message(ids::MOOD_ERROR).await;
        self.page
            .show_loading(ids::MOOD_RESULT, "Analyzing mood...")
            .await;

        let analysis = match self.api.analyze_mood(&text).await {
            Ok(analysis) => analysis,
            Err(err) => {
                error!("mood analysis failed: {err}");
                self.page
                    .display_error(ids::MOOD_ERROR, "Failed to analyze mood")
                    .await;
                return;
            }
        };
        self.page
            .render(ids::MOOD_RESULT, &mood_result_markup(&analysis))
            .await;

        self.page
            .show_loading(ids::MOOD_ACTION_SUGGESTIONS, "Getting suggestions...")
            .await;
        match self.api.mood_boost(&text).await {
            Ok(boost) => {
                self.page
                    .render(ids::MOOD_ACTION_SUGGESTIONS, &boost.suggestions)
                    .await;
            }
            Err(err) => {
                error!("mood boost failed: {err}");
                self.page
                    .display_error(ids::MOOD_ERROR, "Failed to get mood boost suggestions")
                    .await;
            }
        }
    }

    pub async fn submit_morning_checkin(&self) {
        let mood = self.trimmed_input(ids::MORNING_MOOD).await;
        let goal = self.trimmed_input(ids::MORNING_GOAL).await;
        if mood.is_empty() || goal.is_empty() {
            self.page
                .display_error(ids::MORNING_CHECKIN_ERROR, "Please enter both mood and goal.")
                .await;
            return;
        }

        self.page.clear_message(ids::MORNING_CHECKIN_ERROR).await;
        self.page
            .show_loading(ids::DAILY_PLAN, "Generating daily plan...")
            .await;

        if let Err(err) = self.api.save_checkin(&mood, &goal).await {
            error!("check-in save failed: {err}");
            self.page
                .display_error(ids::MORNING_CHECKIN_ERROR, "Failed to save check-in")
                .await;
            return;
        }

        match self.api.morning_checkin(&mood, &goal).await {
            Ok(response) => {
                self.page.render(ids::DAILY_PLAN, &response.daily_plan).await;
                self.page.clear_message(ids::MORNING_CHECKIN_ERROR).await;
            }
            Err(err) => {
                error!("daily plan failed: {err}");
                self.page
                    .display_error(ids::MORNING_CHECKIN_ERROR, "Failed to get daily plan")
                    .await;
            }
        }
    }

    pub async fn request_task_suggestions(&self) {
        self.page
            .show_loading(ids::TASK_SUGGESTIONS_RESULT, "Fetching tasks...")
            .await;

        let tasks = match self.api.schedules().await {
            Ok(tasks) => tasks,
            Err(err) => {
                error!("schedule fetch failed: {err}");
                self.page
                    .display_error(ids::TASK_SUGGESTIONS_ERROR, "Failed to fetch tasks")
                    .await;
                return;
            }
        };

        let current_time = current_time_string();
        match self
            .api
            .schedule_plan(task_titles(&tasks), current_time)
            .await
        {
            Ok(response) => {
                self.page
                    .render(ids::TASK_SUGGESTIONS_RESULT, &response.plan)
                    .await;
                self.page.clear_message(ids::TASK_SUGGESTIONS_ERROR).await;
            }
            Err(err) => {
                error!("task suggestions failed: {err}");
                self.page
                    .display_error(ids::TASK_SUGGESTIONS_ERROR, "Failed to get task suggestions")
                    .await;
            }
        }
    }

    pub async fn request_emotion_plan(&self) {
        // An unbound mood input falls back to a neutral placeholder.
        let mood = match self.page.input_value(ids::MOOD_TEXT).await {
            Some(value) => value.trim().to_string(),
            None => "neutral".to_string(),
        };

        self.page
            .show_loading(ids::EMOTION_PLAN_RESULT, "Fetching emotion-synced plan...")
            .await;

        let tasks = match self.api.schedules().await {
            Ok(tasks) => tasks,
            Err(err) => {
                error!("schedule fetch failed: {err}");
                self.page
                    .display_error(ids::EMOTION_PLAN_ERROR, "Failed to fetch tasks")
                    .await;
                return;
            }
        };

        match self
            .api
            .emotion_synced_plan(&mood, task_titles(&tasks))
            .await
        {
            Ok(response) => {
                self.page
                    .render(ids::EMOTION_PLAN_RESULT, &response.adjusted_plan)
                    .await;
            }
            Err(err) => {
                error!("emotion-synced plan failed: {err}");
                self.page
                    .display_error(ids::EMOTION_PLAN_ERROR, "Failed to get emotion-synced plan")
                    .await;
            }
        }
    }

    async fn trimmed_input(&self, id: &str) -> String {
        self.page
            .input_value(id)
            .await
            .unwrap_or_default()
            .trim()
            .to_string()
    }
}

fn task_titles(tasks: &[ScheduleTask]) -> Vec<String> {
    tasks.iter().map(|task| task.title.clone()).collect()
}

fn current_time_string() -> String {
    Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
