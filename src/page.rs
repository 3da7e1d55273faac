use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::error;

pub mod ids {
    pub const MOOD_TEXT: &str = "mood-text";
    pub const MOOD_RESULT: &str = "mood-result";
    pub const MOOD_ACTION_SUGGESTIONS: &str = "mood-action-suggestions";
    pub const MOOD_ERROR: &str = "mood-error";
    pub const MORNING_MOOD: &str = "morning-mood";
    pub const MORNING_GOAL: &str = "morning-goal";
    pub const DAILY_PLAN: &str = "daily-plan";
    pub const MORNING_CHECKIN_ERROR: &str = "morning-checkin-error";
    pub const TASK_SUGGESTIONS_RESULT: &str = "task-suggestions-result";
    pub const TASK_SUGGESTIONS_ERROR: &str = "task-suggestions-error";
    pub const EMOTION_PLAN_RESULT: &str = "emotion-plan-result";
    pub const EMOTION_PLAN_ERROR: &str = "emotion-plan-error";
}

const DASHBOARD_CONTAINERS: [&str; 9] = [
    ids::MOOD_RESULT,
    ids::MOOD_ACTION_SUGGESTIONS,
    ids::MOOD_ERROR,
    ids::DAILY_PLAN,
    ids::MORNING_CHECKIN_ERROR,
    ids::TASK_SUGGESTIONS_RESULT,
    ids::TASK_SUGGESTIONS_ERROR,
    ids::EMOTION_PLAN_RESULT,
    ids::EMOTION_PLAN_ERROR,
];

const DASHBOARD_INPUTS: [&str; 3] = [ids::MOOD_TEXT, ids::MORNING_MOOD, ids::MORNING_GOAL];

#[derive(Debug, Clone, Default)]
struct Node {
    content: String,
    hidden: bool,
}

#[derive(Debug, Default)]
struct PageNodes {
    containers: BTreeMap<String, Node>,
    inputs: BTreeMap<String, String>,
}

#[derive(Clone, Default)]
pub struct Page {
    nodes: Arc<Mutex<PageNodes>>,
}

impl Page {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn dashboard() -> Self {
        let mut nodes = PageNodes::default();
        for id in DASHBOARD_CONTAINERS {
            nodes.containers.insert(
                id.to_string(),
                Node {
                    content: String::new(),
                    hidden: true,
                },
            );
        }
        for id in DASHBOARD_INPUTS {
            nodes.inputs.insert(id.to_string(), String::new());
        }
        Self {
            nodes: Arc::new(Mutex::new(nodes)),
        }
    }

    pub async fn display_error(&self, id: &str, message: &str) {
        let mut nodes = self.nodes.lock().await;
        match nodes.containers.get_mut(id) {
            Some(node) => {
                node.content = message.to_string();
                node.hidden = false;
            }
            None => error!("error container not found: {id}"),
        }
    }

    pub async fn show_loading(&self, id: &str, message: &str) {
        self.render(id, message).await;
    }

    pub async fn render(&self, id: &str, content: &str) {
        let mut nodes = self.nodes.lock().await;
        if let Some(node) = nodes.containers.get_mut(id) {
            node.content = content.to_string();
            node.hidden = false;
        }
    }

    pub async fn clear_message(&self, id: &str) {
        let mut nodes = self.nodes.lock().await;
        if let Some(node) = nodes.containers.get_mut(id) {
            node.content.clear();
            node.hidden = true;
        }
    }

    pub async fn input_value(&self, id: &str) -> Option<String> {
        self.nodes.lock().await.inputs.get(id).cloned()
    }

    pub async fn set_input(&self, id: &str, value: &str) {
        self.nodes
            .lock()
            .await
            .inputs
            .insert(id.to_string(), value.to_string());
    }

    pub async fn remove_input(&self, id: &str) {
        self.nodes.lock().await.inputs.remove(id);
    }

    pub async fn remove_container(&self, id: &str) {
        self.nodes.lock().await.containers.remove(id);
    }

    pub async fn text(&self, id: &str) -> Option<String> {
        self.nodes
            .lock()
            .await
            .containers
            .get(id)
            .map(|node| node.content.clone())
    }

    pub async fn is_visible(&self, id: &str) -> bool {
        self.nodes
            .lock()
            .await
            .containers
            .get(id)
            .is_some_and(|node| !node.hidden)
    }

    pub async fn visible_sections(&self) -> Vec<(String, String)> {
        self.nodes
            .lock()
            .await
            .containers
            .iter()
            .filter(|(_, node)| !node.hidden)
            .map(|(id, node)| (id.clone(), node.content.clone()))
            .collect()
    }
}
