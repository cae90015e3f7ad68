use std::env;

use serde_json::json;
use tracing::debug;

use crate::error::AnalysisError;

const SLACK_API_BASE: &str = "https://slack.com/api";

/// Posts event notifications to a Slack channel via `chat.postMessage`.
#[derive(Debug)]
pub struct SlackNotifier {
    client: reqwest::blocking::Client,
    api_base: String,
    token: String,
    channel: String,
}

impl SlackNotifier {
    pub fn new(token: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_base: SLACK_API_BASE.to_string(),
            token: token.into(),
            channel: channel.into(),
        }
    }

    /// Build a notifier from `SLACK_TOKEN` / `SLACK_CHANNEL`. No token means
    /// notifications are disabled; a token without a channel is an error.
    pub fn from_env() -> Result<Option<Self>, AnalysisError> {
        let Ok(token) = env::var("SLACK_TOKEN") else {
            return Ok(None);
        };
        let channel = env::var("SLACK_CHANNEL").map_err(|_| AnalysisError::MissingChannel)?;
        Ok(Some(Self::new(token, channel)))
    }

    #[cfg(test)]
    fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Post one event notification.
    pub fn notify(
        &self,
        rule_name: &str,
        cam_name: &str,
        timestamp: u64,
    ) -> Result<(), AnalysisError> {
        let when = format_offset(timestamp);
        let detail =
            format!("*Rule Name:* {rule_name}\n*When:* {when}after origin\n*Camera Name:* {cam_name}");
        let body = json!({
            "channel": self.channel,
            "text": format!("*A new event has occurred:* \n{detail}"),
            "blocks": [
                {
                    "type": "section",
                    "text": { "type": "mrkdwn", "text": ":warning: *A new event has occurred:*" },
                },
                {
                    "type": "section",
                    "text": { "type": "mrkdwn", "text": detail },
                },
            ],
        });

        let response = self
            .client
            .post(format!("{}/chat.postMessage", self.api_base))
            .bearer_auth(&self.token)
            .json(&body)
            .send()?
            .error_for_status()?;

        // Slack reports API-level failures in the body with HTTP 200.
        let payload: serde_json::Value = response.json()?;
        if payload.get("ok").and_then(serde_json::Value::as_bool) != Some(true) {
            let error = payload
                .get("error")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown error");
            return Err(AnalysisError::SlackApi(error.to_string()));
        }

        debug!(channel = %self.channel, "posted event notification");
        Ok(())
    }
}

/// Render a nanosecond offset as `"H hours M minutes S seconds "`, wrapping
/// at 24 hours. Zero components are omitted.
pub fn format_offset(timestamp_ns: u64) -> String {
    let total = (timestamp_ns / 1_000_000_000) % (24 * 3600);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours} hours "));
    }
    if minutes > 0 {
        out.push_str(&format!("{minutes} minutes "));
    }
    if seconds > 0 {
        out.push_str(&format!("{seconds} seconds "));
    }
    out
}
