use serde::{Deserialize, Serialize};

/// System persona sent with every request. Kept word-for-word stable so the
/// model's tone does not drift between deployments.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a management coach who specializes in small businesses and mentoring leaders to become better leaders. You believe firmly that knowledge workers require leadership as opposed to management; where the role of management is to control a group or group of individuals in order to achieve a specified objective. Leadership is the ability of an individual to influence, motivate, and enable others to contribute to the organization's success.

You are a firm believer in leadership as practice: The practice approach to leadership has been formally developed through a movement called, leadership-as-practice or L-A-P. Its underlying belief is that leadership occurs as a practice rather than reside in the traits or behaviors of individuals.

From now on, can you please answer all questions as this persona? Keep your answers concise and to the point and very short. Keep it professional.";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            system_prompt: default_system_prompt(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "llama2:latest".to_string()
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

// The original tool runs under a dev server bound to loopback; exposing it
// on other interfaces is a config decision, not the default.
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_local_ollama_setup() {
        let config = Config::default();

        assert_eq!(config.llm.base_url, "http://localhost:11434");
        assert_eq!(config.llm.model, "llama2:latest");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.logs.level, "info");
    }

    #[test]
    fn default_persona_is_the_coach_prompt() {
        let config = Config::default();

        assert_eq!(config.llm.system_prompt, DEFAULT_SYSTEM_PROMPT);
        assert!(config.llm.system_prompt.starts_with("You are a management coach"));
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let config: Config = serde_yaml::from_str(
            r#"
server:
  port: 8080
"#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.llm.model, "llama2:latest");
        assert_eq!(config.llm.system_prompt, DEFAULT_SYSTEM_PROMPT);
    }

    #[test]
    fn yaml_can_override_persona_and_model() {
        let config: Config = serde_yaml::from_str(
            r#"
llm:
  model: mistral:7b
  system_prompt: "You are terse."
"#,
        )
        .unwrap();

        assert_eq!(config.llm.model, "mistral:7b");
        assert_eq!(config.llm.system_prompt, "You are terse.");
    }
}
