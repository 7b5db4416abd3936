use anyhow::Result;

/// Ollama address used when `OLLAMA_HOST` is not set
pub const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";

/// Port assumed when `OLLAMA_HOST` names neither a scheme nor a port
pub const DEFAULT_OLLAMA_PORT: u16 = 11434;

/// Model used for both language detection and translation
pub const DEFAULT_MODEL: &str = "qwen3:0.6b";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Ollama
    pub ollama_host: String,
    pub model_name: String,
}

impl Config {
    pub fn new(ollama_host: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            ollama_host: normalize_host(&ollama_host.into()),
            model_name: model_name.into(),
        }
    }

    /// Never fails today; returns `Result` to match the other env-backed constructors.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(
            // Ollama - same variable the Ollama CLI reads
            non_empty_var("OLLAMA_HOST").unwrap_or_else(|| DEFAULT_OLLAMA_HOST.to_string()),
            non_empty_var("OLLAMA_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        ))
    }

    /// Full URL of the chat endpoint
    pub fn chat_url(&self) -> String {
        format!("{}/api/chat", self.ollama_host)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_OLLAMA_HOST, DEFAULT_MODEL)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Strip trailing slashes; a bare `host` or `host:port` gets `http://`, and the
/// Ollama port when none is given. Explicit schemes keep their own default port.
fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        return host.to_string();
    }

    let (authority, path) = match host.find('/') {
        Some(idx) => host.split_at(idx),
        None => (host, ""),
    };
    if has_port(authority) {
        format!("http://{}{}", authority, path)
    } else {
        format!("http://{}:{}{}", authority, DEFAULT_OLLAMA_PORT, path)
    }
}

/// `host:1234` or `[::1]:1234`
fn has_port(authority: &str) -> bool {
    match authority.rsplit_once(':') {
        Some((name, port)) => {
            !port.is_empty()
                && port.chars().all(|c| c.is_ascii_digit())
                && (!name.starts_with('[') || name.ends_with(']'))
        }
        None => false,
    }
}
