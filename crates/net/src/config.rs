use std::env;

pub struct ServerConfig {
    pub tittle: String,
    pub bind_addr: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".to_string());

        Self {
            tittle: "Instagram Clone API".to_string(),
            bind_addr,
        }
    }
}
