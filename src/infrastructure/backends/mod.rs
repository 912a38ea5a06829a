pub mod gemini;
pub mod ollama;

use anyhow::bail;
use anyhow::Result;

use crate::domain::models::BackendBox;
use crate::domain::models::BackendName;

pub struct BackendManager {}

impl BackendManager {
    pub fn get(name: &str) -> Result<BackendBox> {
        match BackendName::parse(name) {
            Some(BackendName::Gemini) => return Ok(Box::<gemini::Gemini>::default()),
            Some(BackendName::Ollama) => return Ok(Box::<ollama::Ollama>::default()),
            None => bail!(format!("No backend implemented for {name}")),
        }
    }
}
