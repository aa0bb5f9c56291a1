// Thu Aug 27 2026 - Alex

use crate::diagram::DiagramStyle;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub model_file: PathBuf,
    pub style: DiagramStyle,
    pub emit_diagram: bool,
    pub emit_accessors: bool,
    pub honor_access: bool,
    pub dump_model: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub enable_verbose_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_file: PathBuf::from("register.yaml"),
            style: DiagramStyle::Comment,
            emit_diagram: true,
            emit_accessors: true,
            honor_access: false,
            dump_model: None,
            output_file: None,
            enable_verbose_output: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model_file(mut self, file: PathBuf) -> Self {
        self.model_file = file;
        self
    }

    pub fn with_style(mut self, style: DiagramStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_output_file(mut self, output: PathBuf) -> Self {
        self.output_file = Some(output);
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.emit_diagram && !self.emit_accessors && self.dump_model.is_none() {
            return Err(
                "Nothing to do: diagram, accessors and model dump are all disabled".to_string(),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_all_outputs_disabled_is_rejected() {
        let mut config = Config::default();
        config.emit_diagram = false;
        config.emit_accessors = false;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_dump_alone_is_enough() {
        let mut config = Config::default();
        config.emit_diagram = false;
        config.emit_accessors = false;
        config.dump_model = Some(PathBuf::from("model.json"));
        assert!(config.validate().is_ok());
    }
}
