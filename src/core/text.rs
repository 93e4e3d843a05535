// src/core/text.rs
//
// Minimal chat-text component, serialised to the JSON shape the client
// expects inside lore entries.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Gray,
    Green,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Text {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub with: Vec<Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
}

impl Text {
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn translatable(key: impl Into<String>, args: Vec<Text>) -> Self {
        Self {
            translate: Some(key.into()),
            with: args,
            ..Default::default()
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = Some(true);
        self
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Serialising text component")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Parsing text component")
    }
}

// Plain rendering without a language file: translation keys are printed
// as-is, followed by their arguments.
impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = &self.text {
            f.write_str(text)?;
        }
        if let Some(key) = &self.translate {
            f.write_str(key)?;
            if !self.with.is_empty() {
                f.write_str(" [")?;
                for (i, arg) in self.with.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str("]")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translatable_json() {
        let t = Text::translatable("a.b", vec![]).color(Color::Gray).italic();
        assert_eq!(
            t.to_json().unwrap(),
            r#"{"translate":"a.b","color":"gray","italic":true}"#
        );
    }

    #[test]
    fn json_roundtrip_keeps_args() {
        let t = Text::translatable("k", vec![Text::literal("Plains")]);
        let back = Text::from_json(&t.to_json().unwrap()).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn display_with_args() {
        let t = Text::translatable(
            "pos",
            vec![Text::literal("1"), Text::literal("2")],
        );
        assert_eq!(t.to_string(), "pos [1, 2]");
    }
}
