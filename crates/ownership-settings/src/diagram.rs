use crate::model::DiagramConfig;
use ownership_render::DiagramConfiguration;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    LeftToRight,
    TopToBottom,
}

impl Direction {
    fn as_str(self) -> &'static str {
        match self {
            Direction::LeftToRight => "left to right",
            Direction::TopToBottom => "top to bottom",
        }
    }
}

/// Resolved global diagram settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagramSettings {
    pub title: Option<String>,
    pub direction: Direction,
    pub simple_names: bool,
    pub skinparams: BTreeMap<String, String>,
}

impl Default for DiagramSettings {
    fn default() -> Self {
        Self {
            title: None,
            direction: Direction::default(),
            simple_names: true,
            skinparams: BTreeMap::new(),
        }
    }
}

impl DiagramSettings {
    pub fn from_config(cfg: &DiagramConfig) -> anyhow::Result<Self> {
        let direction = match cfg.direction.as_deref() {
            Some(v) => parse_direction(v)?,
            None => Direction::default(),
        };
        if let Some(title) = &cfg.title {
            single_line("title", title)?;
        }
        for (name, value) in &cfg.skinparams {
            single_line("skinparam name", name)?;
            single_line(&format!("skinparam {name}"), value)?;
        }
        Ok(Self {
            title: cfg.title.clone().filter(|t| !t.trim().is_empty()),
            direction,
            simple_names: cfg.simple_names.unwrap_or(true),
            skinparams: cfg.skinparams.clone(),
        })
    }
}

impl DiagramConfiguration for DiagramSettings {
    fn render(&self) -> String {
        let mut out = String::new();
        if let Some(title) = &self.title {
            out.push_str(&format!("title {title}\n"));
        }
        out.push_str(&format!("{} direction\n", self.direction.as_str()));
        for (name, value) in &self.skinparams {
            out.push_str(&format!("skinparam {name} {value}\n"));
        }
        out
    }
}

/// Each setting renders as one diagram line.
fn single_line(what: &str, value: &str) -> anyhow::Result<()> {
    if value.contains(['\n', '\r']) {
        anyhow::bail!("{what} must be a single line: {value:?}");
    }
    Ok(())
}

fn parse_direction(v: &str) -> anyhow::Result<Direction> {
    match v {
        "left to right" | "left-to-right" | "lr" => Ok(Direction::LeftToRight),
        "top to bottom" | "top-to-bottom" | "tb" => Ok(Direction::TopToBottom),
        other => anyhow::bail!(
            "unknown direction: {other} (expected 'left to right' or 'top to bottom')"
        ),
    }
}
