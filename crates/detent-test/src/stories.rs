//! Story catalog: named slider configurations for interaction tests.

use crate::harness::Harness;
use detent_core::ElementId;
use detent_widgets::{ConfigError, SliderError, SliderProps};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Catalog shipped with this crate.
const BUILTIN: &str = include_str!("../stories/slider.yaml");

/// How a story's slider is hosted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    /// The host stores every requested value and feeds it back
    Controlled,
    /// The slider sits in a form and owns its value
    Form,
}

/// One named configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Story {
    /// Hosting template
    pub template: Template,
    /// Slider props
    #[serde(default)]
    pub args: SliderProps,
}

impl Story {
    /// Mount this story's slider into a fresh harness.
    pub fn mount(&self) -> Result<(Harness, ElementId), SliderError> {
        let mut harness = Harness::new().feed_back(self.template == Template::Controlled);
        let id = harness.mount(self.args.clone())?;
        Ok((harness, id))
    }
}

/// A titled set of stories, ordered by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoryCatalog {
    /// Catalog title
    pub title: String,
    /// Stories by name
    pub stories: BTreeMap<String, Story>,
}

impl StoryCatalog {
    /// Parse a catalog, validating every story's props.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let catalog: Self = serde_yaml_ng::from_str(yaml)?;
        for (name, story) in &catalog.stories {
            if let Err(err) = story.args.range() {
                tracing::warn!(story = %name, %err, "invalid story");
                return Err(err.into());
            }
        }
        Ok(catalog)
    }

    /// The slider stories shipped with this crate.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_yaml(BUILTIN)
    }

    /// Look up a story by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Story> {
        self.stories.get(name)
    }

    /// Story names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stories.keys().map(String::as_str)
    }
}
