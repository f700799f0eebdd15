//! Named configuration presets.
//!
//! A profile is applied on top of the loaded configuration and only touches
//! the `[html]` keys it names.

use clap::ValueEnum;

use super::BuildConfiguration;

/// Selectable configuration preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Profile {
    /// The configuration as declared.
    #[default]
    Standard,
    /// Index pages, source links, engine credit and an English search index.
    Indexed,
    /// Versioned page title (`dobi v0.3-dev`) with the project name as short title.
    Titled,
}

impl Profile {
    /// Apply the preset to `config`.
    pub fn apply(self, config: &mut BuildConfiguration) {
        let html = &mut config.html;
        match self {
            Self::Standard => {}
            Self::Indexed => {
                html.domain_indices = Some(true);
                html.use_index = Some(true);
                html.split_index = Some(false);
                html.show_sourcelink = Some(true);
                html.show_engine_credit = Some(true);
                html.search_language = Some("en".into());
            }
            Self::Titled => {
                let project = &config.project;
                html.title = Some(format!("{} v{}", project.name, project.version));
                html.short_title = Some(project.name.clone());
            }
        }
    }
}
