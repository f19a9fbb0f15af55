//! Capability detection.
//!
//! Optional controls are looked up once when the page initializes. Handlers
//! ask the resulting set instead of null-checking the document each time.

use std::collections::HashSet;

use tabledom::Document;

use crate::config::PageConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// "Select all matching" control. Selection handling requires it.
    SelectAll,
    /// "Select all on this page" control.
    SelectAllPage,
    /// Live selected-count display.
    Count,
    /// Bulk-action control.
    ActionMenu,
    /// Filter form submitted by auto-submit controls.
    FilterForm,
    /// Results region refreshed by filters and triggers.
    Results,
}

impl Feature {
    pub const ALL: [Feature; 6] = [
        Feature::SelectAll,
        Feature::SelectAllPage,
        Feature::Count,
        Feature::ActionMenu,
        Feature::FilterForm,
        Feature::Results,
    ];

    fn anchor<'a>(&self, config: &'a PageConfig) -> &'a str {
        match self {
            Self::SelectAll => &config.select_all_id,
            Self::SelectAllPage => &config.select_all_page_id,
            Self::Count => &config.count_id,
            Self::ActionMenu => &config.action_menu_id,
            Self::FilterForm => &config.filter_form_id,
            Self::Results => &config.results_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Features {
    enabled: HashSet<Feature>,
}

impl Features {
    pub fn none() -> Self {
        Self::default()
    }

    /// Enable every feature whose anchor element is present in `doc`.
    pub fn detect(doc: &Document, config: &PageConfig) -> Self {
        let enabled: HashSet<Feature> = Feature::ALL
            .into_iter()
            .filter(|f| doc.contains(f.anchor(config)))
            .collect();
        for feature in Feature::ALL {
            if !enabled.contains(&feature) {
                log::debug!(
                    "[features] {feature:?} not present (#{} missing)",
                    feature.anchor(config)
                );
            }
        }
        Self { enabled }
    }

    pub fn has(&self, feature: Feature) -> bool {
        self.enabled.contains(&feature)
    }

    pub fn with(mut self, feature: Feature) -> Self {
        self.enabled.insert(feature);
        self
    }

    pub fn len(&self) -> usize {
        self.enabled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }
}
