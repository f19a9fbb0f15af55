//! Filter controls that refresh the results.

use tabledom::Document;
use tabledom::query::collect_ids;

use crate::config::PageConfig;
use crate::context::PageContext;
use crate::features::Feature;
use crate::remote::Method;

/// Reacts to filter value changes, either by submitting the filter form or
/// by refetching only the results region.
#[derive(Debug, Default)]
pub struct FilterRefreshController;

impl FilterRefreshController {
    pub fn new() -> Self {
        Self
    }

    /// Controls that submit the whole filter form on change.
    pub fn auto_submit_controls(doc: &Document, config: &PageConfig) -> Vec<String> {
        doc.ids_by_class(&config.auto_submit_class)
    }

    /// Filter groups that refetch the results in place on change.
    pub fn scoped_groups(doc: &Document, config: &PageConfig) -> Vec<String> {
        collect_ids(doc.body(), |el| {
            config.filter_group_classes.iter().all(|c| el.has_class(c))
        })
    }

    /// An auto-submit control changed.
    pub fn on_auto_submit_change(&self, cx: &mut PageContext) {
        if !cx.features.has(Feature::FilterForm) {
            log::debug!("[filter] no filter form to submit");
            return;
        }
        log::debug!("[filter] submit #{}", cx.config.filter_form_id);
        cx.navigator.submit(&cx.config.filter_form_id);
    }

    /// A control inside a scoped filter group changed. The group's trailing
    /// child is the request source, so the server sees which filter moved.
    pub fn on_group_change(&self, cx: &mut PageContext, group: &str) {
        let Some(source) = cx.doc.last_child(group).map(|el| el.id.clone()) else {
            log::debug!("[filter] group #{group} has no controls");
            return;
        };
        let results = cx.config.results_id.clone();
        let values = cx.doc.form_values(&source);
        cx.fetch(Method::Get, "", &source, &results, values);
    }
}
