//! Flat, visually indented renderings: option lists and dual-template lists.

use itertools::Itertools;
use tracing::instrument;

use crate::domain::{IdList, NodeId, TreeResult};
use crate::engine::{Lineage, TreeEngine};
use crate::render::connector::{is_last, Connector, Marks};
use crate::render::template::{Substitutions, Template};

pub const DEFAULT_OPTION_TEMPLATE: &str =
    "<option value=@id @selected @disabled>@spacer@name</option>";

/// Option-list rendering request.
#[derive(Debug, Clone)]
pub struct OptionList {
    pub template: String,
    /// Used instead of `template` for top-level nodes and nodes with children
    pub top_template: Option<String>,
    pub marks: Marks,
    /// Prefix seed; empty means top-level nodes get no connector
    pub prefix: String,
}

impl Default for OptionList {
    fn default() -> Self {
        Self::new(DEFAULT_OPTION_TEMPLATE)
    }
}

impl OptionList {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            top_template: None,
            marks: Marks::default(),
            prefix: String::new(),
        }
    }

    pub fn top_template(mut self, template: impl Into<String>) -> Self {
        self.top_template = Some(template.into()).filter(|t| !t.is_empty());
        self
    }

    pub fn selected(mut self, ids: impl Into<IdList>) -> Self {
        self.marks.selected = ids.into();
        self
    }

    pub fn disabled(mut self, ids: impl Into<IdList>) -> Self {
        self.marks.disabled = ids.into();
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

/// Rendering request choosing one of two templates per node.
#[derive(Debug, Clone)]
pub struct DualList {
    /// Template for nodes that are not disabled
    pub enabled_template: String,
    /// Template for disabled nodes
    pub disabled_template: String,
    pub marks: Marks,
    pub prefix: String,
}

impl DualList {
    pub fn new(enabled_template: impl Into<String>, disabled_template: impl Into<String>) -> Self {
        Self {
            enabled_template: enabled_template.into(),
            disabled_template: disabled_template.into(),
            marks: Marks::default(),
            prefix: String::new(),
        }
    }

    pub fn selected(mut self, ids: impl Into<IdList>) -> Self {
        self.marks.selected = ids.into();
        self
    }

    pub fn disabled(mut self, ids: impl Into<IdList>) -> Self {
        self.marks.disabled = ids.into();
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

/// Template policy shared by the two flat renderers.
enum Choice {
    TopOrItem { item: Template, top: Option<Template> },
    EnabledOrDisabled { enabled: Template, disabled: Template },
}

impl TreeEngine {
    /// One fragment per node below `id`, depth-first, with `@spacer`,
    /// `@selected` and `@disabled` computed.
    #[instrument(level = "debug", skip(self, id, request))]
    pub fn option_list(&self, id: impl Into<NodeId>, request: &OptionList) -> TreeResult<String> {
        let choice = Choice::TopOrItem {
            item: Template::parse(&request.template),
            top: request.top_template.as_deref().map(Template::parse),
        };
        self.render_flat(&id.into(), &choice, &request.marks, &request.prefix)
    }

    /// Like [`TreeEngine::option_list`], but disabled nodes use a different template.
    #[instrument(level = "debug", skip(self, id, request))]
    pub fn dual_list(&self, id: impl Into<NodeId>, request: &DualList) -> TreeResult<String> {
        let choice = Choice::EnabledOrDisabled {
            enabled: Template::parse(&request.enabled_template),
            disabled: Template::parse(&request.disabled_template),
        };
        self.render_flat(&id.into(), &choice, &request.marks, &request.prefix)
    }

    fn render_flat(
        &self,
        id: &NodeId,
        choice: &Choice,
        marks: &Marks,
        prefix: &str,
    ) -> TreeResult<String> {
        let mut lineage = Lineage::rooted_at(id);
        self.flat_level(id, choice, marks, prefix, &mut lineage)
    }

    fn flat_level(
        &self,
        parent_id: &NodeId,
        choice: &Choice,
        marks: &Marks,
        prefix: &str,
        lineage: &mut Lineage,
    ) -> TreeResult<String> {
        let connector = Connector::new(&self.config.icons, &self.config.nbsp);
        let mut out = String::new();

        for (position, child) in self.children_of(parent_id).into_iter().with_position() {
            let Some(child_id) = child.id() else {
                continue;
            };
            lineage.enter(&child_id)?;

            let step = connector.step(prefix, is_last(position));
            let disabled = marks.disabled(&child_id);
            let fields = Substitutions::new(child)
                .with("selected", marks.selected(&child_id))
                .with("disabled", disabled)
                .with("spacer", step.spacer.as_str());

            let template = match choice {
                Choice::TopOrItem { item, top } => {
                    let is_top = child
                        .parent_id(self.pid_name())
                        .is_some_and(|pid| pid.is_root());
                    match top {
                        Some(top) if is_top || self.has_children(&child_id) => top,
                        _ => item,
                    }
                }
                Choice::EnabledOrDisabled { enabled, disabled: tpl } => {
                    if disabled.is_empty() {
                        enabled
                    } else {
                        tpl
                    }
                }
            };
            out.push_str(&template.render(&fields));
            out.push_str(&self.flat_level(&child_id, choice, marks, &step.child_prefix, lineage)?);

            lineage.leave();
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordSet;
    use serde_json::json;

    fn engine() -> TreeEngine {
        TreeEngine::new(
            RecordSet::from_value(json!([
                {"id": 1, "pid": 0, "name": "A"},
                {"id": 2, "pid": 1, "name": "B"},
                {"id": 3, "pid": 1, "name": "C"},
            ]))
            .unwrap(),
        )
    }

    #[test]
    fn test_option_list_connectors() {
        let request = OptionList::new("<option value=@id @selected>@spacer@name</option>");
        let out = engine().option_list(0, &request).unwrap();
        assert_eq!(
            out,
            "<option value=1 >A</option>\
             <option value=2 >&nbsp;├B</option>\
             <option value=3 >&nbsp;└C</option>"
        );
    }

    #[test]
    fn test_top_template_for_roots_and_parents() {
        let request = OptionList::new("[@name]").top_template("<@name>");
        let out = engine().option_list(0, &request).unwrap();
        assert_eq!(out, "<A>[B][C]");
    }

    #[test]
    fn test_dual_list_switches_on_disabled() {
        let request = DualList::new("+@name", "-@name").disabled("2");
        let out = engine().dual_list(0, &request).unwrap();
        assert_eq!(out, "+A-B+C");
    }
}
