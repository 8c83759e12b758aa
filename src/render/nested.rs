//! Nested markup: plain nested lists and navigation menus.

use tracing::instrument;

use crate::domain::{is_truthy, value_text, IdList, NodeId, Record, TreeResult};
use crate::engine::{Lineage, TreeEngine};
use crate::render::connector::Marks;
use crate::render::template::{Substitutions, Template};

/// `url` of nodes that have children or no url of their own.
pub const NOOP_URL: &str = "javascript:;";
/// Caret shown for menu nodes with children and no badge.
pub const CARET: &str = r#"<i class="fa fa-angle-left"></i>"#;

/// Nested-list and menu rendering request.
#[derive(Debug, Clone)]
pub struct NestedList {
    /// Item template; `@childlist` receives the wrapped children
    pub template: String,
    pub marks: Marks,
    /// Tag wrapping a node's children (default `ul`)
    pub wrap_tag: String,
    /// Attributes of the wrap tag; in menus `@class` here becomes `last`
    pub wrap_attr: String,
}

impl NestedList {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            marks: Marks::default(),
            wrap_tag: "ul".into(),
            wrap_attr: String::new(),
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

    pub fn wrap(mut self, tag: impl Into<String>, attr: impl Into<String>) -> Self {
        self.wrap_tag = tag.into();
        self.wrap_attr = attr.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Plain,
    Menu,
}

/// Parsed form of a [`NestedList`] request.
struct Nesting<'r> {
    item: Template,
    wrap_attr: Template,
    request: &'r NestedList,
    style: Style,
}

impl Nesting<'_> {
    fn wrap(&self, inner: &str) -> String {
        let attr = match self.style {
            Style::Plain => self.request.wrap_attr.clone(),
            Style::Menu => self
                .wrap_attr
                .render(&Substitutions::empty().with("class", "last")),
        };
        let tag = &self.request.wrap_tag;
        if attr.is_empty() {
            format!("<{tag}>{inner}</{tag}>")
        } else {
            format!("<{tag} {attr}>{inner}</{tag}>")
        }
    }
}

impl TreeEngine {
    /// Nested markup below `id`; each node's `@childlist` holds its wrapped children.
    #[instrument(level = "debug", skip(self, id, request))]
    pub fn nested_list(&self, id: impl Into<NodeId>, request: &NestedList) -> TreeResult<String> {
        self.render_nested(&id.into(), request, Style::Plain)
    }

    /// Nested navigation menu below `id`.
    ///
    /// Besides `@childlist`, `@selected` and `@disabled`, every item gets
    /// `@url`, `@addtabs`, `@caret`, `@badge` and `@class`. These computed
    /// values win over record fields of the same name.
    #[instrument(level = "debug", skip(self, id, request))]
    pub fn menu(&self, id: impl Into<NodeId>, request: &NestedList) -> TreeResult<String> {
        self.render_nested(&id.into(), request, Style::Menu)
    }

    fn render_nested(&self, id: &NodeId, request: &NestedList, style: Style) -> TreeResult<String> {
        let nesting = Nesting {
            item: Template::parse(&request.template),
            wrap_attr: Template::parse(&request.wrap_attr),
            request,
            style,
        };
        let mut lineage = Lineage::rooted_at(id);
        self.nested_level(id, &nesting, &mut lineage)
    }

    fn nested_level(
        &self,
        parent_id: &NodeId,
        nesting: &Nesting<'_>,
        lineage: &mut Lineage,
    ) -> TreeResult<String> {
        let marks = &nesting.request.marks;
        let mut out = String::new();

        for child in self.children_of(parent_id) {
            let Some(child_id) = child.id() else {
                continue;
            };
            lineage.enter(&child_id)?;

            let inner = self.nested_level(&child_id, nesting, lineage)?;
            let child_list = if inner.is_empty() {
                String::new()
            } else {
                nesting.wrap(&inner)
            };

            let selected = marks.selected(&child_id);
            let disabled = marks.disabled(&child_id);
            let fields = Substitutions::new(child)
                .with("selected", selected)
                .with("disabled", disabled)
                .with("childlist", child_list);
            let fields = match nesting.style {
                Style::Plain => fields,
                Style::Menu => menu_fields(fields, child, !inner.is_empty(), selected, disabled),
            };
            out.push_str(&nesting.item.render(&fields));

            lineage.leave();
        }
        Ok(out)
    }
}

fn menu_fields<'a>(
    fields: Substitutions<'a>,
    record: &'a Record,
    has_children: bool,
    selected: &str,
    disabled: &str,
) -> Substitutions<'a> {
    let own_url = record
        .get("url")
        .filter(|url| !url.is_null())
        .map(value_text);
    let (url, addtabs) = match own_url {
        Some(url) if !has_children => {
            let joiner = if url.contains('?') { "&" } else { "?" };
            let addtabs = format!("{joiner}ref=addtabs");
            (url, addtabs)
        }
        _ => (NOOP_URL.to_string(), String::new()),
    };

    let badge = record.get("badge");
    let caret = if has_children && !badge.is_some_and(is_truthy) {
        CARET
    } else {
        ""
    };

    let mut class = String::new();
    if !selected.is_empty() {
        class.push_str(" active");
    }
    if !disabled.is_empty() {
        class.push_str(" disabled");
    }
    if has_children {
        class.push_str(" treeview");
    }

    fields
        .with("url", url)
        .with("addtabs", addtabs)
        .with("caret", caret)
        .with("badge", badge.map(value_text).unwrap_or_default())
        .with("class", class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordSet;
    use serde_json::json;

    fn engine() -> TreeEngine {
        TreeEngine::new(
            RecordSet::from_value(json!([
                {"id": 1, "pid": 0, "name": "A", "url": "/a"},
                {"id": 2, "pid": 1, "name": "B", "url": "/b?x=1"},
                {"id": 3, "pid": 1, "name": "C"},
            ]))
            .unwrap(),
        )
    }

    #[test]
    fn test_nested_list_wraps_children() {
        let request = NestedList::new("<li>@name@childlist</li>");
        let out = engine().nested_list(0, &request).unwrap();
        assert_eq!(out, "<li>A<ul><li>B</li><li>C</li></ul></li>");
    }

    #[test]
    fn test_nested_list_wrap_attributes() {
        let request = NestedList::new("<li>@name@childlist</li>").wrap("ol", "class=\"sub\"");
        let out = engine().nested_list(1, &request).unwrap();
        assert_eq!(out, "<li>B</li><li>C</li>");
        let out = engine().nested_list(0, &request).unwrap();
        assert!(out.contains("<ol class=\"sub\"><li>B</li>"));
    }

    #[test]
    fn test_menu_computed_fields() {
        let request = NestedList::new("<li class=\"@class\"><a href=\"@url@addtabs\">@name@caret</a>@childlist</li>")
            .selected("2")
            .wrap("ul", "class=\"@class\"");
        let out = engine().menu(0, &request).unwrap();
        assert_eq!(
            out,
            "<li class=\" treeview\"><a href=\"javascript:;\">A<i class=\"fa fa-angle-left\"></i></a>\
             <ul class=\"last\">\
             <li class=\" active\"><a href=\"/b?x=1&ref=addtabs\">B</a></li>\
             <li class=\"\"><a href=\"javascript:;\">C</a></li>\
             </ul></li>"
        );
    }
}
