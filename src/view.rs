//! Host page model and the directory's handle onto it.
//!
//! `Document` is a minimal element tree standing in for the browser page:
//! elements addressable by id, inner content, form values, select options
//! and a display toggle. `DirectoryView` is built once over a document and
//! owns every element the directory manages, creating the show-more
//! wrapper and button on demand right after the grid.

use crate::filter::DirectoryFilter;
use crate::render::{escape_html, Affordance, SHOW_MORE_LABEL};

pub const GRID_ID: &str = "staffGrid";
pub const QUERY_INPUT_ID: &str = "q";
pub const SPECIALTY_SELECT_ID: &str = "filtroEspecialidad";
pub const AFFORDANCE_WRAP_ID: &str = "staffVerMasWrap";
pub const AFFORDANCE_BUTTON_ID: &str = "btnVerMas";

pub const ALL_SPECIALTIES_LABEL: &str = "Todas las especialidades";

// ═══════════════════════════════════════════
// Document model
// ═══════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    /// Block container; `content` is raw inner HTML.
    Container,
    /// Text input; `value` holds what the user typed.
    TextInput,
    /// Dropdown; `value` is the selected option's value.
    Select,
    /// Button; `content` is its text label.
    Button,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: String,
    pub kind: ElementKind,
    pub class: String,
    pub content: String,
    pub value: String,
    pub options: Vec<SelectOption>,
    /// `display: none` when set. The element stays in the tree.
    pub hidden: bool,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(kind: ElementKind, id: &str, class: &str) -> Self {
        Self {
            id: id.to_string(),
            kind,
            class: class.to_string(),
            content: String::new(),
            value: String::new(),
            options: Vec::new(),
            hidden: false,
            children: Vec::new(),
        }
    }

    fn find(&self, id: &str) -> Option<&Element> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }

    fn write_html(&self, out: &mut String) {
        let tag = match self.kind {
            ElementKind::Container => "div",
            ElementKind::TextInput => "input",
            ElementKind::Select => "select",
            ElementKind::Button => "button",
        };
        out.push_str(&format!("<{tag} id=\"{}\"", escape_html(&self.id)));
        if !self.class.is_empty() {
            out.push_str(&format!(" class=\"{}\"", escape_html(&self.class)));
        }
        if self.hidden {
            out.push_str(" style=\"display: none\"");
        }

        match self.kind {
            ElementKind::TextInput => {
                out.push_str(&format!(
                    " type=\"search\" value=\"{}\">",
                    escape_html(&self.value)
                ));
                return;
            }
            ElementKind::Select => {
                out.push('>');
                for opt in &self.options {
                    let selected = if opt.value == self.value { " selected" } else { "" };
                    out.push_str(&format!(
                        "<option value=\"{}\"{selected}>{}</option>",
                        escape_html(&opt.value),
                        escape_html(&opt.label)
                    ));
                }
            }
            ElementKind::Container => {
                out.push('>');
                out.push_str(&self.content);
            }
            ElementKind::Button => {
                out.push('>');
                out.push_str(&escape_html(&self.content));
            }
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str(&format!("</{tag}>"));
    }
}

/// Page element tree. `scrolled_into_view` holds the id of the element
/// most recently scrolled into view (smooth, top edge aligned).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub elements: Vec<Element>,
    pub scrolled_into_view: Option<String>,
}

fn find_in<'a>(elements: &'a [Element], id: &str) -> Option<&'a Element> {
    elements.iter().find_map(|e| e.find(id))
}

fn find_in_mut<'a>(elements: &'a mut [Element], id: &str) -> Option<&'a mut Element> {
    elements.iter_mut().find_map(|e| e.find_mut(id))
}

fn insert_after_in(elements: &mut Vec<Element>, anchor_id: &str, element: Element) -> Option<Element> {
    if let Some(pos) = elements.iter().position(|e| e.id == anchor_id) {
        elements.insert(pos + 1, element);
        return None;
    }
    let mut pending = element;
    for e in elements.iter_mut() {
        match insert_after_in(&mut e.children, anchor_id, pending) {
            None => return None,
            Some(back) => pending = back,
        }
    }
    Some(pending)
}

impl Document {
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            elements,
            scrolled_into_view: None,
        }
    }

    /// The directory page skeleton: query box, specialty select and grid.
    pub fn staff_page() -> Self {
        Self::new(vec![
            Element::new(ElementKind::TextInput, QUERY_INPUT_ID, "form-control"),
            Element::new(ElementKind::Select, SPECIALTY_SELECT_ID, "form-select"),
            Element::new(ElementKind::Container, GRID_ID, "row g-3"),
        ])
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        find_in(&self.elements, id)
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_in_mut(&mut self.elements, id)
    }

    /// Insert `element` as the next sibling of `anchor_id`. Returns false
    /// when the anchor is not in the document.
    pub fn insert_after(&mut self, anchor_id: &str, element: Element) -> bool {
        insert_after_in(&mut self.elements, anchor_id, element).is_none()
    }

    /// Ids of the top-level elements in document order.
    pub fn top_level_ids(&self) -> Vec<&str> {
        self.elements.iter().map(|e| e.id.as_str()).collect()
    }

    /// Set a form control's value the way a user would. Selects only take
    /// values they offer; anything else selects nothing.
    pub fn set_value(&mut self, id: &str, value: &str) -> bool {
        let Some(el) = self.get_element_by_id_mut(id) else {
            return false;
        };
        el.value = match el.kind {
            ElementKind::Select if !el.options.iter().any(|o| o.value == value) => String::new(),
            _ => value.to_string(),
        };
        true
    }

    /// Smoothly scroll `id` so its top edge meets the viewport top.
    pub fn scroll_into_view(&mut self, id: &str) {
        if self.get_element_by_id(id).is_some() {
            self.scrolled_into_view = Some(id.to_string());
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for el in &self.elements {
            el.write_html(&mut out);
            out.push('\n');
        }
        out
    }
}

// ═══════════════════════════════════════════
// DirectoryView
// ═══════════════════════════════════════════

/// The directory's handle on its page. Missing inputs read as empty;
/// a missing grid turns every render into a no-op.
#[derive(Debug, Clone)]
pub struct DirectoryView {
    document: Document,
}

impl DirectoryView {
    pub fn attach(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn has_grid(&self) -> bool {
        self.document.get_element_by_id(GRID_ID).is_some()
    }

    pub fn query(&self) -> &str {
        self.document
            .get_element_by_id(QUERY_INPUT_ID)
            .map(|e| e.value.as_str())
            .unwrap_or("")
    }

    pub fn specialty(&self) -> &str {
        self.document
            .get_element_by_id(SPECIALTY_SELECT_ID)
            .map(|e| e.value.as_str())
            .unwrap_or("")
    }

    pub fn filter(&self) -> DirectoryFilter {
        DirectoryFilter::new(self.query(), self.specialty())
    }

    /// Record text typed into the query box.
    pub fn type_query(&mut self, text: &str) -> bool {
        self.document.set_value(QUERY_INPUT_ID, text)
    }

    /// Record a specialty picked in the dropdown.
    pub fn select_specialty(&mut self, value: &str) -> bool {
        self.document.set_value(SPECIALTY_SELECT_ID, value)
    }

    /// Rebuild the dropdown: an "all" sentinel with an empty value, then one
    /// option per specialty in list order.
    pub fn populate_specialties(&mut self, specialties: &[&str]) {
        let Some(select) = self.document.get_element_by_id_mut(SPECIALTY_SELECT_ID) else {
            return;
        };
        select.options.clear();
        select.options.push(SelectOption {
            value: String::new(),
            label: ALL_SPECIALTIES_LABEL.to_string(),
        });
        select.options.extend(specialties.iter().map(|s| SelectOption {
            value: s.to_string(),
            label: s.to_string(),
        }));
        select.value.clear();
    }

    /// Replace the grid's content.
    pub fn show_grid(&mut self, html: String) {
        if let Some(grid) = self.document.get_element_by_id_mut(GRID_ID) {
            grid.content = html;
        }
    }

    pub fn has_affordance(&self) -> bool {
        self.document.get_element_by_id(AFFORDANCE_BUTTON_ID).is_some()
    }

    /// Make sure the wrapper sits right after the grid and holds the button.
    /// Creates only what is missing; returns false when there is no grid to
    /// attach to.
    pub fn ensure_affordance(&mut self) -> bool {
        if self.document.get_element_by_id(AFFORDANCE_WRAP_ID).is_none() {
            let wrap = Element::new(
                ElementKind::Container,
                AFFORDANCE_WRAP_ID,
                "d-grid justify-content-center mt-3",
            );
            if !self.document.insert_after(GRID_ID, wrap) {
                return false;
            }
        }

        if self.document.get_element_by_id(AFFORDANCE_BUTTON_ID).is_none() {
            let mut button = Element::new(
                ElementKind::Button,
                AFFORDANCE_BUTTON_ID,
                "btn btn-outline-primary border-2 rounded-pill fw-semibold px-4",
            );
            button.content = SHOW_MORE_LABEL.to_string();
            if let Some(wrap) = self.document.get_element_by_id_mut(AFFORDANCE_WRAP_ID) {
                wrap.content.clear();
                wrap.children = vec![button];
            }
        }
        true
    }

    /// Show or hide the control. A hidden control keeps its last label.
    pub fn set_affordance(&mut self, affordance: Affordance) {
        if !self.ensure_affordance() {
            return;
        }
        if let Some(wrap) = self.document.get_element_by_id_mut(AFFORDANCE_WRAP_ID) {
            wrap.hidden = affordance == Affordance::Hidden;
        }
        if let Affordance::Shown { label } = affordance {
            if let Some(button) = self.document.get_element_by_id_mut(AFFORDANCE_BUTTON_ID) {
                button.content = label.to_string();
            }
        }
    }

    pub fn affordance_visible(&self) -> bool {
        self.document
            .get_element_by_id(AFFORDANCE_WRAP_ID)
            .is_some_and(|w| !w.hidden)
    }

    pub fn affordance_label(&self) -> Option<&str> {
        self.document
            .get_element_by_id(AFFORDANCE_BUTTON_ID)
            .map(|b| b.content.as_str())
    }

    pub fn scroll_grid_into_view(&mut self) {
        self.document.scroll_into_view(GRID_ID);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::SHOW_LESS_LABEL;

    #[test]
    fn staff_page_has_managed_elements() {
        let doc = Document::staff_page();
        assert!(doc.get_element_by_id(GRID_ID).is_some());
        assert!(doc.get_element_by_id(QUERY_INPUT_ID).is_some());
        assert!(doc.get_element_by_id(SPECIALTY_SELECT_ID).is_some());
        assert!(doc.get_element_by_id(AFFORDANCE_WRAP_ID).is_none());
    }

    #[test]
    fn ensure_affordance_inserts_after_grid_once() {
        let mut doc = Document::staff_page();
        doc.elements
            .push(Element::new(ElementKind::Container, "footer", ""));
        let mut view = DirectoryView::attach(doc);

        assert!(view.ensure_affordance());
        assert!(view.ensure_affordance());

        let ids = view.document().top_level_ids();
        assert_eq!(
            ids,
            vec![QUERY_INPUT_ID, SPECIALTY_SELECT_ID, GRID_ID, AFFORDANCE_WRAP_ID, "footer"]
        );
        let wrap = view.document().get_element_by_id(AFFORDANCE_WRAP_ID).unwrap();
        assert_eq!(wrap.children.len(), 1);
        assert_eq!(view.affordance_label(), Some(SHOW_MORE_LABEL));
    }

    #[test]
    fn ensure_affordance_refills_existing_wrapper() {
        let mut doc = Document::staff_page();
        let mut wrap = Element::new(ElementKind::Container, AFFORDANCE_WRAP_ID, "");
        wrap.content = "stale".into();
        doc.insert_after(GRID_ID, wrap);
        let mut view = DirectoryView::attach(doc);

        assert!(view.ensure_affordance());
        let wrap = view.document().get_element_by_id(AFFORDANCE_WRAP_ID).unwrap();
        assert!(wrap.content.is_empty());
        assert!(view.has_affordance());
        assert_eq!(
            view.document()
                .top_level_ids()
                .iter()
                .filter(|id| **id == AFFORDANCE_WRAP_ID)
                .count(),
            1
        );
    }

    #[test]
    fn ensure_affordance_needs_grid() {
        let doc = Document::new(vec![Element::new(ElementKind::TextInput, QUERY_INPUT_ID, "")]);
        let mut view = DirectoryView::attach(doc);
        assert!(!view.ensure_affordance());
        assert!(!view.has_affordance());
    }

    #[test]
    fn hidden_affordance_stays_in_document() {
        let mut view = DirectoryView::attach(Document::staff_page());
        view.set_affordance(Affordance::Shown {
            label: SHOW_LESS_LABEL,
        });
        assert!(view.affordance_visible());

        view.set_affordance(Affordance::Hidden);
        assert!(!view.affordance_visible());
        assert!(view.has_affordance());
        assert_eq!(view.affordance_label(), Some(SHOW_LESS_LABEL));
        assert!(view.document().to_html().contains("style=\"display: none\""));
    }

    #[test]
    fn populate_specialties_rebuilds_options() {
        let mut view = DirectoryView::attach(Document::staff_page());
        view.populate_specialties(&["Cardiología", "Pediatría"]);
        view.populate_specialties(&["Neurología", "Dermatología"]);

        let select = view.document().get_element_by_id(SPECIALTY_SELECT_ID).unwrap();
        let labels: Vec<&str> = select.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec![ALL_SPECIALTIES_LABEL, "Neurología", "Dermatología"]);
        assert_eq!(select.options[0].value, "");
        assert!(select.options[1..].iter().all(|o| o.value == o.label));
        assert_eq!(view.specialty(), "");
    }

    #[test]
    fn select_rejects_unknown_values() {
        let mut view = DirectoryView::attach(Document::staff_page());
        view.populate_specialties(&["Pediatría"]);

        view.select_specialty("Pediatría");
        assert_eq!(view.specialty(), "Pediatría");
        view.select_specialty("Odontología");
        assert_eq!(view.specialty(), "");
    }

    #[test]
    fn missing_inputs_read_empty() {
        let doc = Document::new(vec![Element::new(ElementKind::Container, GRID_ID, "")]);
        let mut view = DirectoryView::attach(doc);
        assert!(!view.type_query("sosa"));
        assert_eq!(view.filter(), DirectoryFilter::default());
    }

    #[test]
    fn scroll_targets_grid() {
        let mut view = DirectoryView::attach(Document::staff_page());
        assert_eq!(view.document().scrolled_into_view, None);
        view.scroll_grid_into_view();
        view.scroll_grid_into_view();
        assert_eq!(view.document().scrolled_into_view.as_deref(), Some(GRID_ID));
    }

    #[test]
    fn scroll_to_missing_element_is_ignored() {
        let mut doc = Document::staff_page();
        doc.scroll_into_view("missing");
        assert_eq!(doc.scrolled_into_view, None);
    }

    #[test]
    fn nested_anchor_insert() {
        let mut outer = Element::new(ElementKind::Container, "main", "");
        outer
            .children
            .push(Element::new(ElementKind::Container, GRID_ID, ""));
        let mut doc = Document::new(vec![outer]);

        assert!(doc.insert_after(GRID_ID, Element::new(ElementKind::Container, "next", "")));
        let main = doc.get_element_by_id("main").unwrap();
        let ids: Vec<&str> = main.children.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec![GRID_ID, "next"]);
        assert!(!doc.insert_after("missing", Element::new(ElementKind::Container, "x", "")));
    }

    #[test]
    fn html_escapes_input_value() {
        let mut doc = Document::staff_page();
        doc.set_value(QUERY_INPUT_ID, "\"><script>");
        let html = doc.to_html();
        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;\""));
    }
}
