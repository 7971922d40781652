//! Staff directory page controller.
//!
//! Owns the storage slot, the page view and the expand flag. Every event
//! ends in a full re-render from storage: read, filter, render, replace
//! the grid, update the show-more control.

use crate::db::{DatabaseError, KeyValueStore};
use crate::render::{render_directory, DirectoryRender};
use crate::seed::SPECIALTIES;
use crate::storage;
use crate::view::{DirectoryView, Document};

/// Page events the directory reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// Page finished loading.
    Ready,
    /// Query box content changed to the given text.
    QueryInput(String),
    /// Specialty dropdown changed to the given value.
    SpecialtyChange(String),
    /// Show-more / show-less control clicked.
    AffordanceClick,
}

/// Per-page view state. Not persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub expanded: bool,
}

pub struct DirectoryPage<S: KeyValueStore> {
    store: S,
    view: DirectoryView,
    state: ViewState,
}

impl<S: KeyValueStore> DirectoryPage<S> {
    pub fn new(store: S, document: Document) -> Self {
        Self {
            store,
            view: DirectoryView::attach(document),
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn view(&self) -> &DirectoryView {
        &self.view
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_parts(self) -> (S, Document) {
        (self.store, self.view.into_document())
    }

    /// Dispatch one page event.
    pub fn handle(&mut self, event: PageEvent) -> Result<(), DatabaseError> {
        tracing::debug!(?event, "Directory event");
        match event {
            PageEvent::Ready => self.load()?,
            PageEvent::QueryInput(text) => self.on_query_input(&text),
            PageEvent::SpecialtyChange(value) => self.on_specialty_change(&value),
            PageEvent::AffordanceClick => self.on_affordance_click(),
        }
        Ok(())
    }

    /// Seed storage if empty, fill the specialty dropdown, collapse and render.
    pub fn load(&mut self) -> Result<(), DatabaseError> {
        storage::ensure_seed(&mut self.store)?;
        self.view.populate_specialties(SPECIALTIES);
        self.state.expanded = false;
        self.render();
        Ok(())
    }

    pub fn on_query_input(&mut self, text: &str) {
        self.view.type_query(text);
        self.state.expanded = false;
        self.render();
    }

    pub fn on_specialty_change(&mut self, value: &str) {
        self.view.select_specialty(value);
        self.state.expanded = false;
        self.render();
    }

    /// Toggle expand, re-render, then bring the grid back into view.
    /// Ignored until the control exists.
    pub fn on_affordance_click(&mut self) {
        if !self.view.has_affordance() {
            return;
        }
        self.state.expanded = !self.state.expanded;
        self.render();
        self.view.scroll_grid_into_view();
    }

    /// Re-render the grid from storage. `None` when the page has no grid.
    pub fn render(&mut self) -> Option<DirectoryRender> {
        if !self.view.has_grid() {
            return None;
        }

        let profiles = storage::read_all(&self.store);
        let filter = self.view.filter();
        let matches = filter.apply(&profiles);
        let out = render_directory(&matches, self.state.expanded);

        tracing::debug!(
            total = profiles.len(),
            matches = out.total_matches,
            shown = out.grid.cards().len(),
            expanded = self.state.expanded,
            "Rendered staff grid"
        );

        self.view.show_grid(out.grid.to_html());
        self.view.set_affordance(out.affordance);
        Some(out)
    }
}
