//! Per-session dispatcher.
//!
//! A [`Session`] owns the navigation path, the selections of the active page,
//! and the last rendered value of every mounted output. Events are processed
//! one at a time, to completion.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::{debug, info, info_span, warn};
use voyage_model::{ChartSpec, Dataset, OutputId, Page, PageView, Recompute, WidgetId};

use crate::graph::{Cell, InputId, Inputs, Rendered, cell, cells};
use crate::router::resolve;

/// An interaction from the hosting layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The browser location changed.
    Navigate(String),
    /// A selector changed; `None` means it was cleared.
    Select {
        widget: WidgetId,
        value: Option<String>,
    },
}

/// The outcome of one cell evaluation during an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellUpdate {
    pub output: OutputId,
    pub outcome: Recompute<Rendered>,
}

/// State of one browser session.
#[derive(Debug)]
pub struct Session {
    dataset: Dataset,
    path: Option<String>,
    selections: BTreeMap<WidgetId, Option<String>>,
    rendered: BTreeMap<OutputId, Rendered>,
}

impl Session {
    /// A session that has not navigated yet.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            path: None,
            selections: BTreeMap::new(),
            rendered: BTreeMap::new(),
        }
    }

    /// Process one event and return the cells it evaluated, in order.
    pub fn apply(&mut self, event: Event) -> Vec<CellUpdate> {
        match event {
            Event::Navigate(path) => self.navigate(path),
            Event::Select { widget, value } => self.select(widget, value),
        }
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Page for the current path; `None` before the first navigation.
    pub fn page(&self) -> Option<Page> {
        self.path.as_deref().map(resolve)
    }

    /// The rendered page content.
    pub fn view(&self) -> Option<&PageView> {
        self.rendered
            .get(&OutputId::PageContent)
            .and_then(Rendered::as_page)
    }

    pub fn selection(&self, widget: WidgetId) -> Option<&str> {
        self.selections.get(&widget).and_then(|v| v.as_deref())
    }

    pub fn rendered(&self, output: OutputId) -> Option<&Rendered> {
        self.rendered.get(&output)
    }

    pub fn chart(&self, output: OutputId) -> Option<&ChartSpec> {
        self.rendered(output).and_then(Rendered::as_chart)
    }

    fn navigate(&mut self, path: String) -> Vec<CellUpdate> {
        let _span = info_span!("navigate", path = %path).entered();
        if self.path.as_deref() == Some(path.as_str()) {
            debug!("Path unchanged");
            return Vec::new();
        }

        info!(page = ?resolve(&path), "Navigating");
        self.path = Some(path);
        self.selections.clear();

        let mut updates = vec![self.evaluate(cell(OutputId::PageContent))];

        let mut changed = BTreeSet::from([InputId::Path]);
        if let Some(view) = self.view() {
            let defaults: Vec<_> = view
                .selectors()
                .map(|s| (s.id, s.default.clone()))
                .collect();
            for (widget, default) in defaults {
                if default.is_some() {
                    changed.insert(InputId::Widget(widget));
                }
                self.selections.insert(widget, default);
            }
        }
        self.unmount_stale_outputs();

        updates.extend(self.run_cells(&changed));
        updates
    }

    fn select(&mut self, widget: WidgetId, value: Option<String>) -> Vec<CellUpdate> {
        let _span = info_span!("select", %widget, value = ?value).entered();
        if !self.view().is_some_and(|view| view.has_widget(widget)) {
            warn!("Widget is not on the current page, ignoring");
            return Vec::new();
        }
        if self.selection(widget) == value.as_deref() {
            debug!("Selection unchanged");
            return Vec::new();
        }

        self.selections.insert(widget, value);
        self.run_cells(&BTreeSet::from([InputId::Widget(widget)]))
    }

    /// Evaluate every mounted chart cell that depends on a changed input.
    fn run_cells(&mut self, changed: &BTreeSet<InputId>) -> Vec<CellUpdate> {
        cells()
            .iter()
            .filter(|c| c.output != OutputId::PageContent)
            .filter(|c| c.depends_on(changed))
            .filter(|c| self.is_mounted(c.output))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|c| self.evaluate(c))
            .collect()
    }

    fn evaluate(&mut self, cell: &Cell) -> CellUpdate {
        let outcome = cell.evaluate(&self.dataset, &self.inputs());
        if let Recompute::Recomputed(value) = &outcome {
            self.rendered.insert(cell.output, value.clone());
        }
        CellUpdate {
            output: cell.output,
            outcome,
        }
    }

    fn inputs(&self) -> Inputs<'_> {
        Inputs {
            path: self.path.as_deref().unwrap_or_default(),
            selections: &self.selections,
        }
    }

    fn is_mounted(&self, output: OutputId) -> bool {
        output == OutputId::PageContent
            || self.view().is_some_and(|view| view.has_output(output))
    }

    fn unmount_stale_outputs(&mut self) {
        let mounted: BTreeSet<OutputId> = self
            .rendered
            .keys()
            .copied()
            .filter(|output| self.is_mounted(*output))
            .collect();
        self.rendered.retain(|output, _| mounted.contains(output));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;
    use voyage_model::Suppression;

    fn session() -> Session {
        let frame = df! {
            "HomePlanet" => &["Earth", "Earth", "Mars"],
            "Age" => &[Some(20.0), None, Some(30.0)],
            "FoodCourt" => &[1.0, 2.0, 3.0],
            "Transported" => &[1i64, 0, 1],
        }
        .unwrap();
        Session::new(Dataset::new(frame))
    }

    #[test]
    fn same_path_twice_is_a_no_op() {
        let mut session = session();
        assert!(!session.apply(Event::Navigate("/".into())).is_empty());
        assert!(session.apply(Event::Navigate("/".into())).is_empty());
    }

    #[test]
    fn navigation_discards_selections() {
        let mut session = session();
        session.apply(Event::Navigate("/distribution".into()));
        session.apply(Event::Select {
            widget: WidgetId::DistributionColumn,
            value: Some("FoodCourt".into()),
        });
        assert_eq!(session.selection(WidgetId::DistributionColumn), Some("FoodCourt"));

        session.apply(Event::Navigate("/categorical".into()));
        assert_eq!(session.selection(WidgetId::DistributionColumn), None);
        assert_eq!(session.selection(WidgetId::Category), Some("HomePlanet"));
        assert!(session.chart(OutputId::DistributionPlot).is_none());
    }

    #[test]
    fn cleared_selection_keeps_prior_chart() {
        let mut session = session();
        session.apply(Event::Navigate("/relationship".into()));
        let before = session.chart(OutputId::RelationshipGraph).cloned();
        assert!(before.is_some());

        let updates = session.apply(Event::Select {
            widget: WidgetId::RelationshipX,
            value: None,
        });
        assert_eq!(
            updates,
            vec![CellUpdate {
                output: OutputId::RelationshipGraph,
                outcome: Recompute::Suppressed(Suppression::MissingSelection {
                    widget: WidgetId::RelationshipX
                }),
            }]
        );
        assert_eq!(session.chart(OutputId::RelationshipGraph).cloned(), before);
    }

    #[test]
    fn select_off_page_is_ignored() {
        let mut session = session();
        session.apply(Event::Navigate("/".into()));
        let updates = session.apply(Event::Select {
            widget: WidgetId::Category,
            value: Some("HomePlanet".into()),
        });
        assert!(updates.is_empty());
        assert_eq!(session.selection(WidgetId::Category), None);
    }
}
