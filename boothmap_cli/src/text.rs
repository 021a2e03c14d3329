// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain-text rendering of the panels.

use core::fmt::Write as _;

use boothmap_app::{AVAILABLE_MESSAGE, DetailPanel, DetailView, NO_SELECTION_MESSAGE};
use boothmap_directory::{DirectoryFilter, DirectoryView};
use boothmap_view2d::ViewportDebugInfo;

/// Viewport summary: container, transform and zoom bounds.
pub(crate) fn viewport_text(info: &ViewportDebugInfo) -> String {
    let mut out = String::new();
    let (Some(container), Some(transform)) = (info.container, info.transform) else {
        out.push_str("viewport not ready\n");
        return out;
    };
    let _ = writeln!(out, "container: {}x{}", container.width, container.height);
    let _ = writeln!(out, "scale: {:.6}", transform.scale);
    let _ = writeln!(
        out,
        "offset: {:.3}, {:.3}",
        transform.offset.x, transform.offset.y
    );
    let _ = writeln!(
        out,
        "zoom range: {:.6} - {:.6}",
        info.min_scale, info.max_scale
    );
    out
}

/// Filter tabs followed by the grouped rows.
///
/// The selected row is marked with `*`.
pub(crate) fn directory_text(view: &DirectoryView<'_>, active: DirectoryFilter) -> String {
    let mut out = String::new();
    let tabs: Vec<String> = DirectoryFilter::ALL
        .into_iter()
        .map(|filter| {
            let count = match filter {
                DirectoryFilter::All => view.counts.all,
                DirectoryFilter::Assigned => view.counts.assigned,
                DirectoryFilter::Available => view.counts.available,
            };
            if filter == active {
                format!("[{filter} ({count})]")
            } else {
                format!("{filter} ({count})")
            }
        })
        .collect();
    let _ = writeln!(out, "{}", tabs.join(" "));

    if let Some(message) = view.empty_message() {
        let _ = writeln!(out, "{message}");
        return out;
    }
    for section in &view.sections {
        let _ = writeln!(out, "{}", section.kind.title());
        for row in &section.rows {
            let mark = if row.selected { '*' } else { ' ' };
            let _ = write!(
                out,
                "{mark} {:>3}  {:<6} {}",
                row.id,
                row.size.label(),
                row.title
            );
            match row.representatives {
                Some((first, 0)) => {
                    let _ = write!(out, "  ({first})");
                }
                Some((first, others)) => {
                    let _ = write!(out, "  ({first} +{others})");
                }
                None => {}
            }
            out.push('\n');
        }
    }
    out
}

/// The detail panel as the sidebar lays it out.
pub(crate) fn details_text(panel: &DetailPanel<'_>) -> String {
    let mut out = String::new();
    if let Some(heading) = panel.view.heading() {
        let _ = writeln!(out, "{heading}");
    }
    match panel.view {
        DetailView::NoSelection => {
            let _ = writeln!(out, "{NO_SELECTION_MESSAGE}");
        }
        DetailView::Available { size, zone, .. } => {
            let _ = writeln!(out, "Size: {size}");
            let _ = writeln!(out, "Location: {zone}");
            let _ = writeln!(out, "{AVAILABLE_MESSAGE}");
        }
        DetailView::Exhibitor {
            size,
            zone,
            exhibitor,
            ..
        } => {
            let _ = writeln!(out, "{}", exhibitor.name);
            let _ = writeln!(out, "[{size}] [{zone}]");
            if !exhibitor.description.is_empty() {
                let _ = writeln!(out, "{}", exhibitor.description);
            }
            let _ = writeln!(out, "Website: {}", exhibitor.website);
            if let Some(deck) = &exhibitor.slide_deck {
                let _ = writeln!(out, "Slide Deck: {deck}");
            }
            if !exhibitor.representatives.is_empty() {
                out.push_str("Representatives:\n");
                for rep in &exhibitor.representatives {
                    let _ = writeln!(out, "  - {rep}");
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use boothmap_app::config::VenueConfig;
    use boothmap_app::dataset::Venue;
    use boothmap_app::{Action, Store};
    use boothmap_catalog::BoothId;
    use boothmap_directory::DirectoryFilter;
    use kurbo::Size;

    use super::{details_text, directory_text, viewport_text};
    use crate::session;

    fn store() -> Store {
        Store::new(Venue::builtin().unwrap(), VenueConfig::default())
    }

    #[test]
    fn viewport_before_and_after_measurement() {
        let mut store = store();
        let info = store.state().viewport().debug_info();
        assert_eq!(viewport_text(&info), "viewport not ready\n");

        session::mount(&mut store, Size::new(1000.0, 700.0));
        let text = viewport_text(&store.state().viewport().debug_info());
        assert!(text.starts_with("container: 1000x700\n"));
        assert!(text.contains("scale: 0.970588\n"));
        assert!(text.contains("zoom range: 0.776471 - 3.000000\n"));
    }

    #[test]
    fn directory_marks_filter_and_selection() {
        let mut store = store();
        store.dispatch(Action::BoothClicked(BoothId::new(1).unwrap()));
        store.dispatch(Action::SetFilter(DirectoryFilter::Assigned));
        let text = directory_text(&store.view().directory(), DirectoryFilter::Assigned);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "all (43) [assigned (2)] available (41)");
        assert_eq!(lines[1], "Main Tent");
        assert!(lines[2].starts_with("*   1  15x15"));
        assert!(lines[2].contains("TechVenture AI"));
        assert!(lines[3].starts_with("    2"));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn directory_reports_empty_results() {
        let mut store = store();
        store.dispatch(Action::SetSearch("zzz".into()));
        let text = directory_text(&store.view().directory(), DirectoryFilter::All);
        assert!(text.ends_with("No booths found matching your search.\n"));
    }

    #[test]
    fn details_cover_all_three_states() {
        let mut store = store();
        assert_eq!(
            details_text(&store.view().details()),
            "Select a booth to view details\n"
        );

        store.dispatch(Action::BoothClicked(BoothId::new(40).unwrap()));
        assert_eq!(
            details_text(&store.view().details()),
            "Booth 40\nSize: 20x20\nLocation: outside-bottom\nNo startup assigned yet\n"
        );

        store.dispatch(Action::BoothClicked(BoothId::new(1).unwrap()));
        let text = details_text(&store.view().details());
        assert!(text.starts_with("Booth 1\nTechVenture AI\n[15x15] [main-tent]\n"));
        assert!(text.contains("Slide Deck: "));
        assert!(text.contains("Representatives:\n  - John Smith\n"));
    }
}
