// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display-ready description of the map surface.
//!
//! Geometry is in content coordinates; [`ReadyScene::transform`] maps it into
//! the container. Renderers walk the outlines first, then the tiles.

use boothmap_catalog::{BoothId, BoothSize, Zone};
use boothmap_view2d::ViewTransform;
use kurbo::{Affine, Rect, Size};
use peniko::Color;

use crate::dataset::Venue;
use crate::legend::Palette;
use crate::state::VenueState;

/// Shown while the container has not been measured.
pub const LOADING_MESSAGE: &str = "Loading map...";

/// Space between the main tent outline and its outermost booths.
const MAIN_TENT_MARGIN: f64 = 20.0;
/// Space between a vendor tent outline and its booth.
const VENDOR_TENT_MARGIN: f64 = 6.0;

/// One drawn booth.
#[derive(Clone, Debug)]
pub struct BoothTile {
    /// Booth number.
    pub id: BoothId,
    /// Booth size.
    pub size: BoothSize,
    /// Zone.
    pub zone: Zone,
    /// Footprint in content coordinates.
    pub rect: Rect,
    /// Text drawn inside the booth.
    pub label: String,
    /// Hover text: the exhibitor name, or `"Booth N"`.
    pub title: String,
    /// Whether an exhibitor is assigned.
    pub assigned: bool,
    /// Whether this is the selected booth.
    pub selected: bool,
    /// Interior color.
    pub fill: Color,
    /// Outline color.
    pub stroke: Color,
}

/// A tent outline with its caption.
#[derive(Clone, Debug)]
pub struct TentOutline {
    /// Outline in content coordinates.
    pub rect: Rect,
    /// Caption.
    pub label: &'static str,
}

/// Scene of a measured map.
#[derive(Clone, Debug)]
pub struct ReadyScene {
    /// Container size in pixels.
    pub container: Size,
    /// Content size in content units.
    pub content: Size,
    /// Current pan/zoom.
    pub view: ViewTransform,
    /// Content → container mapping for `view`.
    pub transform: Affine,
    /// Content-space rectangle visible through the container.
    pub visible: Rect,
    /// Tent outlines.
    pub outlines: Vec<TentOutline>,
    /// Booths ascending by number, selected booth last so it draws on top.
    pub tiles: Vec<BoothTile>,
    /// Map background.
    pub background: Color,
    /// Tent outline color.
    pub outline: Color,
    /// Label color.
    pub text: Color,
}

impl ReadyScene {
    /// Tiles intersecting the visible area.
    pub fn visible_tiles(&self) -> impl Iterator<Item = &BoothTile> + '_ {
        self.tiles
            .iter()
            .filter(|t| t.rect.intersect(self.visible).area() > 0.0)
    }

    /// Footprint of `tile` in container coordinates.
    #[must_use]
    pub fn tile_in_view(&self, tile: &BoothTile) -> Rect {
        self.view.content_to_view_rect(tile.rect)
    }
}

/// The map surface.
#[derive(Clone, Debug)]
pub enum MapScene {
    /// The container has not been measured yet.
    Loading,
    /// Ready to draw.
    Ready(ReadyScene),
}

impl MapScene {
    /// Builds the scene for the current state.
    ///
    /// Booths without a position are not drawn.
    #[must_use]
    pub fn new(venue: &Venue, state: &VenueState, palette: &Palette) -> Self {
        let viewport = state.viewport();
        let (Some(container), Some(view), Some(visible)) = (
            viewport.container_size(),
            viewport.transform(),
            viewport.visible_content_rect(),
        ) else {
            return Self::Loading;
        };

        let selected = state.selected();
        let mut tiles: Vec<BoothTile> = venue
            .catalog()
            .entries()
            .filter_map(|entry| {
                let booth = entry.booth;
                let rect = venue.positions().footprint(booth.id, booth.size)?;
                let assigned = entry.is_assigned();
                let is_selected = selected == Some(booth.id);
                let swatch = palette.booth(booth.zone, assigned, is_selected);
                Some(BoothTile {
                    id: booth.id,
                    size: booth.size,
                    zone: booth.zone,
                    rect,
                    label: booth.id.to_string(),
                    title: entry
                        .exhibitor
                        .map_or_else(|| format!("Booth {}", booth.id), |ex| ex.name.clone()),
                    assigned,
                    selected: is_selected,
                    fill: swatch.fill,
                    stroke: swatch.stroke,
                })
            })
            .collect();
        // Stable, so the others keep their order.
        tiles.sort_by_key(|t| t.selected);

        Self::Ready(ReadyScene {
            container,
            content: viewport.config().content_size,
            view,
            transform: view.to_affine(),
            visible,
            outlines: outlines(&tiles),
            tiles,
            background: palette.background,
            outline: palette.outline,
            text: palette.text,
        })
    }

    /// Returns the ready scene, if any.
    #[must_use]
    pub fn ready(&self) -> Option<&ReadyScene> {
        match self {
            Self::Loading => None,
            Self::Ready(scene) => Some(scene),
        }
    }
}

fn outlines(tiles: &[BoothTile]) -> Vec<TentOutline> {
    let mut out = Vec::new();
    let main = tiles
        .iter()
        .filter(|t| t.zone.is_main())
        .map(|t| t.rect)
        .reduce(|a, b| a.union(b));
    if let Some(rect) = main {
        out.push(TentOutline {
            rect: rect.inflate(MAIN_TENT_MARGIN, MAIN_TENT_MARGIN),
            label: "MAIN TENT",
        });
    }
    out.extend(
        tiles
            .iter()
            .filter(|t| !t.zone.is_main())
            .map(|t| TentOutline {
                rect: t.rect.inflate(VENDOR_TENT_MARGIN, VENDOR_TENT_MARGIN),
                label: "VENDOR TENT",
            }),
    );
    out
}
