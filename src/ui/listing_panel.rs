//! Listing sidebar UI rendering
//!
//! Handles the collapsible left panel: result count, sort selector, and
//! one card per listing in the store's display order.

use crate::app::AppState;
use crate::utils::{format_price, format_rating};
use caremap::{PriceType, SortCriterion, ThemeColors};
use egui::{RichText, ScrollArea};

/// Result of listing panel interactions handled by the application.
pub enum ListingPanelInteraction {
    /// A listing card was clicked
    CardClicked { catalog_index: usize },
    /// A sort criterion was selected
    SortRequested(SortCriterion),
}

/// Renders the complete listing panel with header and scrollable cards.
pub fn render_listing_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    colors: &ThemeColors,
) -> Option<ListingPanelInteraction> {
    let mut interaction: Option<ListingPanelInteraction> = None;

    // Result count and sort selector, mirroring the classic listing header
    ui.horizontal(|ui| {
        ui.heading(format!("{} Results", state.listings.result_count()));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let current = state.listings.store().criterion();
            let mut selected = current;
            egui::ComboBox::from_id_salt("sort_selector")
                .selected_text(current.label())
                .show_ui(ui, |ui| {
                    for criterion in SortCriterion::ALL {
                        ui.selectable_value(&mut selected, criterion, criterion.label());
                    }
                });
            if selected != current {
                interaction = Some(ListingPanelInteraction::SortRequested(selected));
            }
        });
    });
    ui.separator();

    // Pairs of (catalog index, record clone) in display order. Cloning
    // keeps the card loop free to borrow state mutably for hover updates.
    let ordered: Vec<(usize, caremap::ListingRecord)> = state
        .listings
        .store()
        .ordered_records()
        .map(|(i, r)| (i, r.clone()))
        .collect();

    let mut hovered = None;

    ScrollArea::vertical()
        .id_salt("listing_scroll_area")
        .show(ui, |ui| {
            for (catalog_index, record) in &ordered {
                let selected = state.selection.is_selected(*catalog_index);
                let fill = if selected {
                    colors.selection
                } else {
                    colors.panel_background
                };

                let card = egui::Frame::default()
                    .fill(fill)
                    .inner_margin(8.0)
                    .corner_radius(6.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        render_card(ui, record, colors);
                    });

                let response = ui.interact(
                    card.response.rect,
                    ui.id().with(*catalog_index),
                    egui::Sense::click(),
                );
                if response.hovered() {
                    hovered = Some(*catalog_index);
                }
                if response.clicked() {
                    interaction = Some(ListingPanelInteraction::CardClicked {
                        catalog_index: *catalog_index,
                    });
                }

                ui.separator();
            }
        });

    state.selection.set_hovered(hovered);
    interaction
}

/// Renders one listing card: name, rating/distance, address, badge, price.
fn render_card(ui: &mut egui::Ui, record: &caremap::ListingRecord, colors: &ThemeColors) {
    ui.label(RichText::new(&record.name).strong().size(15.0));

    ui.horizontal(|ui| {
        ui.label(RichText::new(format_rating(record.rating)).color(colors.rating).size(12.0));
        ui.label(
            RichText::new(format!("📍 {}", record.distance_label))
                .color(colors.text_dim)
                .size(12.0),
        );
    });

    ui.label(RichText::new(&record.address).color(colors.text_dim).size(11.0));

    ui.horizontal(|ui| {
        let (badge_bg, badge_fg) = match record.price_type {
            PriceType::Fixed => (colors.badge_fixed_bg, colors.badge_fixed_fg),
            PriceType::Negotiated => (colors.badge_negotiated_bg, colors.badge_negotiated_fg),
        };
        egui::Frame::default()
            .fill(badge_bg)
            .inner_margin(egui::Margin::symmetric(6, 2))
            .corner_radius(8.0)
            .show(ui, |ui| {
                ui.label(
                    RichText::new(record.price_type.label())
                        .color(badge_fg)
                        .size(11.0),
                );
            });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format_price(record.price))
                    .color(colors.price)
                    .strong()
                    .size(16.0),
            );
        });
    });
}
