use std::collections::HashSet;

use eframe::egui;
use shared::{
    domain::{Product, ProductId},
    error::VoteError,
};
use vote_core::{
    seed, IntentQueue, Interaction, ItemView, ListController, ProductSnapshot, RenderSurface,
    VoteCallbacks,
};

use crate::controller::events::{err_label, status_line, UiError, UiEvent};
use crate::controller::orchestration::apply_queued_votes;

const ROW_HEIGHT: f32 = 76.0;
const THUMBNAIL_SIZE: f32 = 56.0;
const AVATAR_SIZE: f32 = 18.0;

/// Redraws the window whenever the list controller installs a new snapshot.
pub struct RepaintSurface {
    ctx: egui::Context,
}

impl RepaintSurface {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl RenderSurface for RepaintSurface {
    fn request_render(&self, snapshot: &ProductSnapshot) {
        tracing::trace!(revision = snapshot.revision(), "requesting repaint");
        self.ctx.request_repaint();
    }
}

#[derive(Debug, Clone)]
struct StatusBanner {
    message: String,
}

pub struct VoteListApp {
    controller: ListController<RepaintSurface>,
    queue: IntentQueue,
    title: String,
    status: String,
    status_banner: Option<StatusBanner>,
    last_drawn: ProductSnapshot,
    recently_changed: HashSet<ProductId>,
}

impl VoteListApp {
    pub fn new(
        controller: ListController<RepaintSurface>,
        queue: IntentQueue,
        title: String,
        startup_error: Option<UiError>,
    ) -> Self {
        let status_banner = startup_error.map(|err| StatusBanner {
            message: format!("{}: {}", err_label(err.category()), err.message()),
        });
        let last_drawn = controller.snapshot();
        Self {
            status: format!("{} products", controller.len()),
            controller,
            queue,
            title,
            status_banner,
            last_drawn,
            recently_changed: HashSet::new(),
        }
    }

    fn process_queued_votes(&mut self) {
        for event in apply_queued_votes(&mut self.controller, &self.queue) {
            if let Some(line) = status_line(&event) {
                self.status = line;
            }
            if let UiEvent::IntentsDropped(_) = event {
                self.status_banner = Some(StatusBanner {
                    message: self.status.clone(),
                });
            }
        }

        let current = self.controller.snapshot();
        if current.revision() != self.last_drawn.revision() {
            self.recently_changed = current.changed_since(&self.last_drawn).into_iter().collect();
            self.last_drawn = current;
        }
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(banner) = self.status_banner.clone() {
            egui::Frame::NONE
                .fill(egui::Color32::from_rgb(111, 53, 53))
                .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)))
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Dismiss").clicked() {
                                self.status_banner = None;
                            }
                        });
                    });
                });
            ui.add_space(8.0);
        }
    }

    fn show_product_list(&self, ui: &mut egui::Ui) {
        let ordered = self.controller.ordered_view();
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for view in ItemView::list(&ordered, &self.queue) {
                    ui.push_id(view.id().0, |ui| {
                        render_item_row(ui, &view, self.recently_changed.contains(&view.id()));
                    });
                    ui.separator();
                }
            });
    }
}

/// Draws one product row and forwards caret clicks to the row's callbacks.
fn render_item_row<C: VoteCallbacks + ?Sized>(
    ui: &mut egui::Ui,
    view: &ItemView<'_, C>,
    highlight: bool,
) {
    ui.horizontal(|ui| {
        ui.set_min_height(ROW_HEIGHT);

        let (thumb_rect, thumb_resp) = ui.allocate_exact_size(
            egui::vec2(THUMBNAIL_SIZE, THUMBNAIL_SIZE),
            egui::Sense::hover(),
        );
        ui.painter().rect_filled(
            thumb_rect,
            egui::CornerRadius::same(6),
            egui::Color32::from_rgb(76, 91, 135),
        );
        thumb_resp.on_hover_text(view.product_image_url());

        ui.vertical(|ui| {
            if ui.small_button("▲").on_hover_text("Upvote").clicked() {
                view.handle(Interaction::Up);
            }
            let votes = egui::RichText::new(view.votes().to_string()).strong();
            ui.label(if highlight {
                votes.color(egui::Color32::from_rgb(35, 165, 90))
            } else {
                votes
            });
            if ui.small_button("▼").on_hover_text("Downvote").clicked() {
                view.handle(Interaction::Down);
            }
        });

        ui.vertical(|ui| {
            ui.hyperlink_to(egui::RichText::new(view.title()).strong(), view.url());
            ui.label(view.description());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Submitted by:").weak());
                let (avatar_rect, avatar_resp) = ui.allocate_exact_size(
                    egui::vec2(AVATAR_SIZE, AVATAR_SIZE),
                    egui::Sense::hover(),
                );
                ui.painter().circle_filled(
                    avatar_rect.center(),
                    AVATAR_SIZE / 2.0,
                    egui::Color32::from_rgb(72, 72, 75),
                );
                avatar_resp.on_hover_text(view.submitter_avatar_url());
            });
        });
    });
}

impl eframe::App for VoteListApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("vote_list_header").show(ctx, |ui| {
            ui.heading(&self.title);
        });

        egui::TopBottomPanel::bottom("vote_list_status").show(ctx, |ui| {
            ui.label(egui::RichText::new(&self.status).weak());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_status_banner(ui);
            self.show_product_list(ui);
        });

        // Clicks from this frame land in the queue; applying them asks for the next frame.
        self.process_queued_votes();
    }
}

/// Builds the controller against a repaint surface for `ctx`.
pub fn mount(
    ctx: &egui::Context,
    products: Vec<Product>,
) -> Result<ListController<RepaintSurface>, VoteError> {
    ListController::new(products, RepaintSurface::new(ctx.clone()))
}

/// Mounts `products`, or the built-in catalogue with an error for the banner
/// when the controller rejects them.
pub fn mount_or_builtin(
    ctx: &egui::Context,
    products: Vec<Product>,
) -> Result<(ListController<RepaintSurface>, Option<UiError>), VoteError> {
    match mount(ctx, products) {
        Ok(controller) => Ok((controller, None)),
        Err(err) => {
            tracing::error!(error = %err, "seed rejected; using built-in products");
            let controller = mount(ctx, seed::builtin_products())?;
            Ok((controller, Some(UiError::rejected_seed(&err))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::UiErrorCategory;

    fn product(id: i64, votes: i64) -> Product {
        Product {
            id: ProductId(id),
            title: format!("Product {id}"),
            description: String::new(),
            url: "#".into(),
            votes,
            submitter_avatar_url: "images/avatars/a.png".into(),
            product_image_url: "images/products/p.png".into(),
        }
    }

    #[test]
    fn valid_products_mount_as_given() {
        let ctx = egui::Context::default();
        let (controller, error) = mount_or_builtin(&ctx, vec![product(7, 1)]).expect("mount");
        assert!(error.is_none());
        assert_eq!(controller.len(), 1);
        assert_eq!(controller.get(ProductId(7)).map(|p| p.votes), Some(1));
    }

    #[test]
    fn duplicate_ids_fall_back_to_builtin_catalogue() {
        let ctx = egui::Context::default();
        let (controller, error) =
            mount_or_builtin(&ctx, vec![product(1, 0), product(1, 3)]).expect("fallback");

        let mounted: Vec<Product> = controller.snapshot().iter().cloned().collect();
        assert_eq!(mounted, seed::builtin_products());
        let error = error.expect("banner error");
        assert_eq!(error.category(), UiErrorCategory::Validation);
        assert!(error.message().contains("built-in products"));
    }
}
