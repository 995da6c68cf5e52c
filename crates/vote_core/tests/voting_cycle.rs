use std::cell::RefCell;

use shared::{
    domain::{Product, ProductId, VoteDirection},
    protocol::VoteIntent,
};
use vote_core::{
    seed::builtin_products, IntentQueue, Interaction, ItemView, ListController, ProductSnapshot,
    RenderSurface, VoteOutcome,
};

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

/// Records the display order every time the controller asks for a redraw.
#[derive(Default)]
struct RecordingSurface {
    frames: RefCell<Vec<Vec<(ProductId, i64)>>>,
}

impl RenderSurface for RecordingSurface {
    fn request_render(&self, snapshot: &ProductSnapshot) {
        self.frames.borrow_mut().push(snapshot.ordered().scores());
    }
}

#[test]
fn click_vote_render_cycle() {
    let surface = RecordingSurface::default();
    let mut controller =
        ListController::new(vec![product(1, 0), product(2, 5)], &surface).expect("seed");
    let queue = IntentQueue::default();

    // Frame 1: click up on product 1 six times.
    {
        let ordered = controller.ordered_view();
        let rows = ItemView::list(&ordered, &queue);
        let row = rows
            .iter()
            .find(|row| row.id() == ProductId(1))
            .expect("row for product 1");
        for _ in 0..6 {
            row.handle(Interaction::Up);
        }
    }
    for intent in queue.drain() {
        controller.apply_intent(intent);
    }

    let frames = surface.frames.borrow();
    assert_eq!(frames.len(), 6);
    assert_eq!(frames[0], vec![(ProductId(2), 5), (ProductId(1), 1)]);
    // Tie at 5: seed order decides, and product 1 was seeded first.
    assert_eq!(frames[4], vec![(ProductId(1), 5), (ProductId(2), 5)]);
    assert_eq!(frames[5], vec![(ProductId(1), 6), (ProductId(2), 5)]);
}

#[test]
fn every_sequence_of_votes_keeps_the_view_sorted() {
    let mut controller = ListController::headless(builtin_products()).expect("seed");
    let ids: Vec<ProductId> = controller.snapshot().iter().map(|p| p.id).collect();

    // Deterministic pseudo-random walk over ids and directions.
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    for _ in 0..500 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let id = ids[(state % ids.len() as u64) as usize];
        let direction = if state & 0b1000 == 0 {
            VoteDirection::Up
        } else {
            VoteDirection::Down
        };

        let before = controller.snapshot();
        let outcome = controller.apply_vote(id, direction);
        let after = controller.snapshot();

        assert!(outcome.is_applied());
        assert_eq!(after.len(), before.len());
        assert_eq!(after.changed_since(&before), vec![id]);
        assert_eq!(
            after.get(id).map(|p| p.votes),
            before.get(id).map(|p| p.votes + direction.delta())
        );
        assert!(controller.ordered_view().is_sorted_desc());
    }
}

#[test]
fn unknown_ids_never_disturb_state() {
    let mut controller = ListController::headless(vec![product(1, 3)]).expect("seed");
    let before = controller.snapshot();

    for id in [0, 2, 99, -1, i64::MAX] {
        for direction in [VoteDirection::Up, VoteDirection::Down] {
            assert_eq!(
                controller.apply_intent(VoteIntent {
                    product_id: ProductId(id),
                    direction,
                }),
                VoteOutcome::UnknownProduct(ProductId(id))
            );
        }
    }

    assert_eq!(controller.snapshot(), before);
    assert_eq!(controller.get(ProductId(1)).map(|p| p.votes), Some(3));
}

#[test]
fn independent_controllers_do_not_share_state() {
    let mut left = ListController::headless(builtin_products()).expect("left");
    let right = ListController::headless(builtin_products()).expect("right");

    left.apply_vote(ProductId(3), VoteDirection::Up);

    assert_eq!(
        left.get(ProductId(3)).map(|p| p.votes),
        right.get(ProductId(3)).map(|p| p.votes + 1)
    );
    assert_eq!(right.revision(), 0);
}
