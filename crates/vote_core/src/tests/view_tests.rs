use std::cell::RefCell;

use super::*;
use crate::controller::ListController;

fn product(id: i64, votes: i64) -> Product {
    Product {
        id: ProductId(id),
        title: format!("Product {id}"),
        description: format!("About product {id}"),
        url: format!("https://example.com/{id}"),
        votes,
        submitter_avatar_url: format!("images/avatars/{id}.jpg"),
        product_image_url: format!("images/products/{id}.png"),
    }
}

#[test]
fn each_interaction_fires_exactly_one_callback() {
    let seen = RefCell::new(Vec::new());
    let record = |intent: VoteIntent| seen.borrow_mut().push(intent);
    let item = product(7, 0);
    let view = ItemView::new(&item, &record);

    view.handle(Interaction::Up);
    assert_eq!(*seen.borrow(), vec![VoteIntent::up(ProductId(7))]);

    view.handle(Interaction::Down);
    assert_eq!(
        *seen.borrow(),
        vec![VoteIntent::up(ProductId(7)), VoteIntent::down(ProductId(7))]
    );
}

#[test]
fn view_exposes_display_fields_unchanged() {
    let item = product(3, -2);
    let noop = |_: VoteIntent| {};
    let view = ItemView::new(&item, &noop);

    assert_eq!(view.id(), ProductId(3));
    assert_eq!(view.title(), "Product 3");
    assert_eq!(view.description(), "About product 3");
    assert_eq!(view.url(), "https://example.com/3");
    assert_eq!(view.votes(), -2);
    assert_eq!(view.product_image_url(), "images/products/3.png");
    assert_eq!(view.submitter_avatar_url(), "images/avatars/3.jpg");
}

#[test]
fn list_follows_the_derived_order() {
    let controller =
        ListController::headless(vec![product(1, 1), product(2, 9), product(3, 5)]).expect("seed");
    let ordered = controller.ordered_view();
    let queue = IntentQueue::default();

    let views = ItemView::list(&ordered, &queue);

    let ids: Vec<ProductId> = views.iter().map(ItemView::id).collect();
    assert_eq!(ids, vec![ProductId(2), ProductId(3), ProductId(1)]);
}

#[test]
fn queue_preserves_order_without_coalescing() {
    let queue = IntentQueue::bounded(8);
    let item = product(1, 0);
    let other = product(2, 0);

    ItemView::new(&item, &queue).handle(Interaction::Up);
    ItemView::new(&item, &queue).handle(Interaction::Up);
    ItemView::new(&other, &queue).handle(Interaction::Down);
    ItemView::new(&item, &queue).handle(Interaction::Down);
    assert_eq!(queue.len(), 4);

    assert_eq!(
        queue.drain(),
        vec![
            VoteIntent::up(ProductId(1)),
            VoteIntent::up(ProductId(1)),
            VoteIntent::down(ProductId(2)),
            VoteIntent::down(ProductId(1)),
        ]
    );
    assert!(queue.is_empty());
    assert!(queue.drain().is_empty());
}

#[test]
fn full_queue_drops_and_counts_overflow() {
    let queue = IntentQueue::bounded(2);
    for _ in 0..5 {
        queue.on_upvote(ProductId(1));
    }

    assert_eq!(queue.take_dropped(), 3);
    assert_eq!(queue.take_dropped(), 0);
    assert_eq!(queue.drain().len(), 2);
}

#[test]
fn queued_intents_drive_the_controller() {
    let mut controller = ListController::headless(vec![product(1, 0), product(2, 1)]).expect("seed");
    let queue = IntentQueue::default();

    {
        let ordered = controller.ordered_view();
        let views = ItemView::list(&ordered, &queue);
        // Row 0 is product 2, row 1 is product 1.
        views[1].handle(Interaction::Up);
        views[1].handle(Interaction::Up);
        views[0].handle(Interaction::Down);
    }

    let applied = controller.apply_all(queue.drain());

    assert_eq!(applied, 3);
    assert_eq!(
        controller.ordered_view().scores(),
        vec![(ProductId(1), 2), (ProductId(2), 0)]
    );
}
