use carnet_runtime::{
    reduce_stack, schedule_stack_effects, DeferredQueue, PageKey, PageNotification,
    RouteContext, SiteConfig, StackAction, StackOrder,
};
use pretty_assertions::assert_eq;

fn startup(query: &str) -> StackOrder {
    let config = SiteConfig::builtin();
    let route = RouteContext::from_query(query);
    StackOrder::initialize(route.initial_order(&config.page_order))
}

fn click_label(
    stack: &mut StackOrder,
    queue: &mut DeferredQueue<PageNotification>,
    key: PageKey,
) -> Option<PageKey> {
    let effects = reduce_stack(stack, StackAction::LabelClicked { key }).expect("known page");
    schedule_stack_effects(&effects, queue)
}

#[test]
fn routed_startup_then_label_clicks_trigger_one_reseed_per_reactivation() {
    let mut stack = startup("?page=moon");
    let mut queue = DeferredQueue::new();
    assert_eq!(stack.active(), Some(PageKey::Moon));

    assert_eq!(click_label(&mut stack, &mut queue, PageKey::Cafe), Some(PageKey::Cafe));
    assert!(queue.flush().is_empty());

    assert_eq!(click_label(&mut stack, &mut queue, PageKey::Cafe), Some(PageKey::Cafe));
    // Nothing is delivered synchronously; the next tick sees exactly one notice.
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.flush(), vec![PageNotification::Reseed(PageKey::Cafe)]);
    assert!(queue.flush().is_empty());

    assert_eq!(
        stack.keys(),
        &[PageKey::Today, PageKey::Urhu, PageKey::Moon, PageKey::Cafe]
    );
}

#[test]
fn unmount_cancels_a_pending_reseed() {
    let mut stack = startup("");
    let mut queue = DeferredQueue::new();
    click_label(&mut stack, &mut queue, PageKey::Urhu);
    assert!(!queue.is_idle());

    queue.cancel_all();
    assert!(queue.flush().is_empty());
}

#[test]
fn body_clicks_cycle_through_every_page_without_losing_any() {
    let mut stack = startup("");
    for key in [PageKey::Today, PageKey::Moon, PageKey::Cafe, PageKey::Today] {
        reduce_stack(&mut stack, StackAction::CardClicked { key }).expect("known page");
        assert_eq!(stack.active(), Some(key));
        assert_eq!(stack.len(), PageKey::ALL.len());
    }
    assert_eq!(
        stack.keys(),
        &[PageKey::Urhu, PageKey::Moon, PageKey::Cafe, PageKey::Today]
    );
}
