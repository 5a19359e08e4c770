//! Unit tests for the keyboard listener registry.

use pathway_carousel::input::{KeySubscription, KeyboardHub, NavKey};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_subscribe_and_dispatch() {
    let hub = KeyboardHub::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _sub = hub.subscribe(move |key| sink.borrow_mut().push(key));

    assert_eq!(hub.dispatch("left"), 1);
    assert_eq!(hub.dispatch("ArrowRight"), 1);
    assert_eq!(*seen.borrow(), vec![NavKey::Left, NavKey::Right]);
}

#[test]
fn test_unhandled_keys_are_not_delivered() {
    let hub = KeyboardHub::new();
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    let _sub = hub.subscribe(move |_| *sink.borrow_mut() += 1);

    assert_eq!(hub.dispatch("enter"), 0);
    assert_eq!(hub.dispatch("up"), 0);
    assert_eq!(*count.borrow(), 0);
}

#[test]
fn test_drop_detaches_listener() {
    let hub = KeyboardHub::new();
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    let sub = hub.subscribe(move |_| *sink.borrow_mut() += 1);
    assert_eq!(hub.listener_count(), 1);

    drop(sub);
    assert_eq!(hub.listener_count(), 0);
    assert_eq!(hub.dispatch("right"), 0);
    assert_eq!(*count.borrow(), 0);
}

#[test]
fn test_explicit_detach() {
    let hub = KeyboardHub::new();
    let sub = hub.subscribe(|_| {});
    let other = hub.subscribe(|_| {});
    sub.detach();
    assert_eq!(hub.listener_count(), 1);
    drop(other);
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn test_listener_can_drop_its_subscription_while_dispatching() {
    let hub = KeyboardHub::new();
    let slot: Rc<RefCell<Option<KeySubscription>>> = Rc::new(RefCell::new(None));
    let inner = Rc::clone(&slot);
    let sub = hub.subscribe(move |_| {
        inner.borrow_mut().take();
    });
    *slot.borrow_mut() = Some(sub);

    assert_eq!(hub.dispatch("left"), 1);
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn test_subscription_outliving_hub_is_harmless() {
    let hub = KeyboardHub::new();
    let sub = hub.subscribe(|_| {});
    drop(hub);
    drop(sub);
}
