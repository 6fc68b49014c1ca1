use crate::clients::ConcreteClient;
use crate::config::ForwardPolicy;
use crate::place_order::Order;

use super::{DiscountHandler, DiscountKind};

fn apply(handler: &DiscountHandler<'_>, policy: ForwardPolicy) -> String {
    let client = ConcreteClient;
    let order = Order::new(&client);
    let mut out = Vec::new();
    handler.apply_discount(&order, policy, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn linked_successor_is_not_reached_by_default() {
    let vip = DiscountHandler::vip();
    let mut early_bird = DiscountHandler::early_bird();
    early_bird.set_next_handler(&vip);

    assert_eq!(early_bird.chain_len(), 2);
    assert_eq!(
        apply(&early_bird, ForwardPolicy::Literal),
        "Early Bird Discount Applied\n"
    );
}

#[test]
fn forwarding_policy_walks_whole_chain() {
    let vip = DiscountHandler::vip();
    let mut early_bird = DiscountHandler::early_bird();
    early_bird.set_next_handler(&vip);

    assert_eq!(
        apply(&early_bird, ForwardPolicy::Forwarding),
        "Early Bird Discount Applied\nVIP Discount Applied\n"
    );
}

#[test]
fn pass_through_forwards_under_either_policy() {
    let vip = DiscountHandler::vip();
    let mut base = DiscountHandler::new(DiscountKind::PassThrough);
    base.set_next_handler(&vip);

    for policy in [ForwardPolicy::Literal, ForwardPolicy::Forwarding] {
        assert_eq!(apply(&base, policy), "VIP Discount Applied\n");
    }
}

#[test]
fn unlinked_pass_through_does_nothing() {
    let base = DiscountHandler::new(DiscountKind::PassThrough);
    assert!(base.next_handler().is_none());
    assert_eq!(apply(&base, ForwardPolicy::Forwarding), "");
}

#[test]
fn last_handler_ends_chain_quietly() {
    let vip = DiscountHandler::vip();
    assert_eq!(apply(&vip, ForwardPolicy::Forwarding), "VIP Discount Applied\n");
}

#[test]
fn set_next_handler_replaces_successor() {
    let vip = DiscountHandler::vip();
    let other = DiscountHandler::early_bird();
    let mut head = DiscountHandler::new(DiscountKind::PassThrough);

    head.set_next_handler(&vip);
    head.set_next_handler(&other);

    assert_eq!(head.next_handler().map(|h| h.kind()), Some(DiscountKind::EarlyBird));
    assert_eq!(head.chain_len(), 2);
}

#[test]
fn shared_successor_serves_two_chains() {
    let vip = DiscountHandler::vip();
    let mut first = DiscountHandler::new(DiscountKind::PassThrough);
    let mut second = DiscountHandler::early_bird();
    first.set_next_handler(&vip);
    second.set_next_handler(&vip);

    assert_eq!(apply(&first, ForwardPolicy::Literal), "VIP Discount Applied\n");
    assert_eq!(
        apply(&second, ForwardPolicy::Forwarding),
        "Early Bird Discount Applied\nVIP Discount Applied\n"
    );
}

#[test]
fn pass_through_nodes_stack() {
    let early_bird = DiscountHandler::early_bird();
    let mut inner = DiscountHandler::new(DiscountKind::PassThrough);
    inner.set_next_handler(&early_bird);
    let mut outer = DiscountHandler::new(DiscountKind::PassThrough);
    outer.set_next_handler(&inner);

    assert_eq!(outer.chain_len(), 3);
    assert_eq!(
        apply(&outer, ForwardPolicy::Literal),
        "Early Bird Discount Applied\n"
    );
}
