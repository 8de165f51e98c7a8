//! End-to-end checkout scenarios: factory-built methods processing full
//! orders against an injected store configuration.

use checkout_core::{CheckoutError, Currency, Order, StoreConfig};
use checkout_pay::{PaymentMethodFactory, BOLETO_SETTLEMENT_CODE, DEMO_CARD_NUMBER};

fn demo_store() -> StoreConfig {
    StoreConfig::new("Loja do João", Currency::BRL, 10.0)
}

#[test]
fn card_checkout_totals_and_masks() {
    let store = demo_store();

    let mut order = Order::new(store.currency());
    order.add_item("Mouse Gamer", 89.90);
    order.add_item("Teclado Mecânico", 299.90);
    order.select_payment_method(PaymentMethodFactory::create("cartao").unwrap());

    let receipt = order.finalize_with(&store).unwrap();

    assert_eq!(receipt.subtotal.amount, 38980);
    assert_eq!(receipt.delivery_fee.amount, 1000);
    assert_eq!(receipt.total.amount, 39980);
    assert!(receipt.outcome.succeeded);
    assert!(receipt.outcome.description.contains("**** **** **** 3456"));
    assert!(!receipt.outcome.description.contains(DEMO_CARD_NUMBER));
}

#[test]
fn pix_checkout_settles_instantly() {
    let store = demo_store();

    let mut order = Order::new(store.currency());
    order.add_item("Headset", 159.90);
    order.select_payment_method(PaymentMethodFactory::create("pix").unwrap());

    let receipt = order.finalize_with(&store).unwrap();

    assert_eq!(receipt.total.amount, 16990);
    assert!(receipt.outcome.succeeded);
    assert!(receipt.outcome.description.contains("maria@email.com"));
}

#[test]
fn boleto_checkout_issues_slip() {
    let store = demo_store();

    let mut order = Order::new(store.currency());
    order.add_item("Webcam HD", 249.90);
    order.add_item("Microfone USB", 179.90);
    order.select_payment_method(PaymentMethodFactory::create("boleto").unwrap());

    let receipt = order.finalize_with(&store).unwrap();

    assert_eq!(receipt.total.amount, 43980);
    assert!(receipt.outcome.succeeded);
    assert!(receipt.outcome.description.contains(BOLETO_SETTLEMENT_CODE));
}

#[test]
fn selection_order_does_not_change_totals() {
    let store = demo_store();

    let mut order = Order::new(store.currency());
    order.add_item("Webcam HD", 249.90);
    order.select_payment_method(PaymentMethodFactory::create("pix").unwrap());
    order.add_item("Microfone USB", 179.90);

    let receipt = order.finalize_with(&store).unwrap();
    assert_eq!(receipt.subtotal.amount, 42980);
    assert_eq!(receipt.total.amount, 43980);
}

#[test]
fn finalize_without_selection_performs_no_payment() {
    let store = demo_store();

    let mut order = Order::new(store.currency());
    order.add_item("Headset", 159.90);

    let err = order.finalize_with(&store).unwrap_err();
    assert!(matches!(err, CheckoutError::NoPaymentMethodSelected { .. }));

    // Selecting afterwards recovers the order
    order.select_payment_method(PaymentMethodFactory::create("pix").unwrap());
    assert!(order.finalize_with(&store).is_ok());
}

#[test]
fn unknown_kind_constructs_nothing() {
    let err = PaymentMethodFactory::create("dinheiro").unwrap_err();
    assert!(matches!(
        err,
        CheckoutError::UnknownPaymentKind { ref kind } if kind == "dinheiro"
    ));
}
