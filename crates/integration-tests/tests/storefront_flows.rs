//! Integration tests for storefront consumer flows.
//!
//! These mirror how the catalog page, detail page, header widget and cart
//! page drive the shared `AppState`.

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::rc::Rc;

use apnaswaad_core::{Category, Price, ProductId};
use apnaswaad_integration_tests::TestShop;
use apnaswaad_storefront::catalog::{ProductQuery, SortOrder};
use apnaswaad_storefront::error::AppError;
use apnaswaad_storefront::store::StoreEvent;

fn id(raw: i32) -> ProductId {
    ProductId::new(raw)
}

// =============================================================================
// Catalog page
// =============================================================================

#[test]
fn test_filter_then_add_from_listing() {
    let shop = TestShop::new();
    let mut state = shop.open_state();

    let cheapest_premium: Vec<ProductId> = state
        .catalog()
        .query(
            &ProductQuery::default()
                .category(Category::Premium)
                .sort(SortOrder::PriceLowToHigh),
        )
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(cheapest_premium.first(), Some(&id(4)));

    state.add_to_cart(id(4), 1).unwrap();
    assert_eq!(state.cart_view().subtotal, "₹160");
}

#[test]
fn test_price_filter_and_name_sort() {
    let shop = TestShop::new();
    let state = shop.open_state();

    let names: Vec<&str> = state
        .catalog()
        .query(
            &ProductQuery::default()
                .price_range(Price::new(100), Price::new(120))
                .sort(SortOrder::Name),
        )
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["Jalebi", "Rasmadhuri", "Soan Papdi"]);
}

// =============================================================================
// Detail page
// =============================================================================

#[test]
fn test_detail_page_adds_chosen_quantity() {
    let shop = TestShop::new();
    let mut state = shop.open_state();

    let product = state.view_product(id(9)).unwrap().clone();
    state.add_to_cart(product.id, 3).unwrap();
    state.store_mut().toggle_wishlist(product.id);

    assert_eq!(state.store().line(id(9)).unwrap().quantity, 3);
    assert_eq!(state.store().total(), Price::new(570));
    assert!(state.store().is_wishlisted(id(9)));
    assert_eq!(state.store().recently_viewed(), &[id(9)]);

    let related: Vec<ProductId> = state
        .catalog()
        .related(&product)
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(related, vec![id(4), id(5), id(14), id(15)]);
}

#[test]
fn test_unknown_product_is_not_found() {
    let shop = TestShop::new();
    let mut state = shop.open_state();
    assert!(matches!(
        state.view_product(id(77)),
        Err(AppError::ProductNotFound(_))
    ));
    assert!(state.store().recently_viewed().is_empty());
}

// =============================================================================
// Header widget and cart page
// =============================================================================

#[test]
fn test_header_widget_rerenders_on_every_cart_change() {
    let shop = TestShop::new();
    let mut state = shop.open_state();
    let renders = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&renders);
    state.store_mut().subscribe(move |event| {
        if *event == StoreEvent::CartChanged {
            sink.borrow_mut().push(*event);
        }
    });

    state.add_to_cart(id(1), 1).unwrap();
    state.add_to_cart(id(1), 1).unwrap();
    state.store_mut().update_quantity(id(1), 5);
    state.store_mut().remove_from_cart(id(1));
    state.store_mut().toggle_wishlist(id(1));

    assert_eq!(renders.borrow().len(), 4);
    assert_eq!(state.store().count(), 0);
}

#[test]
fn test_cart_page_scenario() {
    let shop = TestShop::new();
    let mut state = shop.open_state();

    state.add_to_cart(id(1), 1).unwrap();
    let view = state.cart_view();
    assert_eq!((view.item_count, view.total.as_str()), (1, "₹150"));

    state.add_to_cart(id(1), 1).unwrap();
    let view = state.cart_view();
    assert_eq!((view.item_count, view.total.as_str()), (2, "₹300"));
    assert_eq!(view.items.len(), 1);

    state.store_mut().update_quantity(id(1), 5);
    let view = state.cart_view();
    assert_eq!((view.item_count, view.total.as_str()), (5, "₹750"));

    state.store_mut().remove_from_cart(id(1));
    let view = state.cart_view();
    assert!(view.items.is_empty());
    assert_eq!((view.item_count, view.total.as_str()), (0, "₹0"));
}

#[test]
fn test_recommendations_exclude_cart_contents() {
    let shop = TestShop::new();
    let mut state = shop.open_state();
    state.add_to_cart(id(1), 1).unwrap();
    state.add_to_cart(id(2), 1).unwrap();

    let recommended: Vec<ProductId> = state
        .catalog()
        .recommended(state.store().cart())
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(recommended, vec![id(3), id(4), id(5), id(6)]);
}

#[test]
fn test_state_reopened_in_new_process_sees_previous_session() {
    let shop = TestShop::new();
    {
        let mut state = shop.open_state();
        state.add_to_cart(id(12), 2).unwrap();
        state.view_product(id(12)).unwrap();
        state.view_product(id(17)).unwrap();
    }

    let state = shop.open_state();
    assert_eq!(state.cart_view().subtotal, "₹280");
    let recent: Vec<&str> = state
        .recently_viewed_products()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(recent, vec!["Mysore Pak", "Besan Laddoo"]);
}
