//! End-to-end warehouse scenarios through the public API only.

use stockroom_inventory::{
    BinId, InventoryError, Item, Order, OrderId, OrderStatus, Sku, StorageBin, Warehouse,
};

fn default_warehouse() -> Warehouse {
    let mut warehouse = Warehouse::new();
    warehouse
        .add_storage_bin(StorageBin::new(BinId::from("1BIN"), 1000))
        .unwrap();
    warehouse
}

fn bin_id() -> BinId {
    BinId::from("1BIN")
}

fn w1() -> Sku {
    Sku::from("W1")
}

fn widget(quantity: u64) -> Item {
    Item::new("Widget", w1(), quantity)
}

fn stocked_warehouse() -> Warehouse {
    let mut warehouse = default_warehouse();
    warehouse.receive_shipment(widget(500), &bin_id()).unwrap();
    warehouse
}

#[test]
fn receiving_into_empty_bin() {
    let warehouse = stocked_warehouse();

    let bin = warehouse.storage_bin(&bin_id()).unwrap();
    assert_eq!(bin.current_load(), 500);
    assert_eq!(bin.available_space(), 500);
    assert_eq!(warehouse.find_item(&w1()).unwrap().quantity(), 500);
}

#[test]
fn receiving_past_capacity_is_rejected() {
    let mut warehouse = stocked_warehouse();
    let before = warehouse.clone();

    let err = warehouse.receive_shipment(widget(600), &bin_id()).unwrap_err();
    match err {
        InventoryError::CapacityExceeded { .. } => {}
        _ => panic!("Expected CapacityExceeded"),
    }
    assert_eq!(warehouse, before);
}

#[test]
fn fulfilling_within_stock() {
    let mut warehouse = stocked_warehouse();
    let mut order = Order::new(OrderId::from("O-1"), [(w1(), 300)]).unwrap();

    warehouse.fulfill_order(&mut order).unwrap();

    assert_eq!(warehouse.find_item(&w1()).unwrap().quantity(), 200);
    assert_eq!(
        warehouse.storage_bin(&bin_id()).unwrap().items()[&w1()].quantity,
        200
    );
    assert_eq!(order.status(), OrderStatus::Fulfilled);
    assert_eq!(warehouse.orders().len(), 1);
    assert_eq!(warehouse.orders()[0].order_id(), &OrderId::from("O-1"));
}

#[test]
fn fulfilling_beyond_stock_changes_nothing() {
    let mut warehouse = stocked_warehouse();
    let before = warehouse.clone();
    let mut order = Order::new(OrderId::from("O-2"), [(w1(), 9999)]).unwrap();

    let err = warehouse.fulfill_order(&mut order).unwrap_err();
    assert_eq!(
        err,
        InventoryError::InsufficientInventory {
            sku: w1(),
            requested: 9999,
            available: 500,
        }
    );
    assert_eq!(warehouse, before);
    assert!(warehouse.orders().is_empty());
    assert_eq!(order.status(), OrderStatus::Pending);
}

#[test]
fn duplicate_bin_leaves_original() {
    let mut warehouse = stocked_warehouse();
    let err = warehouse
        .add_storage_bin(StorageBin::new(bin_id(), 5).with_constraint("temperature", "cold"))
        .unwrap_err();
    assert!(matches!(err, InventoryError::DuplicateBin { .. }));

    let bin = warehouse.storage_bin(&bin_id()).unwrap();
    assert_eq!(bin.capacity(), 1000);
    assert!(bin.constraints().is_empty());
    assert_eq!(bin.current_load(), 500);
}

#[test]
fn multi_sku_order_over_split_stock() {
    let mut warehouse = default_warehouse();
    warehouse
        .add_storage_bin(StorageBin::new(BinId::from("COLD"), 100).with_constraint("temperature", "cold"))
        .unwrap();

    let milk = Sku::from("MILK");
    let frozen = || Item::new("Milk", milk.clone(), 60).with_requirement("temperature", "cold");
    warehouse.receive_shipment(frozen(), &BinId::from("COLD")).unwrap();
    // The default bin has no temperature constraint, so cold stock fits there too.
    warehouse.receive_shipment(frozen(), &bin_id()).unwrap();
    warehouse.receive_shipment(widget(10), &bin_id()).unwrap();

    let mut order = Order::new(OrderId::from("O-3"), [(milk.clone(), 100), (w1(), 10)]).unwrap();
    warehouse.fulfill_order(&mut order).unwrap();

    // 1BIN registered first: drained of its 60 milk before COLD is touched.
    assert_eq!(warehouse.storage_bin(&bin_id()).unwrap().current_load(), 0);
    assert_eq!(
        warehouse.storage_bin(&BinId::from("COLD")).unwrap().quantity_of(&milk),
        20
    );
    assert_eq!(warehouse.find_item(&milk).unwrap().quantity(), 20);
    assert_eq!(warehouse.find_item(&w1()).unwrap().quantity(), 0);

    let report = warehouse.generate_inventory_report();
    assert!(report.contains("  - SKU: MILK, Name: Milk, quantity: 20\n"));
    assert!(report.contains("  - Bin ID: COLD, Capacity: 100, Current Load: 20, Available Space: 80\n"));
}
