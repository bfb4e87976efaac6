/// Model hydration tests.
use adesk_sdk::models::*;
use serde_json::{json, Value};

#[test]
fn project_reads_every_declared_field() {
    let payload = json!({
        "id": 1,
        "name": "Store",
        "description": "Retail",
        "created": "2024-01-01",
        "income": 1000,
        "outcome": "250.5",
        "grossProfit": 749.5,
        "profitability": "74.95",
        "isArchived": false,
        "planIncome": 2000,
        "planOutcome": 500,
        "isDeal": true,
        "category": {"id": 2, "name": "Sales"},
        "manager": {"id": 3, "name": "Ann"},
        "deal_contractor": {"id": 4, "name": "ACME"},
        "deal_legal_entity": {"id": 0, "name": "Own LLC"},
        "unknown": "ignored"
    });

    let project = Project::from_wire(&payload);

    assert_eq!(project.id, Some(1));
    assert_eq!(project.created.as_deref(), Some("2024-01-01"));
    assert_eq!(project.income, Some(1000.0));
    assert_eq!(project.outcome, Some(250.5));
    assert_eq!(project.gross_profit, Some(749.5));
    assert_eq!(project.profitability, Some(74.95));
    assert_eq!(project.is_archived, Some(false));
    assert_eq!(project.is_deal, Some(true));
    assert_eq!(project.category.and_then(|c| c.name).as_deref(), Some("Sales"));
    assert_eq!(project.manager.and_then(|m| m.id), Some(3));
    assert_eq!(project.deal_contractor.and_then(|c| c.name).as_deref(), Some("ACME"));
    assert_eq!(project.deal_legal_entity.and_then(|e| e.id), Some(0));
}

#[test]
fn absent_source_gives_all_absent_fields() {
    assert_eq!(Project::from_wire(&Value::Null), Project::default());
    assert_eq!(Operation::from_wire(&json!({})), Operation::default());
    assert_eq!(Webhook::from_wire(&Value::Null).events, Vec::<String>::new());
}

#[test]
fn malformed_numbers_become_absent() {
    let account = BankAccount::from_wire(&json!({
        "initialAmount": "1234.56",
        "amount": "not-a-number"
    }));
    assert_eq!(account.initial_amount, Some(1234.56));
    assert_eq!(account.amount, None);

    let contractor = Contractor::from_wire(&json!({"balance": {"value": 1}}));
    assert_eq!(contractor.balance, None);
}

#[test]
fn commitment_keeps_linked_records_raw() {
    let commitment = Commitment::from_wire(&json!({
        "id": 12,
        "amount": "500",
        "vatPercent": 20,
        "legalEntity": {"id": 1, "name": "Own LLC"},
        "contractor": 7,
        "project": null,
        "shipment": {
            "id": 3,
            "batches": [{"product": {"id": 9}, "quantity": "2", "price": 250, "vat": "bad"}]
        }
    }));

    assert_eq!(commitment.amount, Some(500.0));
    assert_eq!(commitment.vat_percent, Some(20.0));
    assert_eq!(commitment.legal_entity, Some(json!({"id": 1, "name": "Own LLC"})));
    assert_eq!(commitment.contractor, Some(json!(7)));
    assert_eq!(commitment.project, None);
    let shipment = commitment.shipment.unwrap();
    assert_eq!(shipment.batches[0].quantity, Some(2.0));
    assert_eq!(shipment.batches[0].price, Some(250.0));
    assert_eq!(shipment.batches[0].vat, None);
    assert_eq!(shipment.batches[0].product, Some(json!({"id": 9})));
}

#[test]
fn product_nests_unit_and_initial_batch() {
    let product = Product::from_wire(&json!({
        "id": 5,
        "type": 1,
        "unit": {"id": 1, "symbol": "pc", "fractional": false},
        "initialBatch": {"quantity": "10", "price": "3.5", "legalEntity": 2},
        "averageCostPrice": "3.25"
    }));

    assert_eq!(product.unit.as_ref().and_then(|u| u.symbol.as_deref()), Some("pc"));
    assert_eq!(product.unit.and_then(|u| u.fractional), Some(false));
    let batch = product.initial_batch.unwrap();
    assert_eq!(batch.quantity, Some(10.0));
    assert_eq!(batch.legal_entity, Some(json!(2)));
    assert_eq!(product.average_cost_price, Some(3.25));
}

#[test]
fn custom_report_entry_lists() {
    let entry = CustomReportEntry::from_wire(&json!({
        "id": 4,
        "apiName": "ads",
        "valueType": "money",
        "groupId": 2,
        "isEditable": true,
        "cashflowCategories": [{"id": 1, "name": "Ads"}],
        "integrations": [{"id": 8, "source": "ga"}]
    }));

    assert_eq!(entry.api_name.as_deref(), Some("ads"));
    assert_eq!(entry.group_id, Some(2));
    assert_eq!(entry.cashflow_categories[0].name.as_deref(), Some("Ads"));
    assert_eq!(entry.integrations[0].source.as_deref(), Some("ga"));

    let debt = CustomReportDebtEntry::from_wire(&json!({
        "id": 1,
        "entries": [{"id": 4, "type": "entry"}],
        "cashflowCategories": null
    }));
    assert_eq!(debt.entries[0].r#type.as_deref(), Some("entry"));
    assert!(debt.cashflow_categories.is_empty());
}

#[test]
fn list_hydration_is_per_element() {
    let tags = Tag::from_wire_list(Some(&json!([{"id": 1}, "junk", {"id": 2, "color": "red"}])));
    assert_eq!(tags.len(), 3);
    assert_eq!(tags[1], Tag::default());
    assert_eq!(tags[2].color.as_deref(), Some("red"));
}

#[test]
fn models_serialize_back_to_wire_names() {
    let product = Product::from_wire(&json!({"id": 1, "initialBatch": {"quantity": 2}}));
    let value = serde_json::to_value(&product).unwrap();
    assert_eq!(value["initialBatch"]["quantity"], json!(2.0));
    assert_eq!(value["type"], Value::Null);

    let project = Project::from_wire(&json!({"deal_contractor": {"id": 4}}));
    let value = serde_json::to_value(&project).unwrap();
    assert_eq!(value["deal_contractor"]["id"], json!(4));
    assert_eq!(value["grossProfit"], Value::Null);
}

#[test]
fn integral_float_ids_and_special_floats() {
    let project = Project::from_wire(&json!({
        "id": 42.0,
        "income": "inf",
        "outcome": "NaN",
        "manager": {"id": 7.0}
    }));
    assert_eq!(project.id, Some(42));
    assert_eq!(project.income, Some(f64::INFINITY));
    assert!(project.outcome.is_some_and(f64::is_nan));
    assert_eq!(project.manager.and_then(|m| m.id), Some(7));

    let tag = Tag::from_wire(&json!({"id": 4.5}));
    assert_eq!(tag.id, None);
}

#[test]
fn serde_deserialize_matches_hydration() {
    let payload = json!({"id": "3", "name": "ads", "color": 5});
    let tag: Tag = serde_json::from_value(payload.clone()).unwrap();
    assert_eq!(tag, Tag::from_wire(&payload));
    assert_eq!(tag.color.as_deref(), Some("5"));
}
