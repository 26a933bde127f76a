//! End-to-end tests for the household store.
//!
//! These walk the flows the app screens drive: restocking (manual and
//! scanned), inventory views, cooking against the stock, shopping and
//! expiry notification planning.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tracing_subscriber::EnvFilter;
use vorrat_core::{
    daily_digest_trigger, default_expiry_on, expiring_within, group_by_category,
    group_by_expiry_date, infer_category, is_valid_ean13, sort_by_expiry_date, sort_by_name,
    upcoming, Category, DetectedItem, Household, NewItem, NewRecipe, NotificationSettings,
    NutritionFacts, ProductInfo, FALLBACK_CATEGORY,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_test_writer()
        .try_init();
}

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2023-05-20T10:30:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 5, 20).unwrap()
}

fn new_item(name: &str, category: &str, amount: &str, expires_on: &str) -> NewItem {
    NewItem {
        name: name.to_string(),
        category: category.to_string(),
        amount: amount.to_string(),
        expires_on: expires_on.to_string(),
        image_url: None,
        product_info: None,
    }
}

#[test]
fn test_restock_cook_and_shop_flow() {
    init_tracing();
    let mut household = Household::new("familie-1");

    // Restock: two manual adds plus one recognized item without details.
    household.add_item(new_item("Äpfel", "Obst", "6 Stk.", "2023-05-27"), now(), today());
    household.add_item(new_item("Milch", "Milchprodukte", "1L", "2023-05-22"), now(), today());
    household.add_detected_items(
        vec![DetectedItem {
            name: "Joghurt".to_string(),
            category: "Milchprodukte".to_string(),
            amount: None,
            expires_on: None,
            image_url: None,
            product_info: None,
        }],
        now(),
        today(),
    );

    assert_eq!(household.items().len(), 3);
    let joghurt = &household.items()[2];
    assert_eq!(joghurt.amount, "1 Stk.");
    assert_eq!(joghurt.expires_on, "2023-05-27");

    // Every add counts; the streak moved once for the day.
    let stats = household.basic_stats();
    assert_eq!(stats.saved_items, 3);
    assert_eq!(stats.saved_money, 7.5);
    assert_eq!(stats.co2_saved, 1.5);
    assert_eq!(stats.streak_days, 1);

    let extended = household.extended_stats();
    assert_eq!(extended.categories["Obst"], 1);
    assert_eq!(extended.categories["Milchprodukte"], 2);
    let may = extended
        .monthly_trend
        .iter()
        .find(|entry| entry.month == "Mai")
        .unwrap();
    assert_eq!(may.saved_items, 3);
    assert_eq!(may.saved_money, 7.5);

    // Cooking: the cake needs three things the stock does not cover.
    household.add_recipe(
        NewRecipe {
            title: "Apfelkuchen".to_string(),
            prep_time: Some("60 Min.".to_string()),
            ingredients: vec![
                "3 Äpfel".to_string(),
                "200g Mehl".to_string(),
                "100g Zucker".to_string(),
                "2 Eier".to_string(),
            ],
            instructions: "Teig kneten, Äpfel schneiden, backen.".to_string(),
        },
        now(),
    );

    let missing = household.add_missing_to_shopping_list();
    assert_eq!(missing, vec!["Mehl", "Zucker", "Eier"]);
    assert_eq!(household.shopping_list().len(), 3);
    assert!(household
        .shopping_list()
        .iter()
        .all(|entry| entry.amount == "1 Stk." && !entry.purchased));

    // Manual entry, then the same name again: merged, not duplicated.
    household.add_shopping_entry("Kaffee", "1 Packung");
    household.add_shopping_entry("Kaffee", "2 Packungen");
    assert_eq!(household.shopping_list().len(), 4);
    let kaffee = household
        .shopping_list()
        .iter()
        .find(|entry| entry.name == "Kaffee")
        .unwrap();
    assert_eq!(kaffee.amount, "2 Packungen");

    // Shop: tick off two entries, open ones sort first.
    let mehl_id = household
        .shopping_list()
        .iter()
        .find(|entry| entry.name == "Mehl")
        .unwrap()
        .id
        .clone();
    let kaffee_id = kaffee.id.clone();
    household.set_entry_purchased(&mehl_id, true).unwrap();
    household.set_entry_purchased(&kaffee_id, true).unwrap();

    let sorted = household.shopping_list_sorted();
    let names: Vec<&str> = sorted.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, vec!["Eier", "Zucker", "Kaffee", "Mehl"]);

    assert_eq!(household.clear_purchased_entries(), 2);
    assert_eq!(household.shopping_list().len(), 2);

    // The milk gets used up.
    let milch_id = household.items()[1].id.clone();
    household.mark_consumed(&milch_id).unwrap();
    assert_eq!(household.items().len(), 2);
}

#[test]
fn test_inventory_views() {
    init_tracing();
    let mut household = Household::new("familie-1");
    household.add_item(new_item("Brot", "Backwaren", "1 Stk.", "2023-05-21"), now(), today());
    household.add_item(new_item("Milch", "Milchprodukte", "1L", "2023-05-22"), now(), today());
    household.add_item(new_item("Apfel", "Obst", "4 Stk.", "2023-05-27"), now(), today());
    household.add_item(new_item("Senf", "", "1 Glas", "2023-06-30"), now(), today());
    household.add_item(new_item("Geschenk", "Sonstiges", "1 Stk.", "unbekannt"), now(), today());

    // Category view: blank categories land in the fallback bucket.
    let by_category = group_by_category(household.items());
    assert_eq!(by_category["Backwaren"].len(), 1);
    assert_eq!(by_category[FALLBACK_CATEGORY][0].name, "Senf");

    // Expiry sort: soonest first, unparseable dates at the end.
    let sorted = sort_by_expiry_date(household.items());
    let names: Vec<&str> = sorted.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Brot", "Milch", "Apfel", "Senf", "Geschenk"]);

    // Alphabetical view in German order.
    let by_name = sort_by_name(household.items());
    let names: Vec<&str> = by_name.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Apfel", "Brot", "Geschenk", "Milch", "Senf"]);

    // Calendar view: one bucket per parseable date, ascending.
    let calendar = group_by_expiry_date(household.items());
    assert_eq!(calendar.len(), 4);
    let first = calendar.iter().next().unwrap();
    assert_eq!(*first.0, NaiveDate::from_ymd_opt(2023, 5, 21).unwrap());
    assert_eq!(first.1[0].name, "Brot");

    // Soon-to-expire shortlist for the dashboard.
    let soon = expiring_within(household.items(), 7, today());
    let names: Vec<&str> = soon.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Brot", "Milch", "Apfel"]);
}

#[test]
fn test_expiry_notification_pipeline() {
    init_tracing();
    let mut household = Household::new("familie-1");
    household.add_item(new_item("Brot", "Backwaren", "1 Stk.", "2023-05-21"), now(), today());
    household.add_item(new_item("Milch", "Milchprodukte", "1L", "2023-05-22"), now(), today());
    household.add_item(new_item("Apfel", "Obst", "4 Stk.", "2023-05-27"), now(), today());

    let settings = NotificationSettings::default();
    let planned = household.plan_notifications(&settings, today());

    // Brot: every lead lands today or earlier. Milch: only the 1-day lead
    // is still ahead. Apfel: 1-day and 3-day leads.
    assert_eq!(planned.len(), 3);

    let next = upcoming(&planned, 3);
    assert_eq!(next[0].item_name, "Milch");
    assert_eq!(next[0].trigger_on, NaiveDate::from_ymd_opt(2023, 5, 21).unwrap());
    assert_eq!(next[0].title, "Lebensmittel läuft morgen ab!");
    assert_eq!(
        next[0].body,
        "Milch läuft morgen ab. Vergiss nicht, es zu verbrauchen!"
    );
    assert_eq!(next[1].item_name, "Apfel");
    assert_eq!(next[1].lead_days, 3);
    assert_eq!(next[2].lead_days, 1);

    // Shortlist stays capped.
    assert_eq!(upcoming(&planned, 2).len(), 2);

    assert_eq!(
        daily_digest_trigger(&settings),
        Some(NaiveTime::from_hms_opt(8, 0, 0).unwrap())
    );

    let muted = NotificationSettings {
        enabled: false,
        ..NotificationSettings::default()
    };
    assert!(household.plan_notifications(&muted, today()).is_empty());
}

#[test]
fn test_streak_over_days() {
    init_tracing();
    let mut household = Household::new("familie-1");

    household.add_item(new_item("Brot", "Backwaren", "1 Stk.", "2023-05-25"), now(), today());
    assert_eq!(household.basic_stats().streak_days, 1);

    // Next day extends, same day again keeps it.
    let day_two = NaiveDate::from_ymd_opt(2023, 5, 21).unwrap();
    household.add_item(new_item("Milch", "Milchprodukte", "1L", "2023-05-28"), now(), day_two);
    assert_eq!(household.basic_stats().streak_days, 2);
    household.add_item(new_item("Eier", "Sonstiges", "10 Stk.", "2023-06-05"), now(), day_two);
    assert_eq!(household.basic_stats().streak_days, 2);

    // A missed day starts over.
    let day_four = NaiveDate::from_ymd_opt(2023, 5, 23).unwrap();
    household.add_item(new_item("Butter", "Milchprodukte", "250g", "2023-06-10"), now(), day_four);
    assert_eq!(household.basic_stats().streak_days, 1);
    assert_eq!(household.basic_stats().last_activity, Some(day_four));
    assert_eq!(household.basic_stats().saved_items, 4);
}

#[test]
fn test_scanned_product_flow() {
    init_tracing();
    assert!(is_valid_ean13("4000417025005"));
    assert!(!is_valid_ean13("4000417025006"));
    assert!(!is_valid_ean13("12345"));

    let product = ProductInfo {
        id: "4000417025005".to_string(),
        barcode: "4000417025005".to_string(),
        name: "Nussschokolade".to_string(),
        brand: Some("Alpenglück".to_string()),
        quantity: Some("100g".to_string()),
        categories: Some(vec!["Süßigkeiten".to_string(), "Schokolade".to_string()]),
        nutrition_facts: NutritionFacts {
            energy_100g: Some(2252.0),
            proteins_100g: Some(6.6),
            carbohydrates_100g: Some(50.0),
            sugars_100g: Some(47.0),
            fat_100g: Some(31.0),
            salt_100g: Some(0.3),
            ..NutritionFacts::default()
        },
        eco_score: Some("b".to_string()),
        nova_group: Some(4),
        ..ProductInfo::default()
    };

    // Category and expiry proposal for the scan result.
    let category = infer_category(product.categories.as_deref().unwrap_or(&[]));
    assert_eq!(category, Category::Sweets);
    let proposed_expiry = default_expiry_on(category, today());
    assert_eq!(proposed_expiry, NaiveDate::from_ymd_opt(2023, 6, 3).unwrap());

    let mut household = Household::new("familie-1");
    let added = household.add_detected_items(
        vec![DetectedItem {
            name: product.name.clone(),
            category: category.label().to_string(),
            amount: product.quantity.clone(),
            expires_on: Some(proposed_expiry.to_string()),
            image_url: None,
            product_info: Some(product),
        }],
        now(),
        today(),
    );

    assert_eq!(added[0].category, "Süßigkeiten");
    assert_eq!(added[0].amount, "100g");
    assert_eq!(added[0].expires_on, "2023-06-03");

    // Product details feed the extended statistics.
    let extended = household.extended_stats();
    assert_eq!(extended.eco_score.b, 1);
    assert_eq!(extended.nova_groups.group4, 1);
    assert_eq!(extended.nutrition_stats.calories, 2252.0);
    assert_eq!(extended.nutrition_stats.sugar, 47.0);
    assert_eq!(extended.nutrition_stats.salt, 0.3);
    assert_eq!(extended.categories["Süßigkeiten"], 1);
}
