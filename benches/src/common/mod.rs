use mall::prelude::*;

const ITEMS: [&str; 12] = [
    "plate", "fork", "onion", "cable", "desk", "kite", "plane", "lamp", "tea", "hat", "bag", "coat",
];

/// Generate a fixture CSV with `num_customers` customers and `num_shops` shops
///
/// Every customer wants three items and every shop lists half the catalogue.
pub fn generate_csv_dataset(num_customers: usize, num_shops: usize) -> String {
    let mut csv = String::from("kind,owner,budget,item,price\n");

    for i in 0..num_customers {
        csv.push_str(&format!("customer,customer{i},{},,\n", (i % 500) + 1));
        for k in 0..3 {
            let item = ITEMS[(i + k * 5) % ITEMS.len()];
            csv.push_str(&format!("want,customer{i},,{item},0\n"));
        }
    }

    for s in 0..num_shops {
        for (k, item) in ITEMS.iter().enumerate().filter(|(k, _)| (k + s) % 2 == 0) {
            csv.push_str(&format!("shop,shop{s},,{item},{}\n", (k * 7 + s) % 90 + 1));
        }
    }

    csv
}

/// Build a synthetic dataset directly, skipping CSV parsing
pub fn generate_mall(num_customers: usize, num_shops: usize) -> Mall {
    let mut builder = MallBuilder::new();

    for i in 0..num_customers {
        let name = format!("customer{i}");
        builder
            .add_customer(&name, ((i % 500) + 1) as u32)
            .expect("unique customer names");
        for k in 0..3 {
            let item = Item::new(ITEMS[(i + k * 5) % ITEMS.len()], 0).expect("non-empty item name");
            builder.add_want(&name, item).expect("customer declared");
        }
    }

    for s in 0..num_shops {
        for (k, item) in ITEMS.iter().enumerate().filter(|(k, _)| (k + s) % 2 == 0) {
            let item = Item::new(*item, ((k * 7 + s) % 90 + 1) as u32).expect("non-empty item name");
            builder
                .add_listing(&format!("shop{s}"), item)
                .expect("non-empty shop name");
        }
    }

    builder.build()
}
